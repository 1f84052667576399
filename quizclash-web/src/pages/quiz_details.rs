use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::modal::Modal;
use crate::components::progress::ProgressBar;
use crate::paths::asset_path;
use crate::router::Route;
use quizclash_game::catalog;
use quizclash_game::catalog::Review;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct QuizDetailsPageProps {
    pub id: AttrValue,
    pub on_navigate: Callback<Route>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Leaderboard,
    Reviews,
}

/// Quiz detail screen: overview / leaderboard / reviews tabs plus a
/// write-a-review modal. Submitted reviews live only in component state.
#[function_component(QuizDetailsPage)]
pub fn quiz_details_page(props: &QuizDetailsPageProps) -> Html {
    let tab = use_state(|| Tab::Overview);
    let review_open = use_state(|| false);
    let extra_reviews = use_state(Vec::<Review>::new);
    let rating_ref = use_node_ref();
    let comment_ref = use_node_ref();

    let cat = catalog();
    let Some(quiz) = cat.find_quiz(&props.id) else {
        let back = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Categories))
        };
        return html! {
            <div class="card error-card" data-testid="quiz-not-found">
                <h1>{ "Quiz Not Found" }</h1>
                <p class="muted">{ "That quiz doesn't exist or was removed." }</p>
                <button class="btn btn-primary" onclick={back}>{ "Browse Categories" }</button>
            </div>
        };
    };

    let select_tab = |next: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(next))
    };
    let tab_button = |label: &'static str, this: Tab| {
        let class = if *tab == this { "tab active" } else { "tab" };
        html! { <button {class} onclick={select_tab(this)}>{ label }</button> }
    };

    let open_review = {
        let review_open = review_open.clone();
        Callback::from(move |_: MouseEvent| review_open.set(true))
    };
    let close_review = {
        let review_open = review_open.clone();
        Callback::from(move |()| review_open.set(false))
    };
    let submit_review = {
        let extra_reviews = extra_reviews.clone();
        let review_open = review_open.clone();
        let rating_ref = rating_ref.clone();
        let comment_ref = comment_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let rating = rating_ref
                .cast::<HtmlSelectElement>()
                .and_then(|el| el.value().parse::<u8>().ok())
                .unwrap_or(5)
                .clamp(1, 5);
            let comment = comment_ref
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            if comment.trim().is_empty() {
                return;
            }
            let mut reviews = (*extra_reviews).clone();
            reviews.push(Review {
                name: "You".to_string(),
                avatar: "avatars/alex.png".to_string(),
                rating,
                comment: comment.trim().to_string(),
            });
            extra_reviews.set(reviews);
            review_open.set(false);
        })
    };

    let play = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Battle))
    };

    let review_count = quiz.reviews.len() + extra_reviews.len();

    let body = match *tab {
        Tab::Overview => html! {
            <section class="card overview-tab">
                <p>{ &quiz.description }</p>
                <dl>
                    <dt>{ "Category" }</dt>
                    <dd>{ &quiz.category }</dd>
                    <dt>{ "Questions" }</dt>
                    <dd>{ quiz.questions }</dd>
                    <dt>{ "Time Limit" }</dt>
                    <dd>{ format!("{} minutes", quiz.time_limit) }</dd>
                    <dt>{ "Requirements" }</dt>
                    <dd>{ &quiz.requirements }</dd>
                </dl>
                <div class="tag-row">
                    { for quiz.tags.iter().map(|tag| html! {
                        <Badge key={tag.clone()} label={tag.clone()} variant="outline" />
                    }) }
                </div>
                <div class="creator-row">
                    <Avatar name={quiz.creator.name.clone()} src={Some(AttrValue::from(quiz.creator.avatar.clone()))} size="md" />
                    <div>
                        <div>{ &quiz.creator.name }</div>
                        <span class="muted">
                            { format!("{} · {} quizzes · updated {}", quiz.creator.level, quiz.creator.quizzes, quiz.creator.last_update) }
                        </span>
                    </div>
                </div>
            </section>
        },
        Tab::Leaderboard => html! {
            <section class="card leaderboard-tab">
                <ol class="ranking-list">
                    { for quiz.leaderboard.iter().map(|entry| html! {
                        <li key={entry.rank} class="ranking-row">
                            <span class="ranking-pos">{ entry.rank }</span>
                            <Avatar name={entry.name.clone()} src={Some(AttrValue::from(entry.avatar.clone()))} size="sm" />
                            <span class="ranking-name">{ &entry.name }</span>
                            <span class="muted">{ &entry.time }</span>
                            <span class="ranking-pts">{ entry.score }</span>
                        </li>
                    }) }
                </ol>
            </section>
        },
        Tab::Reviews => html! {
            <section class="card reviews-tab">
                <div class="card-row">
                    <span class="muted">{ format!("{review_count} reviews") }</span>
                    <button class="btn btn-outline" onclick={open_review.clone()}>{ "Write a Review" }</button>
                </div>
                <ul class="review-list">
                    { for quiz.reviews.iter().chain(extra_reviews.iter()).enumerate().map(|(index, review)| html! {
                        <li key={index} class="review-row">
                            <Avatar name={review.name.clone()} src={Some(AttrValue::from(review.avatar.clone()))} size="sm" />
                            <div>
                                <div class="card-row">
                                    <span>{ &review.name }</span>
                                    <span class="stars">{ ("★".repeat(usize::from(review.rating))) }</span>
                                </div>
                                <p class="muted">{ &review.comment }</p>
                            </div>
                        </li>
                    }) }
                </ul>
            </section>
        },
    };

    html! {
        <div class="quiz-details-page" data-testid="quiz-details-page">
            <section class="quiz-hero">
                <img src={asset_path(&quiz.image)} alt={quiz.title.clone()} />
                <div class="quiz-hero-body">
                    <h1>{ &quiz.title }</h1>
                    <div class="quiz-meta">
                        <Badge label={quiz.difficulty.clone()} />
                        <span class="muted">{ format!("★ {:.1} ({} ratings)", quiz.rating, quiz.rating_count) }</span>
                        <span class="muted">{ format!("Reward {}", quiz.reward) }</span>
                    </div>
                    <div class="quiz-spots">
                        <span class="muted">
                            { format!("{} of {} players joined · {} spots left", quiz.players, quiz.max_players, quiz.spots_left()) }
                        </span>
                        <ProgressBar value={quiz.fill_percent()} />
                    </div>
                    <button class="btn btn-primary btn-lg" onclick={play}>{ "Play Now" }</button>
                </div>
            </section>

            <nav class="tab-bar" aria-label="Quiz sections">
                { tab_button("Overview", Tab::Overview) }
                { tab_button("Leaderboard", Tab::Leaderboard) }
                { tab_button("Reviews", Tab::Reviews) }
            </nav>
            { body }

            if !quiz.related.is_empty() {
                <section class="related-quizzes">
                    <h2>{ "Related Quizzes" }</h2>
                    <div class="quiz-grid">
                        { for quiz.related.iter().map(|rel| {
                            let on_navigate = props.on_navigate.clone();
                            let route = Route::Quiz { id: rel.id.clone() };
                            let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()));
                            html! {
                                <button key={rel.id.clone()} class="quiz-card" {onclick}>
                                    <img src={asset_path(&rel.image)} alt={rel.title.clone()} />
                                    <div class="quiz-card-body">
                                        <h3>{ &rel.title }</h3>
                                        <Badge label={rel.difficulty.clone()} />
                                    </div>
                                </button>
                            }
                        }) }
                    </div>
                </section>
            }

            <Modal open={*review_open} title="Write a Review" on_close={close_review}>
                <label>
                    { "Rating" }
                    <select ref={rating_ref}>
                        { for (1..=5u8).rev().map(|n| html! {
                            <option value={n.to_string()} selected={n == 5}>{ ("★".repeat(usize::from(n))) }</option>
                        }) }
                    </select>
                </label>
                <label>
                    { "Comment" }
                    <textarea ref={comment_ref} rows="4" placeholder="What did you think of this quiz?" />
                </label>
                <button class="btn btn-primary" onclick={submit_review}>{ "Submit Review" }</button>
            </Modal>
        </div>
    }
}
