use crate::components::badge::Badge;
use crate::paths::asset_path;
use crate::router::Route;
use quizclash_game::catalog;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DailyChallengePageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(DailyChallengePage)]
pub fn daily_challenge_page(props: &DailyChallengePageProps) -> Html {
    let cat = catalog();
    let challenge = &cat.daily_challenge;
    let quiz = cat.find_quiz(&challenge.quiz_id);

    let go = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
    };

    html! {
        <div class="daily-challenge-page" data-testid="daily-challenge-page">
            <div class="screen-heading">
                <h1>{ &challenge.title }</h1>
                <p class="muted">{ &challenge.description }</p>
            </div>

            <section class="card challenge-card">
                <div class="challenge-stats">
                    <Badge label={format!("Reward {}", challenge.reward)} variant="warning" />
                    <span class="muted">{ format!("{} participants", challenge.participants) }</span>
                    <span class="muted">{ format!("Ends in {} hours", challenge.ends_in_hours) }</span>
                </div>
                {
                    quiz.map_or_else(
                        || html! { <p class="muted">{ "Today's quiz is unavailable." }</p> },
                        |quiz| {
                            let details = go(Route::Quiz { id: quiz.id.clone() });
                            html! {
                                <div class="challenge-quiz">
                                    <img src={asset_path(&quiz.image)} alt={quiz.title.clone()} />
                                    <div>
                                        <h2>{ &quiz.title }</h2>
                                        <p class="muted">{ &quiz.description }</p>
                                        <span class="muted">
                                            { format!("{} · {} questions · {} min", quiz.category, quiz.questions, quiz.time_limit) }
                                        </span>
                                    </div>
                                    <button class="btn btn-ghost" onclick={details}>{ "Quiz Details" }</button>
                                </div>
                            }
                        },
                    )
                }
                <div class="card-actions">
                    <button class="btn btn-primary btn-lg" onclick={go(Route::Battle)}>
                        { "Start Challenge" }
                    </button>
                </div>
            </section>
        </div>
    }
}
