use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::router::Route;
use quizclash_game::catalog;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Route>,
}

/// Landing screen: hero call-to-action plus previews of the daily
/// challenge, categories, and the global leaderboard.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let cat = catalog();
    let go = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()))
    };

    html! {
        <div class="home-page" data-testid="home-page">
            <section class="hero">
                <h1>{ "QuizClash" }</h1>
                <p class="muted">{ "Challenge friends and rivals in fast-paced trivia battles." }</p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" onclick={go(Route::Battle)}>
                        { "Start a Battle" }
                    </button>
                    <button class="btn btn-outline btn-lg" onclick={go(Route::Categories)}>
                        { "Browse Categories" }
                    </button>
                </div>
            </section>

            <section class="card daily-card">
                <div class="card-row">
                    <div>
                        <h2>{ &cat.daily_challenge.title }</h2>
                        <p class="muted">{ &cat.daily_challenge.description }</p>
                        <Badge label={format!("Reward {}", cat.daily_challenge.reward)} variant="warning" />
                    </div>
                    <button class="btn btn-primary" onclick={go(Route::DailyChallenge)}>
                        { "View Challenge" }
                    </button>
                </div>
            </section>

            <section class="category-preview">
                <h2>{ "Popular Categories" }</h2>
                <div class="category-grid">
                    { for cat.categories.iter().take(4).map(|category| {
                        let route = Route::Category { slug: category.slug.clone() };
                        html! {
                            <button key={category.slug.clone()} class="category-tile" onclick={go(route)}>
                                <span class="category-icon">{ &category.icon }</span>
                                <span class="category-name">{ &category.name }</span>
                                <span class="muted">{ format!("{} quizzes", category.quiz_count) }</span>
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section class="card leaderboard-preview">
                <div class="card-row">
                    <h2>{ "Top Players" }</h2>
                    <button class="btn btn-ghost" onclick={go(Route::Leaderboard)}>
                        { "Full Leaderboard" }
                    </button>
                </div>
                <ol class="ranking-list">
                    { for cat.global_leaderboard.iter().take(3).map(|entry| html! {
                        <li key={entry.rank} class="ranking-row">
                            <span class="ranking-pos">{ entry.rank }</span>
                            <Avatar name={entry.name.clone()} src={Some(AttrValue::from(entry.avatar.clone()))} size="sm" />
                            <span class="ranking-name">{ &entry.name }</span>
                            <span class="ranking-pts">{ entry.score }</span>
                        </li>
                    }) }
                </ol>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn home_previews_catalog_sections() {
        let html = block_on(
            LocalServerRenderer::<HomePage>::with_props(HomePageProps {
                on_navigate: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("Start a Battle"));
        assert!(html.contains("Daily Challenge"));
        assert!(html.contains("Science &amp; Technology") || html.contains("Science & Technology"));
        assert!(html.contains("QuizWhiz"));
    }
}
