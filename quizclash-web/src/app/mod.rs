pub mod phase;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::battle::BattlePage;
use crate::pages::categories::CategoriesPage;
use crate::pages::category::CategoryPage;
use crate::pages::daily_challenge::DailyChallengePage;
use crate::pages::home::HomePage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::quiz_details::QuizDetailsPage;
use crate::pages::support::SupportPage;
use crate::paths::router_base;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Application shell: router, header, routed page, footer. Pages receive
/// navigation as a callback so they render without router context in tests.
#[function_component(App)]
pub fn app() -> Html {
    match router_base() {
        Some(base) => html! {
            <BrowserRouter basename={base}>
                <Shell />
            </BrowserRouter>
        },
        None => html! {
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        },
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let navigator = use_navigator().expect("shell must render under a router");
    let on_navigate = Callback::from(move |route: Route| navigator.push(&route));

    let render = {
        let on_navigate = on_navigate.clone();
        move |route: Route| page_for(route, &on_navigate)
    };

    html! {
        <>
            <Header on_navigate={on_navigate.clone()} />
            <main class="page-main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
        </>
    }
}

fn page_for(route: Route, on_navigate: &Callback<Route>) -> Html {
    let on_navigate = on_navigate.clone();
    match route {
        Route::Home => html! { <HomePage {on_navigate} /> },
        Route::Battle => {
            let on_exit = on_navigate.reform(|()| Route::Home);
            html! { <BattlePage {on_exit} /> }
        }
        Route::DailyChallenge => html! { <DailyChallengePage {on_navigate} /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
        Route::Categories => html! { <CategoriesPage {on_navigate} /> },
        Route::Category { slug } => html! {
            <CategoryPage slug={AttrValue::from(slug)} {on_navigate} />
        },
        Route::Quiz { id } => html! {
            <QuizDetailsPage id={AttrValue::from(id)} {on_navigate} />
        },
        Route::Support => html! { <SupportPage /> },
        Route::NotFound => html! { <NotFoundPage {on_navigate} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_maps_to_a_page() {
        let noop = Callback::noop();
        let routes = [
            Route::Home,
            Route::Battle,
            Route::DailyChallenge,
            Route::Leaderboard,
            Route::Categories,
            Route::Category {
                slug: "history".to_string(),
            },
            Route::Quiz {
                id: "1".to_string(),
            },
            Route::Support,
            Route::NotFound,
        ];
        for route in routes {
            // Building the vnode must not panic for any route.
            let _ = page_for(route, &noop);
        }
    }
}
