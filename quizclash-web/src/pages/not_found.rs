use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NotFoundPageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Home))
    };
    html! {
        <div class="card error-card" data-testid="not-found-page">
            <h1>{ "404" }</h1>
            <p class="muted">{ "This page wandered off the leaderboard." }</p>
            <button class="btn btn-primary" onclick={home}>{ "Back to Home" }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn not_found_offers_a_way_home() {
        let html = block_on(
            LocalServerRenderer::<NotFoundPage>::with_props(NotFoundPageProps {
                on_navigate: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("404"));
        assert!(html.contains("Back to Home"));
    }
}
