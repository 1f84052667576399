use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<Route>,
}

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Battle", Route::Battle),
    ("Daily Challenge", Route::DailyChallenge),
    ("Leaderboard", Route::Leaderboard),
    ("Categories", Route::Categories),
    ("Support", Route::Support),
];

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |label: &'static str, route: Route| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()));
        html! { <button class="nav-link" {onclick}>{ label }</button> }
    };
    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Home))
    };
    html! {
        <header class="site-header">
            <button class="brand" onclick={home}>{ "QuizClash" }</button>
            <nav aria-label="Main">
                { for NAV_ITEMS.iter().map(|(label, route)| nav_button(label, route.clone())) }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_lists_every_section() {
        let html = block_on(
            LocalServerRenderer::<Header>::with_props(HeaderProps {
                on_navigate: Callback::noop(),
            })
            .render(),
        );
        for (label, _) in NAV_ITEMS {
            assert!(html.contains(label), "missing nav entry {label}");
        }
        assert!(html.contains("QuizClash"));
    }
}
