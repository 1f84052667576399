use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <span>{ "QuizClash: challenge friends to trivia battles" }</span>
            <span class="footer-note">{ "All match data is local to this session." }</span>
        </footer>
    }
}
