use yew::prelude::*;

const PALETTE: [&str; 5] = ["#f59e0b", "#10b981", "#3b82f6", "#ef4444", "#a855f7"];
const PIECES: usize = 36;

/// Celebration overlay shown on the results screen for high scores.
/// Purely cosmetic; pieces are CSS-animated spans with staggered delays.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = (0..PIECES).map(|i| {
        let left = (i * 37) % 100;
        let delay_ms = (i * 83) % 1500;
        let color = PALETTE[i % PALETTE.len()];
        let style = format!(
            "left: {left}%; animation-delay: {delay_ms}ms; background-color: {color};"
        );
        html! { <span key={i} class="confetti-piece" {style} /> }
    });
    html! {
        <div class="confetti" aria-hidden="true">
            { for pieces }
        </div>
    }
}
