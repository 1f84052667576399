use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// 0-100.
    pub value: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let clamped = props.value.clamp(0.0, 100.0);
    html! {
        <div class="progress" role="progressbar" aria-valuenow={format!("{clamped:.0}")} aria-valuemin="0" aria-valuemax="100">
            <div class="progress-fill" style={format!("width: {clamped:.1}%")} />
        </div>
    }
}
