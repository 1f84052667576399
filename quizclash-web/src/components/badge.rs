use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    /// Style suffix: `default`, `outline`, `success`, `warning`.
    #[prop_or(AttrValue::Static("default"))]
    pub variant: AttrValue,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={format!("badge badge-{}", props.variant)}>{ props.label.clone() }</span>
    }
}
