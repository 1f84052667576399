use crate::paths::asset_path;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub src: Option<AttrValue>,
    /// Size class suffix: `sm`, `md`, or `lg`.
    #[prop_or(AttrValue::Static("md"))]
    pub size: AttrValue,
}

/// Player avatar with an initial-letter fallback when no image is set.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let class = format!("avatar avatar-{}", props.size);
    match &props.src {
        Some(src) => html! {
            <img {class} src={asset_path(src)} alt={props.name.clone()} />
        },
        None => {
            let initial = props.name.chars().next().unwrap_or('?');
            html! { <div class={format!("{class} avatar-fallback")}>{ initial }</div> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_image_when_src_present() {
        let html = block_on(
            LocalServerRenderer::<Avatar>::with_props(AvatarProps {
                name: "Sara".into(),
                src: Some("avatars/sarah.webp".into()),
                size: "md".into(),
            })
            .render(),
        );
        assert!(html.contains("/avatars/sarah.webp"));
        assert!(html.contains("alt=\"Sara\""));
    }

    #[test]
    fn falls_back_to_initial_without_src() {
        let html = block_on(
            LocalServerRenderer::<Avatar>::with_props(AvatarProps {
                name: "Sara".into(),
                src: None,
                size: "lg".into(),
            })
            .render(),
        );
        assert!(html.contains("avatar-fallback"));
        assert!(html.contains('S'));
    }
}
