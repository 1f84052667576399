//! URL helpers that honor the deployment base path.

/// Build a URL for a static asset, prefixed with `PUBLIC_URL` when one was
/// baked in at compile time (e.g. `/app` for subdirectory hosting).
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Base path for the router, or `None` to anchor at the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_root_anchored_without_base() {
        assert_eq!(join_base("", "avatars/alex.png"), "/avatars/alex.png");
        assert_eq!(join_base("", "/avatars/alex.png"), "/avatars/alex.png");
    }

    #[test]
    fn joins_with_configured_base() {
        assert_eq!(join_base("/app", "quiz/q17.png"), "/app/quiz/q17.png");
        assert_eq!(join_base("/app/", "/quiz/q17.png"), "/app/quiz/q17.png");
    }

    #[test]
    fn router_base_defaults_to_none() {
        assert_eq!(router_base(), None);
    }
}
