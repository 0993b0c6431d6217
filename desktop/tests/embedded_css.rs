#![cfg(test)]
//! The desktop build inlines the shared theme from `ui/assets/theme/main.css`.
//! A broken path or truncated file would only show up as unstyled pages at
//! runtime, so fail here instead. Keep the path in sync with `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_blank() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "embedded theme is empty; desktop pages would render unstyled"
    );
}

#[test]
fn embedded_css_defines_design_tokens() {
    for token in ["--color-bg", "--color-primary", "--radius-card", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "expected token `{token}` missing from embedded CSS"
        );
    }
}
