#![cfg(test)]
//! The desktop shell embeds `ui/assets/theme/main.css` at compile time. A broken
//! path or truncated file would only show up as an unstyled window, so check it here.
//!
//! Keep the path in sync with `MAIN_CSS_INLINE` in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "embedded theme is empty"
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-danger",
        "body {",
        ".button--primary",
        ".upload-card",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in embedded theme");
}
