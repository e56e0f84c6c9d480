#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css` instead of shipping an
//! assets folder, so a broken path or an emptied file only shows up as an
//! unstyled window. Catch both here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn both_palettes_define_the_background_token() {
    // Dark lives on :root, light overrides it.
    let root = EMBEDDED_CSS.find(":root").expect(":root block");
    let light = EMBEDDED_CSS.find(".app--light").expect("light palette");
    assert!(root < light, "light palette must come after :root to override it");
    assert!(EMBEDDED_CSS.matches("--color-bg:").count() >= 2);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    for token in ["body {", ".button--primary", ".scroll-top"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
