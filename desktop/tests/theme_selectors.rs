#![cfg(test)]
/*!
Selector lint for the stylesheets the desktop build embeds.

The card and page components emit fixed class names; if a refactor renames a
class in the markup or the CSS without the other, packaged builds silently lose
styling. Renaming a selector means updating the component markup and the
lists below together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const SHOE_CARD_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/shoe_card.css"
));

const THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page__header",
    ".page__title",
    ".page-index__sort",
    ".page-detail__back",
    ".page__message--error",
    "@media (max-width: 720px)",
];

const CARD_SELECTORS: &[&str] = &[
    ".shoe-grid {",
    ".shoe-grid__placeholder",
    ".shoe-card {",
    ".shoe-card__wrapper",
    ".shoe-card__image-wrapper",
    ".shoe-card__image {",
    ".shoe-card__badge",
    ".shoe-card__row",
    ".shoe-card__name",
    ".shoe-card__price-wrapper",
    ".shoe-card__price {",
    ".shoe-card__sale-price",
    ".shoe-card__color-info",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in shared theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn card_stylesheet_contains_required_selectors() {
    let missing = missing(SHOE_CARD_CSS, CARD_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in card stylesheet:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn card_reads_its_inline_custom_properties() {
    // The card sets these inline per variant; the stylesheet must consume them.
    for property in ["var(--color)", "var(--text-decoration)"] {
        assert!(
            SHOE_CARD_CSS.contains(property),
            "Card stylesheet never reads `{property}`"
        );
    }
}

#[test]
fn stylesheets_use_token_properties() {
    for token in ["var(--color-primary)", "var(--color-gray-700)", "var(--weight-medium)"] {
        assert!(
            SHOE_CARD_CSS.contains(token),
            "Card stylesheet does not use design token `{token}`"
        );
    }
}
