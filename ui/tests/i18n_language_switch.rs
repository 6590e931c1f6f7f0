//! Switching languages updates both the lookups and the reported current
//! language, which the navbar's picker starts from.

use ui::i18n::{current_language, init, set_language, FALLBACK_LANGUAGE};

#[test]
fn current_language_follows_runtime_switches() {
    init();

    set_language("fr-FR").unwrap();
    assert_eq!(current_language(), "fr-FR");
    assert_eq!(ui::t!("shoe-card-badge-sale"), "Promo");

    // Unparseable tags leave the selection alone.
    set_language("not a tag").unwrap();
    assert_eq!(current_language(), "fr-FR");

    set_language(FALLBACK_LANGUAGE).unwrap();
    assert_eq!(current_language(), FALLBACK_LANGUAGE);
    assert_eq!(ui::t!("shoe-card-badge-sale"), "Sale");
}
