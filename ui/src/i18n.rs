//! Localization for `stride-ui`.
//!
//! Wires `i18n-embed` (language negotiation and loading) to `rust-embed`
//! (compile-time embedding of the `.ftl` files) and `i18n-embed-fl` (`fl!`,
//! checked against the fallback file at compile time).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/stride-ui.ftl   (fallback/reference)
//!   es-ES/stride-ui.ftl
//!   fr-FR/stride-ui.ftl
//! ```
//!
//! Call [`init`] once before rendering (it is idempotent), then look messages
//! up with the crate's `t!` macro:
//! ```ignore
//! ui::i18n::init();
//! let label = ui::t!("nav-home");
//! ```
//!
//! Desktop builds negotiate against the OS locale list; web builds use
//! `navigator.languages`. A new locale needs a copy of the en-US file under
//! `i18n/<lang-id>/stride-ui.ftl` with every message translated.
use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::{fluent::FluentLanguageLoader, I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-home")`, or with Fluent arguments `t!(<key>, name = value)`,
/// routed through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; must match `domain` in `i18n.toml` and the `.ftl` file names.
pub const DOMAIN: &str = "stride-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    let loaded = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    debug!("loaded languages {loaded:?} for request {requested:?}");
    Ok(())
}

/// Load the bundles for the platform's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&requested_languages()) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => select(&[lang]),
        Err(_) => {
            debug!("ignoring unparseable language tag {tag:?}");
            Ok(())
        }
    }
}

/// Tag of the language whose bundle currently answers lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded language tags, sorted, for the language picker.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(lang, _)| lang.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn requested_languages() -> Vec<LanguageIdentifier> {
    #[cfg(target_arch = "wasm32")]
    let requested = i18n_embed::WebLanguageRequester::requested_languages();
    #[cfg(not(target_arch = "wasm32"))]
    let requested = i18n_embed::DesktopLanguageRequester::requested_languages();
    requested
}
