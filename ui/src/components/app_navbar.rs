use crate::i18n;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors.
///
/// `ui` does not know each launcher's `Route` enum, so launchers register a
/// `NavBuilder` whose functions build router `Link`s:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |class, label| rsx!( Link { class: "{class}", to: Route::ShoeIndex {}, "{label}" } ),
///     shoe: |class, slug, body| rsx!( Link {
///         class: "{class}",
///         to: Route::ShoeDetail { slug: slug.to_string() },
///         {body}
///     } ),
/// });
/// ```
/// Without a builder, links fall back to plain anchors (`/` and `/shoe/{slug}`)
/// and `AppNavbar` renders whatever children it was given.
pub struct NavBuilder {
    pub home: fn(class: &'static str, label: &str) -> Element,
    pub shoe: fn(class: &'static str, slug: &str, body: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the storefront index carrying `label`.
pub fn home_link(class: &'static str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(class, label),
        None => rsx! {
            a { class: "{class}", href: "/", "{label}" }
        },
    }
}

/// Link wrapping `body` that opens the detail page of `slug`.
pub fn shoe_link(class: &'static str, slug: &str, body: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.shoe)(class, slug, body),
        None => {
            let href = format!("/shoe/{slug}");
            rsx! {
                a { class: "{class}", href: "{href}", {body} }
            }
        }
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code, when the launcher provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    debug!("AppNavbar render lang={lang_marker:?}");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("language switch to {val} failed: {err}"),
        }
    };

    let internal_links = NAV_BUILDER
        .get()
        .map(|_| home_link("navbar__link", &t!("nav-home")));
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Stride" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(links) = internal_links {
                    nav { class: "navbar__links", {links} }
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx! {
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
