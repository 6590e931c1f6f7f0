use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::use_catalog;
use crate::components::ShoeGrid;
use crate::core::catalog::SortOrder;
use crate::t;

#[component]
pub fn ShoeIndex() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut sort = use_signal(SortOrder::default);
    let state = use_catalog();
    let listings = state.catalog.sorted(sort());

    debug!(
        "ShoeIndex render (lang_marker={lang_current}, sort={}, listings={})",
        sort().as_str(),
        listings.len()
    );

    let on_sort = move |evt: FormEvent| {
        if let Some(order) = SortOrder::parse(&evt.value()) {
            sort.set(order);
        }
    };

    rsx! {
        section { class: "page page-index",
            div { class: "page__header",
                h1 { class: "page__title", {t!("index-title")} }
                label { class: "page-index__sort",
                    {t!("index-sort-label")}
                    select {
                        value: "{sort().as_str()}",
                        oninput: on_sort,
                        option { value: "newest", {t!("index-sort-newest")} }
                        option { value: "price", {t!("index-sort-price")} }
                    }
                }
            }

            if state.error.is_some() {
                p { class: "page__message page__message--error", {t!("index-load-error")} }
            } else {
                ShoeGrid { listings: listings }
            }
        }
    }
}
