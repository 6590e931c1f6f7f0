use dioxus::prelude::*;

use super::use_catalog;
use crate::components::{home_link, ShoeGrid};
use crate::t;

/// Detail page for one listing, reached from a card's `/shoe/{slug}` link.
#[component]
pub fn ShoeDetail(slug: String) -> Element {
    let state = use_catalog();
    let listing = state.catalog.find(&slug).cloned();
    let back = home_link("page-detail__back", &t!("detail-back"));

    rsx! {
        section { class: "page page-detail",
            {back}

            if state.error.is_some() {
                p { class: "page__message page__message--error", {t!("index-load-error")} }
            } else {
                {match listing {
                    Some(listing) => rsx! {
                        ShoeGrid { listings: vec![listing] }
                    },
                    None => rsx! {
                        p { class: "page__message", {t!("detail-not-found")} }
                    },
                }}
            }
        }
    }
}
