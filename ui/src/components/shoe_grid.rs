use dioxus::prelude::*;

use crate::components::ShoeCard;
use crate::core::listing::ShoeListing;
use crate::t;

const SHOE_CARD_CSS: Asset = asset!("/assets/styling/shoe_card.css");
const SHOE_CARD_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/shoe_card.css"
));

/// Wrapping row of [`ShoeCard`]s, in the order given.
#[component]
pub fn ShoeGrid(listings: Vec<ShoeListing>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SHOE_CARD_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SHOE_CARD_CSS_INLINE}" }
        }

        if listings.is_empty() {
            p { class: "shoe-grid__placeholder", {t!("index-empty")} }
        } else {
            div { class: "shoe-grid",
                for listing in listings.iter() {
                    ShoeCard { key: "{listing.slug}", listing: listing.clone() }
                }
            }
        }
    }
}
