use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::{shoe_link, Spacer};
use crate::core::{
    format::{format_price, pluralize},
    listing::ShoeListing,
    variant::Variant,
};
use crate::i18n;
use crate::t;

/// Product card linking to the shoe's detail page (see [`shoe_link`]).
///
/// Shows a "Sale" or "Just Released!" badge depending on the listing's
/// [`Variant`]; on sale the base price is struck through and the sale price
/// appears underneath it.
#[component]
pub fn ShoeCard(listing: ShoeListing) -> Element {
    i18n::init();

    let variant = Variant::of(&listing, OffsetDateTime::now_utc());
    let badge = variant.badge_color().map(|color| (badge_label(variant), color));

    let variant_class = variant.css_class();
    let decoration = variant.price_decoration();
    let price = format_price(listing.price);
    let sale_price = match variant {
        Variant::OnSale => listing.sale_price.map(format_price),
        _ => None,
    };
    let colors = pluralize("Color", listing.num_of_colors);

    let card = rsx! {
        article { class: "shoe-card__wrapper {variant_class}",
            div { class: "shoe-card__image-wrapper",
                if let Some((label, color)) = badge {
                    div { class: "shoe-card__badge", style: "--color: {color}", "{label}" }
                }
                // TODO: carry real alt text once listings provide an image description.
                img { class: "shoe-card__image", alt: "", src: "{listing.image_src}" }
            }
            Spacer { size: 12 }
            div { class: "shoe-card__row",
                h3 { class: "shoe-card__name", "{listing.name}" }
                div { class: "shoe-card__price-wrapper",
                    span {
                        class: "shoe-card__price",
                        style: "--text-decoration: {decoration}",
                        "{price}"
                    }
                    if let Some(sale) = sale_price {
                        span { class: "shoe-card__sale-price", "{sale}" }
                    }
                }
            }
            div { class: "shoe-card__row",
                p { class: "shoe-card__color-info", "{colors}" }
            }
        }
    };

    shoe_link("shoe-card", &listing.slug, card)
}

fn badge_label(variant: Variant) -> String {
    match variant {
        Variant::OnSale => t!("shoe-card-badge-sale"),
        Variant::NewRelease => t!("shoe-card-badge-new"),
        Variant::Default => String::new(),
    }
}
