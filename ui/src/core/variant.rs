//! Which visual state a card renders in.
//!
//! A shoe with a sale price is always on sale, even when it was also released
//! recently; otherwise recency decides between a "new release" badge and no
//! badge at all. The variant is recomputed on every render and never stored.

use time::OffsetDateTime;

use super::listing::ShoeListing;
use super::release::is_new_shoe;
use super::tokens::COLORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn select(
        sale_price: Option<u32>,
        release_date: OffsetDateTime,
        now: OffsetDateTime,
    ) -> Self {
        if sale_price.is_some() {
            Self::OnSale
        } else if is_new_shoe(release_date, now) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    pub fn of(listing: &ShoeListing, now: OffsetDateTime) -> Self {
        Self::select(listing.sale_price, listing.release_date, now)
    }

    /// Badge background, if this variant shows a badge.
    pub fn badge_color(self) -> Option<&'static str> {
        match self {
            Self::OnSale => Some(COLORS.primary),
            Self::NewRelease => Some(COLORS.secondary),
            Self::Default => None,
        }
    }

    /// Value for the base price's `--text-decoration` property.
    pub fn price_decoration(self) -> &'static str {
        match self {
            Self::OnSale => "line-through",
            _ => "none",
        }
    }

    /// Modifier class, e.g. `shoe-card--on-sale`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::OnSale => "shoe-card--on-sale",
            Self::NewRelease => "shoe-card--new-release",
            Self::Default => "shoe-card--default",
        }
    }
}
