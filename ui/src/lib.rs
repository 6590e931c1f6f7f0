//! Shared UI crate for Stride. The product card, its helpers and the
//! storefront views live here; launcher crates only add routing.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::{home_link, shoe_link};
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod shoe_card;
    pub use shoe_card::{ShoeCard, ShoeCardProps};

    mod shoe_grid;
    pub use shoe_grid::{ShoeGrid, ShoeGridProps};

    mod spacer;
    pub use spacer::{Axis, Spacer};
}
