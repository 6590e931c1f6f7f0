use dioxus::prelude::*;

use crate::core::catalog::CatalogState;

mod index;
pub use index::ShoeIndex;

mod shoe;
pub use shoe::{ShoeDetail, ShoeDetailProps};

/// Catalog provided by an ancestor through context, else the embedded one.
fn use_catalog() -> CatalogState {
    try_use_context::<CatalogState>().unwrap_or_else(|| CatalogState::embedded().clone())
}
