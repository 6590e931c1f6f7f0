//! The set of listings the storefront shows, decoded from catalog JSON.

use std::collections::HashSet;

use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;

use super::error::CatalogError;
use super::listing::{ShoeListing, ShoeRecord};

const EMBEDDED_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/shoes.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Price,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Price => "price",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(Self::Newest),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    listings: Vec<ShoeListing>,
}

impl Catalog {
    /// Decode and validate a JSON array of shoe records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ShoeRecord> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        let mut listings = Vec::with_capacity(records.len());

        for record in records {
            let listing = ShoeListing::try_from(record)?;
            if !seen.insert(listing.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(listing.slug));
            }
            listings.push(listing);
        }

        Ok(Self { listings })
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[ShoeListing] {
        &self.listings
    }

    pub fn find(&self, slug: &str) -> Option<&ShoeListing> {
        self.listings.iter().find(|listing| listing.slug == slug)
    }

    /// Listings in display order. Price sorts by what the shopper pays, then name.
    pub fn sorted(&self, order: SortOrder) -> Vec<ShoeListing> {
        let mut listings = self.listings.clone();
        match order {
            SortOrder::Newest => listings.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortOrder::Price => listings.sort_by(|a, b| {
                a.effective_price()
                    .cmp(&b.effective_price())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        listings
    }
}

/// Catalog load result shared by the views, or the reason it could not be loaded.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub error: Option<String>,
}

static EMBEDDED_STATE: Lazy<CatalogState> = Lazy::new(CatalogState::load);

impl CatalogState {
    pub fn load() -> Self {
        match Catalog::embedded() {
            Ok(catalog) => {
                info!("catalog loaded with {} listings", catalog.len());
                Self {
                    catalog,
                    error: None,
                }
            }
            Err(err) => {
                warn!("catalog failed to load: {err}");
                Self {
                    catalog: Catalog::default(),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// The embedded catalog, decoded once per process.
    pub fn embedded() -> &'static CatalogState {
        &EMBEDDED_STATE
    }
}
