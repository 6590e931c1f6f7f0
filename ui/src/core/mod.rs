//! Pure, platform-agnostic building blocks shared by the components.

pub mod catalog;
pub mod error;
pub mod format;
pub mod listing;
pub mod release;
pub mod tokens;
pub mod variant;
