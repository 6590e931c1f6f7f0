//! Formatting helpers for presenting listings.

/// Render a price held in minor units as dollars.
///
/// Whole amounts drop the cents (`16500` → `$165`); anything else keeps two
/// decimals (`13450` → `$134.50`).
pub fn format_price(minor_units: u32) -> String {
    let dollars = minor_units / 100;
    let cents = minor_units % 100;
    if cents == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

/// `pluralize("Color", 1)` → `"1 Color"`, `pluralize("Color", 3)` → `"3 Colors"`.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
