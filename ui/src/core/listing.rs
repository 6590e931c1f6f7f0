//! The listing a card renders, and the raw record it is validated from.

use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::error::InvalidInput;
use super::release::{from_unix_millis, parse_release_date};

/// One product as the card consumes it. Prices are in minor units (cents).
#[derive(Debug, Clone, PartialEq)]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u32,
    pub sale_price: Option<u32>,
    pub release_date: OffsetDateTime,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Path of the detail page the card links to.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// The amount a shopper pays: the sale price when there is one.
    pub fn effective_price(&self) -> u32 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// A shoe exactly as it appears in catalog JSON, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Unix milliseconds or a date string; anything else fails validation.
    #[serde(default)]
    pub release_date: serde_json::Value,
    pub num_of_colors: i64,
}

impl TryFrom<ShoeRecord> for ShoeListing {
    type Error = InvalidInput;

    fn try_from(record: ShoeRecord) -> Result<Self, Self::Error> {
        let slug = validate_slug(record.slug)?;
        let price = minor_units(&slug, "price", record.price)?;
        let sale_price = record
            .sale_price
            .map(|value| minor_units(&slug, "sale price", value))
            .transpose()?;

        let release_date = release_date(&slug, record.release_date)?;

        let num_of_colors =
            u32::try_from(record.num_of_colors).map_err(|_| InvalidInput::InvalidColorCount {
                slug: slug.clone(),
                value: record.num_of_colors,
            })?;

        Ok(Self {
            slug,
            name: record.name,
            image_src: record.image_src,
            price,
            sale_price,
            release_date,
            num_of_colors,
        })
    }
}

fn release_date(slug: &str, value: Value) -> Result<OffsetDateTime, InvalidInput> {
    let parsed = match &value {
        Value::Number(number) => number.as_i64().and_then(from_unix_millis),
        Value::String(text) => parse_release_date(text),
        _ => None,
    };
    parsed.ok_or_else(|| InvalidInput::InvalidReleaseDate {
        slug: slug.to_string(),
        raw: match value {
            Value::String(text) => text,
            other => other.to_string(),
        },
    })
}

fn validate_slug(slug: String) -> Result<String, InvalidInput> {
    if slug.is_empty() {
        return Err(InvalidInput::EmptySlug);
    }
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_';
    if !slug.chars().all(allowed) {
        return Err(InvalidInput::InvalidSlug(slug));
    }
    Ok(slug)
}

fn minor_units(slug: &str, field: &'static str, value: f64) -> Result<u32, InvalidInput> {
    let whole = value.is_finite() && value.fract() == 0.0;
    if whole && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(InvalidInput::InvalidPrice {
            slug: slug.to_string(),
            field,
            value,
        })
    }
}
