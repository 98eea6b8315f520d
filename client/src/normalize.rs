//! Normalization of raw backend records into uniform display summaries
//!
//! The four listing endpoints disagree on field names and types, so every
//! raw record goes through a tolerant deserialization pass and comes out as
//! a fixed-shape `PropertySummary`. Normalization never fails: absent or
//! malformed fields degrade to defaults instead of erroring.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shared::{Purpose, TermCategory};

use crate::pricing::{resolve_price, RawPrice};

/// Fallback address for records without one
pub const UNSPECIFIED_LOCATION: &str = "Location not specified";

/// Used only when configuration carries an empty placeholder pool
const FALLBACK_PLACEHOLDER: &str = "assets/placeholders/property-1.jpg";

/// A property record exactly as a listing endpoint returned it.
///
/// Every field deserializes leniently: a wrong-typed value reads as absent
/// rather than failing the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPropertyRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<Uuid>,
    #[serde(deserialize_with = "lenient")]
    pub property_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub purpose: Option<Purpose>,
    #[serde(deserialize_with = "lenient")]
    pub term_category: Option<TermCategory>,
    #[serde(deserialize_with = "lenient")]
    pub rental_price: Option<RawPrice>,
    #[serde(deserialize_with = "lenient")]
    pub sale_price: Option<RawPrice>,
    #[serde(deserialize_with = "lenient")]
    pub star_rating: Option<u8>,
    /// Some endpoints spell this `number_of_bedrooms`
    #[serde(alias = "number_of_bedrooms", deserialize_with = "lenient_count")]
    pub bedroom_count: Option<u32>,
    /// Some endpoints spell this `number_of_bathrooms`
    #[serde(alias = "number_of_bathrooms", deserialize_with = "lenient_count")]
    pub bathroom_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub photos: Option<Vec<RawPhoto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPhoto {
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
}

/// The fixed display shape every listing screen consumes
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertySummary {
    pub id: Option<Uuid>,
    /// Raw tag, passed through unchanged even when unrecognized
    pub property_type: Option<String>,
    pub image: String,
    pub price: String,
    pub star_rating: u8,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub address: String,
    pub title: String,
}

/// Normalize one raw record into its display shape.
///
/// `index` is the record's position in the list; it keys both the
/// placeholder image selection and the fallback title.
pub fn normalize_record(
    record: &RawPropertyRecord,
    index: usize,
    placeholders: &[String],
) -> PropertySummary {
    let image = record
        .photos
        .as_ref()
        .and_then(|photos| photos.first())
        .and_then(|photo| photo.image.clone())
        .unwrap_or_else(|| placeholder_image(index, placeholders));

    let price = resolve_price(
        record.purpose.unwrap_or(Purpose::Rent),
        record.term_category.unwrap_or(TermCategory::Long),
        record.rental_price.as_ref(),
        record.sale_price.as_ref(),
    )
    .to_string();

    PropertySummary {
        id: record.id,
        property_type: record.property_type.clone(),
        image,
        price,
        star_rating: record.star_rating.unwrap_or(0),
        bedrooms: record.bedroom_count.unwrap_or(0),
        bathrooms: record.bathroom_count.unwrap_or(0),
        address: non_blank(record.address.as_deref())
            .unwrap_or(UNSPECIFIED_LOCATION)
            .to_string(),
        title: non_blank(record.title.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Property {}", index + 1)),
    }
}

/// Normalize a whole page of records
pub fn normalize_batch(
    records: &[RawPropertyRecord],
    placeholders: &[String],
) -> Vec<PropertySummary> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, index, placeholders))
        .collect()
}

/// Client-generated stand-ins shown when a feed fetch fails outright
pub fn placeholder_batch(count: usize, placeholders: &[String]) -> Vec<PropertySummary> {
    (0..count)
        .map(|index| PropertySummary {
            id: None,
            property_type: None,
            image: placeholder_image(index, placeholders),
            price: resolve_price(Purpose::Rent, TermCategory::Long, None, None).to_string(),
            star_rating: 0,
            bedrooms: 0,
            bathrooms: 0,
            address: UNSPECIFIED_LOCATION.to_string(),
            title: format!("Property {}", index + 1),
        })
        .collect()
}

fn placeholder_image(index: usize, placeholders: &[String]) -> String {
    if placeholders.is_empty() {
        FALLBACK_PLACEHOLDER.to_string()
    } else {
        placeholders[index % placeholders.len()].clone()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accept a value of the expected type, reading anything else as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Counts arrive as numbers or numeric strings depending on the endpoint
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_fields_swallow_wrong_types() {
        let record: RawPropertyRecord = serde_json::from_value(serde_json::json!({
            "id": 12,
            "purpose": "LEASE_TO_OWN",
            "star_rating": "four",
            "photos": "none"
        }))
        .unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.purpose, None);
        assert_eq!(record.star_rating, None);
        assert!(record.photos.is_none());
    }

    #[test]
    fn counts_read_from_either_spelling() {
        let record: RawPropertyRecord = serde_json::from_value(serde_json::json!({
            "number_of_bedrooms": "3",
            "bathroom_count": 2
        }))
        .unwrap();

        assert_eq!(record.bedroom_count, Some(3));
        assert_eq!(record.bathroom_count, Some(2));
    }
}
