//! Validation primitives for the Nyumba Property Marketplace
//!
//! Parsing and clamping rules shared by the listing-creation form builder
//! and the API client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Hard cap on photos per listing
pub const MAX_LISTING_PHOTOS: usize = 50;

/// Hard cap on videos per listing
pub const MAX_LISTING_VIDEOS: usize = 1;

/// Valid range for bedroom and bathroom counts
pub const ROOM_COUNT_MIN: u8 = 1;
pub const ROOM_COUNT_MAX: u8 = 5;

/// A field → message map of validation failures.
///
/// Local validation and server-side field errors both collect into this
/// shape so every invalid field can be highlighted at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Merge another error map in; existing entries win so local messages
    /// are not clobbered by a later server response.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(String, String)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Parsing and clamping
// ============================================================================

/// True when a required text field is effectively empty
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Clamp a bedroom/bathroom selector value into the closed range [1, 5].
///
/// Non-numeric or sub-range input clamps to 1, over-range input to 5.
pub fn clamp_room_count(raw: &str) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > i64::from(ROOM_COUNT_MAX) => ROOM_COUNT_MAX,
        Ok(n) if n < i64::from(ROOM_COUNT_MIN) => ROOM_COUNT_MIN,
        Ok(n) => n as u8,
        Err(_) => ROOM_COUNT_MIN,
    }
}

/// Parse a user-entered price into a decimal amount.
///
/// Accepts thousands separators and an optional leading currency marker;
/// returns None when the remainder is not a number.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().trim_start_matches(['K', 'k']).replace(',', "");
    Decimal::from_str(cleaned.trim()).ok()
}

/// Interpret a Yes/No selector string; anything but an affirmative reads No
pub fn parse_yes_no(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

/// Validate a star rating is in the 1-5 range
pub fn validate_star_rating(rating: u8) -> Result<(), &'static str> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err("Star rating must be between 1 and 5")
    }
}

/// Validate a construction year is plausible
pub fn validate_year_of_construction(year: i32) -> Result<(), &'static str> {
    if (1850..=2100).contains(&year) {
        Ok(())
    } else {
        Err("Year of construction is out of range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" Lusaka "));
    }

    #[test]
    fn clamp_room_count_bounds() {
        assert_eq!(clamp_room_count("9"), 5);
        assert_eq!(clamp_room_count("0"), 1);
        assert_eq!(clamp_room_count("-3"), 1);
        assert_eq!(clamp_room_count("three"), 1);
        assert_eq!(clamp_room_count(""), 1);
        assert_eq!(clamp_room_count("3"), 3);
        assert_eq!(clamp_room_count(" 5 "), 5);
    }

    #[test]
    fn parse_price_accepts_common_input() {
        assert_eq!(parse_price("2500"), Some(Decimal::new(2500, 0)));
        assert_eq!(parse_price("2,500.50"), Some(Decimal::new(250050, 2)));
        assert_eq!(parse_price("K1200"), Some(Decimal::new(1200, 0)));
        assert_eq!(parse_price("a lot"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn yes_no_parsing() {
        assert!(parse_yes_no("Yes"));
        assert!(parse_yes_no("yes "));
        assert!(!parse_yes_no("No"));
        assert!(!parse_yes_no("maybe"));
        assert!(!parse_yes_no(""));
    }

    #[test]
    fn star_rating_range() {
        assert!(validate_star_rating(1).is_ok());
        assert!(validate_star_rating(5).is_ok());
        assert!(validate_star_rating(0).is_err());
        assert!(validate_star_rating(6).is_err());
    }

    #[test]
    fn year_of_construction_range() {
        assert!(validate_year_of_construction(2015).is_ok());
        assert!(validate_year_of_construction(1800).is_err());
        assert!(validate_year_of_construction(2200).is_err());
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut local = ValidationErrors::new();
        local.insert("price", "Price is required");

        let mut server = ValidationErrors::new();
        server.insert("price", "invalid");
        server.insert("title", "too short");
        local.merge(server);

        assert_eq!(local.get("price"), Some("Price is required"));
        assert_eq!(local.get("title"), Some("too short"));
        assert_eq!(local.len(), 2);
    }

    proptest! {
        #[test]
        fn clamped_counts_stay_in_range(raw in "\\PC*") {
            let clamped = clamp_room_count(&raw);
            prop_assert!((ROOM_COUNT_MIN..=ROOM_COUNT_MAX).contains(&clamped));
        }

        #[test]
        fn numeric_counts_in_range_pass_through(n in 1u8..=5) {
            prop_assert_eq!(clamp_room_count(&n.to_string()), n);
        }
    }
}
