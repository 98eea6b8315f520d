//! House and boarding-house listing payload

use serde::{Deserialize, Serialize};

use crate::types::{Amenity, Infrastructure};

use super::SharedAccess;

/// Variant payload for standalone houses and boarding houses.
///
/// Boarding houses reuse this shape; `is_boarding` distinguishes them while
/// the wire tag stays `BOARDING`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HouseDetails {
    #[serde(default)]
    pub is_boarding: bool,
    /// Bedrooms, 1 through 5
    pub bedroom_count: u8,
    /// Bathrooms, 1 through 5
    pub bathroom_count: u8,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_patio: bool,
    #[serde(default)]
    pub has_pool: bool,
    #[serde(default)]
    pub garden: SharedAccess,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub infrastructure: Vec<Infrastructure>,
}

#[cfg(test)]
impl HouseDetails {
    pub fn sample() -> Self {
        Self {
            is_boarding: false,
            bedroom_count: 3,
            bathroom_count: 2,
            has_balcony: false,
            has_patio: true,
            has_pool: false,
            garden: SharedAccess::Private,
            amenities: vec![Amenity::new("Borehole")],
            infrastructure: vec![Infrastructure::new("Primary school")],
        }
    }
}
