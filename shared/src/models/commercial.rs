//! Commercial unit listing payload

use serde::{Deserialize, Serialize};

use crate::types::{Amenity, Infrastructure};

use super::SharedAccess;

/// Variant payload for shops, offices, and other commercial units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommercialDetails {
    /// Bathrooms, 1 through 5
    pub bathroom_count: u8,
    #[serde(default)]
    pub has_balcony: bool,
    #[serde(default)]
    pub has_patio: bool,
    #[serde(default)]
    pub in_unit_laundry: bool,
    #[serde(default)]
    pub pool: SharedAccess,
    #[serde(default)]
    pub garden: SharedAccess,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub infrastructure: Vec<Infrastructure>,
}
