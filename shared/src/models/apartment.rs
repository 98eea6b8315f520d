//! Apartment listing payload

use serde::{Deserialize, Serialize};

use crate::types::{Amenity, Infrastructure};

use super::SharedAccess;

/// Total room count bucket for an apartment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomCount {
    #[serde(rename = "STUDIO")]
    Studio,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5+")]
    FivePlus,
}

impl RoomCount {
    /// Parse a selector label as shown in the room-count picker
    pub fn from_label(label: &str) -> Option<RoomCount> {
        match label.trim() {
            "STUDIO" | "Studio" | "studio" => Some(RoomCount::Studio),
            "1" => Some(RoomCount::One),
            "2" => Some(RoomCount::Two),
            "3" => Some(RoomCount::Three),
            "4" => Some(RoomCount::Four),
            "5+" => Some(RoomCount::FivePlus),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoomCount::Studio => "STUDIO",
            RoomCount::One => "1",
            RoomCount::Two => "2",
            RoomCount::Three => "3",
            RoomCount::Four => "4",
            RoomCount::FivePlus => "5+",
        };
        f.write_str(label)
    }
}

/// Variant payload for apartments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApartmentDetails {
    pub room_count: RoomCount,
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
mod tests {
    use super::*;

    #[test]
    fn room_count_wire_labels() {
        assert_eq!(serde_json::to_value(RoomCount::Studio).unwrap(), "STUDIO");
        assert_eq!(serde_json::to_value(RoomCount::FivePlus).unwrap(), "5+");
        assert_eq!(
            serde_json::from_value::<RoomCount>("2".into()).unwrap(),
            RoomCount::Two
        );
    }

    #[test]
    fn room_count_from_selector_label() {
        assert_eq!(RoomCount::from_label("Studio"), Some(RoomCount::Studio));
        assert_eq!(RoomCount::from_label("5+"), Some(RoomCount::FivePlus));
        assert_eq!(RoomCount::from_label("6"), None);
    }
}
