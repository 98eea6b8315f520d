//! Detail-screen routing keyed on property type
//!
//! A closed route set drives which detail screen a listing opens. Boarding
//! houses share the house detail route while keeping their own tag in
//! storage; an unrecognized raw tag falls back to the house route with a
//! warning, never a failure.

use shared::PropertyType;

/// Detail screens a listing can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRoute {
    House,
    Apartment,
    Commercial,
    LodgeHotel,
}

impl From<PropertyType> for DetailRoute {
    fn from(kind: PropertyType) -> Self {
        match kind {
            PropertyType::House | PropertyType::Boarding => DetailRoute::House,
            PropertyType::Apartment => DetailRoute::Apartment,
            PropertyType::Commercial => DetailRoute::Commercial,
            PropertyType::LodgeHotel => DetailRoute::LodgeHotel,
        }
    }
}

impl DetailRoute {
    /// Route for a raw wire tag, as found on a normalized summary
    pub fn from_tag(tag: &str) -> DetailRoute {
        match tag.parse::<PropertyType>() {
            Ok(kind) => kind.into(),
            Err(err) => {
                tracing::warn!(error = %err, "routing unrecognized property type to house detail");
                DetailRoute::House
            }
        }
    }
}
