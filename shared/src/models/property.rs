//! Core property listing model shared by all variants

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::types::{PropertyPhoto, PropertyVideo};

use super::{ApartmentDetails, CommercialDetails, HouseDetails, LodgeHotelDetails};

/// Rental term bucket a listing is offered under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermCategory {
    Short,
    Long,
}

impl TermCategory {
    pub fn as_tag(&self) -> &'static str {
        match self {
            TermCategory::Short => "SHORT",
            TermCategory::Long => "LONG",
        }
    }
}

/// What the owner is offering the property for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Purpose {
    Rent,
    Buy,
    RentBuy,
}

impl Purpose {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Purpose::Rent => "RENT",
            Purpose::Buy => "BUY",
            Purpose::RentBuy => "RENT_BUY",
        }
    }
}

/// The closed set of listing variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Commercial,
    LodgeHotel,
    Apartment,
    House,
    Boarding,
}

impl PropertyType {
    /// Wire tag as sent by the backend
    pub fn as_tag(&self) -> &'static str {
        match self {
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::LodgeHotel => "LODGE_HOTEL",
            PropertyType::Apartment => "APARTMENT",
            PropertyType::House => "HOUSE",
            PropertyType::Boarding => "BOARDING",
        }
    }

    pub fn all() -> [PropertyType; 5] {
        [
            PropertyType::Commercial,
            PropertyType::LodgeHotel,
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Boarding,
        ]
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Raised when a wire tag does not name a known property type
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown property type tag: {0}")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "COMMERCIAL" => Ok(PropertyType::Commercial),
            "LODGE_HOTEL" => Ok(PropertyType::LodgeHotel),
            "APARTMENT" => Ok(PropertyType::Apartment),
            "HOUSE" => Ok(PropertyType::House),
            "BOARDING" => Ok(PropertyType::Boarding),
            other => Err(UnknownPropertyType(other.to_string())),
        }
    }
}

/// Access level for a shared facility such as a garden or pool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SharedAccess {
    Private,
    Common,
    #[default]
    No,
}

/// Fields common to every listing variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaseProperty {
    /// Assigned by the backend; absent on creation payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub term_category: TermCategory,
    pub purpose: Purpose,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub price_negotiable: bool,
    pub title: String,
    pub address: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_construction: Option<i32>,
    #[serde(default)]
    pub security: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub allow_smoking: bool,
    #[serde(default)]
    pub allow_kids: bool,
    #[serde(default)]
    pub photos: Vec<PropertyPhoto>,
    #[serde(default)]
    pub videos: Vec<PropertyVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_certificate: Option<String>,
    #[serde(default)]
    pub is_agent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BaseProperty {
    /// The price field that is authoritative for this listing's purpose.
    ///
    /// Rent → rental price; Buy → sale price; RentBuy → both must be
    /// present and the rental price takes display priority.
    pub fn authoritative_price(&self) -> Option<Decimal> {
        match self.purpose {
            Purpose::Rent => self.rental_price,
            Purpose::Buy => self.sale_price,
            Purpose::RentBuy => self.rental_price.or(self.sale_price),
        }
    }
}

/// Variant-specific listing payload, tagged by `property_type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "property_type")]
pub enum PropertyDetails {
    #[serde(rename = "COMMERCIAL")]
    Commercial(CommercialDetails),
    #[serde(rename = "LODGE_HOTEL")]
    LodgeHotel(LodgeHotelDetails),
    #[serde(rename = "APARTMENT")]
    Apartment(ApartmentDetails),
    #[serde(rename = "HOUSE")]
    House(HouseDetails),
    /// Boarding houses share the house payload shape but keep their own tag
    #[serde(rename = "BOARDING")]
    Boarding(HouseDetails),
}

impl PropertyDetails {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyDetails::Commercial(_) => PropertyType::Commercial,
            PropertyDetails::LodgeHotel(_) => PropertyType::LodgeHotel,
            PropertyDetails::Apartment(_) => PropertyType::Apartment,
            PropertyDetails::House(_) => PropertyType::House,
            PropertyDetails::Boarding(_) => PropertyType::Boarding,
        }
    }
}

/// A complete property listing: shared base plus variant payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(flatten)]
    pub base: BaseProperty,
    #[serde(flatten)]
    pub details: PropertyDetails,
}

impl Property {
    pub fn property_type(&self) -> PropertyType {
        self.details.property_type()
    }
}
