//! Common types used across the marketplace

use serde::{Deserialize, Serialize};

/// A photo attached to a property listing
///
/// Created at upload time with a local file URI; the backend replaces the
/// URI with a server URL once the creation request succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyPhoto {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// A video attached to a property listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyVideo {
    pub video: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// An amenity tag on a listing; identity is name-equality only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amenity {
    pub name: String,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A nearby-infrastructure tag on a listing (school, clinic, bus stop)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Infrastructure {
    pub name: String,
}

impl Infrastructure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}
