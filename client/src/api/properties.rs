//! Per-variant property endpoints, the combined feed, and the cross-variant
//! filter endpoint
//!
//! Creation and update requests are multipart: scalar fields are
//! stringified (booleans as "true"/"false", structured values as JSON
//! strings) and each attachment travels as a file part with its MIME type
//! inferred from the file extension.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use uuid::Uuid;

use shared::{Pagination, Property, PropertyType};

use crate::error::{ApiError, ApiResult};
use crate::filters::{FilterOptions, FilterState};
use crate::forms::ListingForm;
use crate::normalize::{self, PropertySummary, RawPropertyRecord};

use super::MarketplaceClient;

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// CRUD surface of one variant's listing endpoints
pub struct PropertyResource<'a> {
    client: &'a MarketplaceClient,
    base: &'static str,
}

impl MarketplaceClient {
    pub fn commercial(&self) -> PropertyResource<'_> {
        PropertyResource {
            client: self,
            base: "commercial",
        }
    }

    pub fn apartments(&self) -> PropertyResource<'_> {
        PropertyResource {
            client: self,
            base: "apartment",
        }
    }

    pub fn houses(&self) -> PropertyResource<'_> {
        PropertyResource {
            client: self,
            base: "house",
        }
    }

    pub fn hotels(&self) -> PropertyResource<'_> {
        PropertyResource {
            client: self,
            base: "hotels",
        }
    }

    /// Resource for a property type; boarding houses live on the house
    /// endpoints.
    pub fn properties(&self, kind: PropertyType) -> PropertyResource<'_> {
        match kind {
            PropertyType::Commercial => self.commercial(),
            PropertyType::LodgeHotel => self.hotels(),
            PropertyType::Apartment => self.apartments(),
            PropertyType::House | PropertyType::Boarding => self.houses(),
        }
    }

    /// Fetch all four variant feeds concurrently and normalize them into one
    /// list. Every branch must settle before anything renders; a single
    /// failure degrades the whole feed so the caller can substitute
    /// `normalize::placeholder_batch`.
    pub async fn combined_feed(&self, page: Pagination) -> ApiResult<Vec<PropertySummary>> {
        let commercial_resource = self.commercial();
        let apartment_resource = self.apartments();
        let house_resource = self.houses();
        let hotel_resource = self.hotels();
        let (commercial, apartments, houses, hotels) = tokio::try_join!(
            commercial_resource.list(page),
            apartment_resource.list(page),
            house_resource.list(page),
            hotel_resource.list(page),
        )?;

        let records: Vec<RawPropertyRecord> = commercial
            .into_iter()
            .chain(apartments)
            .chain(houses)
            .chain(hotels)
            .collect();
        Ok(normalize::normalize_batch(
            &records,
            &self.config().media.placeholder_images,
        ))
    }

    /// Cross-variant filter query
    pub async fn filter_properties(
        &self,
        filters: &FilterState,
        page: Pagination,
    ) -> ApiResult<Vec<RawPropertyRecord>> {
        let mut params = filters.to_query_params();
        params.extend(page_params(page));
        self.authorized_get("properties/filter/", &params).await
    }

    /// Count-only form of the filter query
    pub async fn filter_count(&self, filters: &FilterState) -> ApiResult<u64> {
        let response: CountResponse = self
            .authorized_get("properties/filter/", &filters.to_count_params())
            .await?;
        Ok(response.count)
    }

    /// Vocabulary of selectable property types and amenity categories
    pub async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.authorized_get("properties/filter/options/", &[]).await
    }

    /// Validate a listing form and publish it to the matching variant
    /// endpoint. Validation failures return the full field→message map
    /// before any request is issued.
    pub async fn publish_listing(&self, form: &ListingForm) -> ApiResult<RawPropertyRecord> {
        let listing = form.build_payload().map_err(ApiError::Validation)?;
        self.properties(listing.property_type())
            .create(&listing)
            .await
    }
}

impl PropertyResource<'_> {
    pub async fn list(&self, page: Pagination) -> ApiResult<Vec<RawPropertyRecord>> {
        self.client
            .authorized_get(&format!("{}/", self.base), &page_params(page))
            .await
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<RawPropertyRecord> {
        self.client
            .authorized_get(&format!("{}/{}/", self.base, id), &[])
            .await
    }

    pub async fn create(&self, listing: &Property) -> ApiResult<RawPropertyRecord> {
        self.client
            .authorized_multipart(Method::POST, &format!("{}/", self.base), || {
                listing_form(listing)
            })
            .await
    }

    pub async fn update(&self, id: Uuid, listing: &Property) -> ApiResult<RawPropertyRecord> {
        self.client
            .authorized_multipart(Method::PUT, &format!("{}/{}/", self.base, id), || {
                listing_form(listing)
            })
            .await
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        self.client
            .authorized_delete(&format!("{}/{}/", self.base, id))
            .await
    }

    /// Listings owned by the current user
    pub async fn my_properties(&self) -> ApiResult<Vec<RawPropertyRecord>> {
        self.client
            .authorized_get(&format!("{}/my/", self.base), &[])
            .await
    }

    pub async fn count(&self) -> ApiResult<u64> {
        let response: CountResponse = self
            .client
            .authorized_get(&format!("{}/count/", self.base), &[])
            .await?;
        Ok(response.count)
    }

    /// Backend vocabulary of sub-types for this resource
    pub async fn property_types(&self) -> ApiResult<Vec<String>> {
        self.client
            .authorized_get(&format!("{}/types/", self.base), &[])
            .await
    }
}

fn page_params(page: Pagination) -> Vec<(String, String)> {
    vec![
        ("page".to_string(), page.page.to_string()),
        ("per_page".to_string(), page.per_page.to_string()),
    ]
}

/// Encode a listing into the multipart body the create/update endpoints
/// expect.
async fn listing_form(listing: &Property) -> ApiResult<Form> {
    let value =
        serde_json::to_value(listing).map_err(|e| ApiError::Decode(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ApiError::Decode(
            "listing did not serialize to an object".to_string(),
        ));
    };

    let mut form = Form::new();
    for (key, value) in fields {
        // Attachment fields become file parts below
        if matches!(
            key.as_str(),
            "photos" | "videos" | "owner_proof" | "agent_certificate"
        ) {
            continue;
        }
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            other => serde_json::to_string(&other).map_err(|e| ApiError::Decode(e.to_string()))?,
        };
        form = form.text(key, text);
    }

    // Photo/video descriptors (captions, primary flag) ride along as JSON
    // next to their file parts.
    form = form.text(
        "photos",
        serde_json::to_string(&listing.base.photos).map_err(|e| ApiError::Decode(e.to_string()))?,
    );
    if !listing.base.videos.is_empty() {
        form = form.text(
            "videos",
            serde_json::to_string(&listing.base.videos)
                .map_err(|e| ApiError::Decode(e.to_string()))?,
        );
    }

    for (index, photo) in listing.base.photos.iter().enumerate() {
        form = form.part(format!("photo_{}", index), file_part(&photo.image).await?);
    }
    if let Some(video) = listing.base.videos.first() {
        form = form.part("video", file_part(&video.video).await?);
    }
    if let Some(path) = &listing.base.owner_proof {
        form = form.part("owner_proof", file_part(path).await?);
    }
    if let Some(path) = &listing.base.agent_certificate {
        form = form.part("agent_certificate", file_part(path).await?);
    }

    Ok(form)
}

/// Read a local attachment into a file part with its MIME type inferred
/// from the extension.
async fn file_part(uri: &str) -> ApiResult<Part> {
    let path = Path::new(uri);
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("attachment")
        .to_string();
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Part::bytes(bytes)
        .file_name(name)
        .mime_str(mime.as_ref())
        .map_err(|e| ApiError::Decode(e.to_string()))
}
