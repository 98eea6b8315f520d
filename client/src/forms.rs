//! Listing-creation form state, validation, and payload assembly
//!
//! One parametrized form covers every variant and term category; the
//! variant-specific selections ride in `VariantForm` so validation rules
//! and payload shape stay data-driven instead of duplicated per screen.
//! Validation runs before any network call and reports every failing field
//! at once, in the same field → message shape server-side errors merge
//! into.

use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use shared::{
    clamp_room_count, is_blank, parse_price, parse_yes_no, validate_star_rating,
    validate_year_of_construction, Amenity, ApartmentDetails, BaseProperty, BedType,
    CommercialDetails, HouseDetails, Infrastructure, LodgeAmenitySheet, LodgeHotelDetails,
    MealOption, Property, PropertyDetails, PropertyPhoto, PropertyVideo, Purpose, RoomCount,
    RoomType, SharedAccess, TermCategory, ValidationErrors, ViewType, MAX_LISTING_PHOTOS,
    MAX_LISTING_VIDEOS,
};

/// Accumulated state of the listing-creation form
#[derive(Debug, Clone, Validate)]
pub struct ListingForm {
    pub term_category: TermCategory,
    pub purpose: Purpose,
    pub variant: VariantForm,
    pub title: String,
    #[validate(custom = "validate_address_input")]
    pub address: String,
    pub description: String,
    /// Raw price input; maps to the purpose's authoritative price field
    #[validate(custom = "validate_price_input")]
    pub price: String,
    /// Sale component, used only when the purpose is RENT_BUY
    pub sale_price: String,
    /// Yes/No selector
    pub negotiable: String,
    pub year_built: String,
    /// Yes/No selectors for the shared amenity flags
    pub security: String,
    pub pet_friendly: String,
    pub allow_smoking: String,
    pub allow_kids: String,
    /// Local URIs of selected photos, in display order
    pub photos: Vec<String>,
    /// Local URIs of selected videos; at most one survives validation
    pub videos: Vec<String>,
    pub owner_proof: Option<String>,
    pub agent_certificate: Option<String>,
    pub is_agent: bool,
    pub accepted_terms: bool,
}

/// Variant-specific form selections
#[derive(Debug, Clone)]
pub enum VariantForm {
    House(HouseForm),
    Apartment(ApartmentForm),
    Commercial(CommercialForm),
    LodgeHotel(LodgeHotelForm),
}

#[derive(Debug, Clone, Default)]
pub struct HouseForm {
    pub is_boarding: bool,
    /// Bedroom selector value
    pub rooms: String,
    pub bathrooms: String,
    /// Yes/No selectors
    pub balcony: String,
    pub patio: String,
    pub pool: String,
    pub garden: Option<SharedAccess>,
    pub amenities: Vec<String>,
    pub infrastructure: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ApartmentForm {
    /// Total-rooms selector label (STUDIO, 1..4, 5+)
    pub rooms: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub balcony: String,
    pub patio: String,
    pub pool: String,
    pub garden: Option<SharedAccess>,
    pub amenities: Vec<String>,
    pub infrastructure: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommercialForm {
    pub bathrooms: String,
    pub balcony: String,
    pub patio: String,
    pub laundry: String,
    pub pool: Option<SharedAccess>,
    pub garden: Option<SharedAccess>,
    pub amenities: Vec<String>,
    pub infrastructure: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LodgeHotelForm {
    pub star_rating: Option<u8>,
    pub room_type: Option<RoomType>,
    pub room_count: String,
    pub bed_type: Option<BedType>,
    pub view_type: Option<ViewType>,
    pub meal_option: Option<MealOption>,
    /// Selected amenity labels, flattened across category buckets
    pub amenities: Vec<String>,
}

impl ListingForm {
    pub fn new(term_category: TermCategory, purpose: Purpose, variant: VariantForm) -> Self {
        Self {
            term_category,
            purpose,
            variant,
            title: String::new(),
            address: String::new(),
            description: String::new(),
            price: String::new(),
            sale_price: String::new(),
            negotiable: String::new(),
            year_built: String::new(),
            security: String::new(),
            pet_friendly: String::new(),
            allow_smoking: String::new(),
            allow_kids: String::new(),
            photos: Vec::new(),
            videos: Vec::new(),
            owner_proof: None,
            agent_certificate: None,
            is_agent: false,
            accepted_terms: false,
        }
    }

    /// Validate every field, collecting all failures at once
    pub fn validate_all(&self) -> ValidationErrors {
        let mut errors = self.derive_errors();

        match &self.variant {
            VariantForm::House(form) => {
                if is_blank(&form.rooms) {
                    errors.insert("rooms", "Number of rooms is required");
                }
                if is_blank(&form.bathrooms) {
                    errors.insert("bathrooms", "Number of bathrooms is required");
                }
            }
            VariantForm::Apartment(form) => {
                if RoomCount::from_label(&form.rooms).is_none() {
                    errors.insert("rooms", "Number of rooms is required");
                }
                if is_blank(&form.bathrooms) {
                    errors.insert("bathrooms", "Number of bathrooms is required");
                }
            }
            VariantForm::Commercial(form) => {
                if is_blank(&form.bathrooms) {
                    errors.insert("bathrooms", "Number of bathrooms is required");
                }
            }
            VariantForm::LodgeHotel(form) => {
                if form.room_type.is_none() {
                    errors.insert("room_type", "Room type is required");
                }
                if form.bed_type.is_none() {
                    errors.insert("bed_type", "Bed type is required");
                }
                if let Some(rating) = form.star_rating {
                    if let Err(message) = validate_star_rating(rating) {
                        errors.insert("star_rating", message);
                    }
                }
            }
        }

        if self.purpose == Purpose::RentBuy {
            match parse_price(&self.sale_price) {
                Some(amount) if amount > Decimal::ZERO => {}
                _ if is_blank(&self.sale_price) => {
                    errors.insert("sale_price", "Sale price is required");
                }
                _ => {
                    errors.insert("sale_price", "Sale price must be a positive number");
                }
            }
        }

        if self.photos.is_empty() {
            errors.insert("photos", "At least one photo is required");
        } else if self.photos.len() > MAX_LISTING_PHOTOS {
            errors.insert("photos", "A listing can include at most 50 photos");
        }
        if self.videos.len() > MAX_LISTING_VIDEOS {
            errors.insert("video", "Only one video can be attached");
        }
        if !self.accepted_terms {
            errors.insert("terms", "You must agree to the terms and conditions");
        }
        if !is_blank(&self.year_built) {
            match self.year_built.trim().parse::<i32>() {
                Ok(year) => {
                    if let Err(message) = validate_year_of_construction(year) {
                        errors.insert("year_built", message);
                    }
                }
                Err(_) => {
                    errors.insert("year_built", "Year of construction must be a number");
                }
            }
        }

        errors
    }

    /// Validate and assemble the creation payload.
    ///
    /// Returns the full error map on any failure; no network call happens
    /// until this succeeds.
    pub fn build_payload(&self) -> Result<Property, ValidationErrors> {
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }

        let price = parse_price(&self.price).unwrap_or(Decimal::ZERO);
        let (rental_price, sale_price) = match self.purpose {
            Purpose::Rent => (Some(price), None),
            Purpose::Buy => (None, Some(price)),
            Purpose::RentBuy => (Some(price), parse_price(&self.sale_price)),
        };

        let photos = self
            .photos
            .iter()
            .enumerate()
            .map(|(index, uri)| PropertyPhoto {
                image: uri.clone(),
                caption: Some(format!("Photo {}", index + 1)),
                is_primary: index == 0,
            })
            .collect();

        let videos = self
            .videos
            .first()
            .map(|uri| {
                vec![PropertyVideo {
                    video: uri.clone(),
                    caption: Some("Property walkthrough".to_string()),
                }]
            })
            .unwrap_or_default();

        let base = BaseProperty {
            id: None,
            term_category: self.term_category,
            purpose: self.purpose,
            rental_price,
            sale_price,
            price_negotiable: parse_yes_no(&self.negotiable),
            title: self.title.trim().to_string(),
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
            year_of_construction: self.year_built.trim().parse().ok(),
            security: parse_yes_no(&self.security),
            pet_friendly: parse_yes_no(&self.pet_friendly),
            allow_smoking: parse_yes_no(&self.allow_smoking),
            allow_kids: parse_yes_no(&self.allow_kids),
            photos,
            videos,
            owner_proof: self.owner_proof.clone(),
            agent_certificate: self.agent_certificate.clone(),
            is_agent: self.is_agent,
            owner_id: None,
            created_at: None,
            updated_at: None,
        };

        Ok(Property {
            base,
            details: self.build_details(),
        })
    }

    fn build_details(&self) -> PropertyDetails {
        match &self.variant {
            VariantForm::House(form) => {
                let details = HouseDetails {
                    is_boarding: form.is_boarding,
                    bedroom_count: clamp_room_count(&form.rooms),
                    bathroom_count: clamp_room_count(&form.bathrooms),
                    has_balcony: parse_yes_no(&form.balcony),
                    has_patio: parse_yes_no(&form.patio),
                    has_pool: parse_yes_no(&form.pool),
                    garden: form.garden.unwrap_or_default(),
                    amenities: name_tags(&form.amenities),
                    infrastructure: infrastructure_tags(&form.infrastructure),
                };
                if form.is_boarding {
                    PropertyDetails::Boarding(details)
                } else {
                    PropertyDetails::House(details)
                }
            }
            VariantForm::Apartment(form) => PropertyDetails::Apartment(ApartmentDetails {
                room_count: RoomCount::from_label(&form.rooms).unwrap_or(RoomCount::One),
                bedroom_count: clamp_room_count(&form.bedrooms),
                bathroom_count: clamp_room_count(&form.bathrooms),
                has_balcony: parse_yes_no(&form.balcony),
                has_patio: parse_yes_no(&form.patio),
                has_pool: parse_yes_no(&form.pool),
                garden: form.garden.unwrap_or_default(),
                amenities: name_tags(&form.amenities),
                infrastructure: infrastructure_tags(&form.infrastructure),
            }),
            VariantForm::Commercial(form) => PropertyDetails::Commercial(CommercialDetails {
                bathroom_count: clamp_room_count(&form.bathrooms),
                has_balcony: parse_yes_no(&form.balcony),
                has_patio: parse_yes_no(&form.patio),
                in_unit_laundry: parse_yes_no(&form.laundry),
                pool: form.pool.unwrap_or_default(),
                garden: form.garden.unwrap_or_default(),
                amenities: name_tags(&form.amenities),
                infrastructure: infrastructure_tags(&form.infrastructure),
            }),
            VariantForm::LodgeHotel(form) => {
                // The backend schema requires the full amenity sheet, so
                // every flag is present and unselected flags stay false.
                let mut amenities = LodgeAmenitySheet::default();
                for label in &form.amenities {
                    if !amenities.set_flag(label) {
                        tracing::warn!(%label, "ignoring unknown lodge amenity label");
                    }
                }
                PropertyDetails::LodgeHotel(LodgeHotelDetails {
                    star_rating: form.star_rating,
                    room_type: form.room_type.unwrap_or(RoomType::Double),
                    room_count: form.room_count.trim().parse().unwrap_or(1).max(1),
                    bed_type: form.bed_type.unwrap_or(BedType::Double),
                    view_type: form.view_type.unwrap_or_default(),
                    meal_option: form.meal_option,
                    amenities,
                })
            }
        }
    }

    fn derive_errors(&self) -> ValidationErrors {
        match Validate::validate(self) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors
                .field_errors()
                .into_iter()
                .map(|(field, failures)| {
                    let message = failures
                        .first()
                        .and_then(|failure| failure.message.clone())
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    (field.to_string(), message)
                })
                .collect(),
        }
    }
}

fn validate_address_input(address: &str) -> Result<(), ValidationError> {
    if is_blank(address) {
        let mut error = ValidationError::new("required");
        error.message = Some("Address is required".into());
        return Err(error);
    }
    Ok(())
}

fn validate_price_input(price: &str) -> Result<(), ValidationError> {
    if is_blank(price) {
        let mut error = ValidationError::new("required");
        error.message = Some("Price is required".into());
        return Err(error);
    }
    match parse_price(price) {
        Some(amount) if amount > Decimal::ZERO => Ok(()),
        _ => {
            let mut error = ValidationError::new("positive");
            error.message = Some("Price must be a positive number".into());
            Err(error)
        }
    }
}

fn name_tags(names: &[String]) -> Vec<Amenity> {
    names
        .iter()
        .filter(|name| !is_blank(name))
        .map(|name| Amenity::new(name.clone()))
        .collect()
}

fn infrastructure_tags(names: &[String]) -> Vec<Infrastructure> {
    names
        .iter()
        .filter(|name| !is_blank(name))
        .map(|name| Infrastructure::new(name.clone()))
        .collect()
}
