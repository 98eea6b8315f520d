//! Listing form integration tests
//!
//! Covers required-field collection (every failure reported at once, no
//! network call made), count clamping, Yes/No selector mapping, attachment
//! descriptor assembly, and the lodge amenity sheet contract.

use proptest::prelude::*;
use rust_decimal::Decimal;

use nyumba_client::forms::{
    ApartmentForm, CommercialForm, HouseForm, ListingForm, LodgeHotelForm, VariantForm,
};
use shared::{
    BedType, Property, PropertyDetails, PropertyType, Purpose, RoomCount, RoomType,
    TermCategory,
};

/// A house form that passes validation as-is
fn valid_house_form() -> ListingForm {
    let mut form = ListingForm::new(
        TermCategory::Long,
        Purpose::Rent,
        VariantForm::House(HouseForm {
            rooms: "3".to_string(),
            bathrooms: "2".to_string(),
            balcony: "Yes".to_string(),
            patio: "No".to_string(),
            pool: "No".to_string(),
            ..HouseForm::default()
        }),
    );
    form.address = "12 Chilimbulu Road, Lusaka".to_string();
    form.price = "2500".to_string();
    form.photos = vec!["/tmp/photos/front.jpg".to_string()];
    form.accepted_terms = true;
    form
}

fn house_details(payload: &Property) -> &shared::HouseDetails {
    match &payload.details {
        PropertyDetails::House(details) | PropertyDetails::Boarding(details) => details,
        other => panic!("expected house details, got {other:?}"),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn valid_form_builds_a_payload() {
        let payload = valid_house_form().build_payload().expect("valid form");
        assert_eq!(payload.property_type(), PropertyType::House);
        assert_eq!(payload.base.rental_price, Some(Decimal::new(2500, 0)));
        assert_eq!(payload.base.sale_price, None);
    }

    /// Empty address and non-numeric price yield exactly those two error
    /// keys; build_payload returns before anything could hit the network.
    #[test]
    fn address_and_price_fail_together() {
        let mut form = valid_house_form();
        form.address = "".to_string();
        form.price = "abc".to_string();

        let errors = form.build_payload().expect_err("invalid form");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("address"), Some("Address is required"));
        assert_eq!(errors.get("price"), Some("Price must be a positive number"));
    }

    #[test]
    fn blank_price_reports_required() {
        let mut form = valid_house_form();
        form.price = "   ".to_string();
        let errors = form.validate_all();
        assert_eq!(errors.get("price"), Some("Price is required"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut form = valid_house_form();
        form.price = "-500".to_string();
        let errors = form.validate_all();
        assert_eq!(errors.get("price"), Some("Price must be a positive number"));
    }

    /// No photos plus unaccepted terms report together
    #[test]
    fn photos_and_terms_fail_together() {
        let mut form = valid_house_form();
        form.photos.clear();
        form.accepted_terms = false;

        let errors = form.build_payload().expect_err("invalid form");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("photos"), Some("At least one photo is required"));
        assert_eq!(
            errors.get("terms"),
            Some("You must agree to the terms and conditions")
        );
    }

    #[test]
    fn attachment_caps_are_enforced() {
        let mut form = valid_house_form();
        form.photos = (0..51).map(|n| format!("/tmp/photos/{n}.jpg")).collect();
        form.videos = vec!["/tmp/a.mp4".to_string(), "/tmp/b.mp4".to_string()];

        let errors = form.validate_all();
        assert_eq!(
            errors.get("photos"),
            Some("A listing can include at most 50 photos")
        );
        assert_eq!(errors.get("video"), Some("Only one video can be attached"));
    }

    #[test]
    fn missing_rooms_and_bathrooms_are_required() {
        let mut form = valid_house_form();
        form.variant = VariantForm::House(HouseForm::default());
        let errors = form.validate_all();
        assert_eq!(errors.get("rooms"), Some("Number of rooms is required"));
        assert_eq!(
            errors.get("bathrooms"),
            Some("Number of bathrooms is required")
        );
    }

    /// Bedroom/bathroom selections clamp into [1, 5]
    #[test]
    fn counts_clamp_into_range() {
        let mut form = valid_house_form();
        form.variant = VariantForm::House(HouseForm {
            rooms: "9".to_string(),
            bathrooms: "0".to_string(),
            ..HouseForm::default()
        });
        let payload = form.build_payload().expect("valid form");
        let details = house_details(&payload);
        assert_eq!(details.bedroom_count, 5);
        assert_eq!(details.bathroom_count, 1);
    }

    #[test]
    fn photo_descriptors_number_and_mark_primary() {
        let mut form = valid_house_form();
        form.photos = vec![
            "/tmp/photos/front.jpg".to_string(),
            "/tmp/photos/kitchen.jpg".to_string(),
        ];
        form.videos = vec!["/tmp/walkthrough.mp4".to_string()];

        let payload = form.build_payload().expect("valid form");
        let photos = &payload.base.photos;
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].caption.as_deref(), Some("Photo 1"));
        assert!(photos[0].is_primary);
        assert_eq!(photos[1].caption.as_deref(), Some("Photo 2"));
        assert!(!photos[1].is_primary);

        let videos = &payload.base.videos;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].caption.as_deref(), Some("Property walkthrough"));
    }

    #[test]
    fn yes_no_selectors_become_booleans() {
        let mut form = valid_house_form();
        form.negotiable = "Yes".to_string();
        form.pet_friendly = "No".to_string();
        form.security = "yes".to_string();

        let payload = form.build_payload().expect("valid form");
        assert!(payload.base.price_negotiable);
        assert!(!payload.base.pet_friendly);
        assert!(payload.base.security);

        let details = house_details(&payload);
        assert!(details.has_balcony);
        assert!(!details.has_patio);
    }

    #[test]
    fn boarding_flag_switches_the_tag() {
        let mut form = valid_house_form();
        form.variant = VariantForm::House(HouseForm {
            is_boarding: true,
            rooms: "2".to_string(),
            bathrooms: "1".to_string(),
            ..HouseForm::default()
        });
        let payload = form.build_payload().expect("valid form");
        assert_eq!(payload.property_type(), PropertyType::Boarding);
    }

    #[test]
    fn apartment_requires_a_room_bucket() {
        let mut form = valid_house_form();
        form.variant = VariantForm::Apartment(ApartmentForm {
            rooms: "6".to_string(),
            bathrooms: "1".to_string(),
            ..ApartmentForm::default()
        });
        let errors = form.validate_all();
        assert_eq!(errors.get("rooms"), Some("Number of rooms is required"));

        form.variant = VariantForm::Apartment(ApartmentForm {
            rooms: "5+".to_string(),
            bedrooms: "4".to_string(),
            bathrooms: "1".to_string(),
            ..ApartmentForm::default()
        });
        let payload = form.build_payload().expect("valid form");
        match &payload.details {
            PropertyDetails::Apartment(details) => {
                assert_eq!(details.room_count, RoomCount::FivePlus);
                assert_eq!(details.bedroom_count, 4);
            }
            other => panic!("expected apartment details, got {other:?}"),
        }
    }

    #[test]
    fn commercial_only_requires_bathrooms() {
        let mut form = valid_house_form();
        form.variant = VariantForm::Commercial(CommercialForm::default());
        let errors = form.validate_all();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("bathrooms"),
            Some("Number of bathrooms is required")
        );
    }

    #[test]
    fn lodge_requires_room_and_bed_type() {
        let mut form = valid_house_form();
        form.variant = VariantForm::LodgeHotel(LodgeHotelForm::default());
        let errors = form.validate_all();
        assert_eq!(errors.get("room_type"), Some("Room type is required"));
        assert_eq!(errors.get("bed_type"), Some("Bed type is required"));
    }

    /// Lodge payloads carry the full amenity sheet with unselected flags
    /// false; the backend treats every flag as required.
    #[test]
    fn lodge_payload_carries_the_full_amenity_sheet() {
        let mut form = valid_house_form();
        form.variant = VariantForm::LodgeHotel(LodgeHotelForm {
            star_rating: Some(4),
            room_type: Some(RoomType::Double),
            room_count: "12".to_string(),
            bed_type: Some(BedType::Queen),
            amenities: vec!["Wi-Fi".to_string(), "Swimming pool".to_string()],
            ..LodgeHotelForm::default()
        });

        let payload = form.build_payload().expect("valid form");
        let value = serde_json::to_value(&payload).expect("serializable payload");

        assert_eq!(value["property_type"], "LODGE_HOTEL");
        assert_eq!(value["wifi"], true);
        assert_eq!(value["swimming_pool"], true);
        assert_eq!(value["bathtub"], false);
        assert_eq!(value["braille_signage"], false);

        let flag_count = value
            .as_object()
            .expect("object payload")
            .values()
            .filter(|v| v.is_boolean())
            .count();
        // 60 sheet flags plus the shared base flags
        assert!(flag_count >= shared::LODGE_AMENITY_FLAG_COUNT);
    }

    #[test]
    fn lodge_star_rating_is_bounded() {
        let mut form = valid_house_form();
        form.variant = VariantForm::LodgeHotel(LodgeHotelForm {
            star_rating: Some(6),
            room_type: Some(RoomType::Single),
            bed_type: Some(BedType::Single),
            ..LodgeHotelForm::default()
        });
        let errors = form.validate_all();
        assert_eq!(
            errors.get("star_rating"),
            Some("Star rating must be between 1 and 5")
        );
    }

    #[test]
    fn rent_buy_requires_both_prices() {
        let mut form = valid_house_form();
        form.purpose = Purpose::RentBuy;
        let errors = form.validate_all();
        assert_eq!(errors.get("sale_price"), Some("Sale price is required"));

        form.sale_price = "250000".to_string();
        let payload = form.build_payload().expect("valid form");
        assert_eq!(payload.base.rental_price, Some(Decimal::new(2500, 0)));
        assert_eq!(payload.base.sale_price, Some(Decimal::new(250_000, 0)));
    }

    #[test]
    fn year_of_construction_is_sanity_checked() {
        let mut form = valid_house_form();
        form.year_built = "1492".to_string();
        let errors = form.validate_all();
        assert_eq!(
            errors.get("year_built"),
            Some("Year of construction is out of range")
        );

        form.year_built = "2015".to_string();
        let payload = form.build_payload().expect("valid form");
        assert_eq!(payload.base.year_of_construction, Some(2015));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whatever the selector holds, payload counts land in [1, 5]
    #[test]
    fn payload_counts_always_in_range(rooms in "\\PC{0,6}", bathrooms in "\\PC{0,6}") {
        prop_assume!(!rooms.trim().is_empty());
        prop_assume!(!bathrooms.trim().is_empty());

        let mut form = valid_house_form();
        form.variant = VariantForm::House(HouseForm {
            rooms,
            bathrooms,
            ..HouseForm::default()
        });
        let payload = form.build_payload().expect("counts clamp instead of failing");
        let details = house_details(&payload);
        prop_assert!((1..=5).contains(&details.bedroom_count));
        prop_assert!((1..=5).contains(&details.bathroom_count));
    }

    /// The first photo is always the primary one, captions are 1-based
    #[test]
    fn photo_descriptors_are_ordered(count in 1usize..10) {
        let mut form = valid_house_form();
        form.photos = (0..count).map(|n| format!("/tmp/photos/{n}.jpg")).collect();
        let payload = form.build_payload().expect("valid form");
        for (index, photo) in payload.base.photos.iter().enumerate() {
            prop_assert_eq!(photo.is_primary, index == 0);
            let expected_caption = format!("Photo {}", index + 1);
            prop_assert_eq!(
                photo.caption.as_deref(),
                Some(expected_caption.as_str())
            );
        }
    }
}
