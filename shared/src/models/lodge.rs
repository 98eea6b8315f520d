//! Lodge and hotel room listing payload
//!
//! The backend schema requires every named amenity flag to be present on
//! create/update, so the sheet serializes all flags unconditionally and
//! unselected flags default to false.

use serde::{Deserialize, Serialize};

/// Room category offered by a lodge or hotel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Twin,
    Suite,
    Family,
    Dormitory,
    Executive,
}

/// Bed configuration of the room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BedType {
    Single,
    Double,
    Queen,
    King,
    Bunk,
}

/// What the room looks out on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewType {
    #[default]
    Standard,
    Garden,
    Pool,
    City,
    Mountain,
    Lake,
}

/// Meal plan included with the room rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealOption {
    BreakfastOnly,
    HalfBoard,
    FullBoard,
    AllInclusive,
    SelfCatering,
}

/// Variant payload for lodge and hotel rooms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LodgeHotelDetails {
    /// 1 through 5 when rated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<u8>,
    pub room_type: RoomType,
    pub room_count: u32,
    pub bed_type: BedType,
    #[serde(default)]
    pub view_type: ViewType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_option: Option<MealOption>,
    #[serde(flatten)]
    pub amenities: LodgeAmenitySheet,
}

/// The full named amenity sheet, grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LodgeAmenitySheet {
    #[serde(flatten)]
    pub bathroom: BathroomAmenities,
    #[serde(flatten)]
    pub laundry: LaundryAmenities,
    #[serde(flatten)]
    pub kitchen: KitchenAmenities,
    #[serde(flatten)]
    pub entertainment: EntertainmentAmenities,
    #[serde(flatten)]
    pub heating: HeatingAmenities,
    #[serde(flatten)]
    pub safety: SafetyAmenities,
    #[serde(flatten)]
    pub accessibility: AccessibilityAmenities,
    #[serde(flatten)]
    pub hospitality: HospitalityAmenities,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BathroomAmenities {
    #[serde(default)]
    pub private_bathroom: bool,
    #[serde(default)]
    pub shower: bool,
    #[serde(default)]
    pub bathtub: bool,
    #[serde(default)]
    pub hot_water: bool,
    #[serde(default)]
    pub hairdryer: bool,
    #[serde(default)]
    pub toiletries: bool,
    #[serde(default)]
    pub towels: bool,
    #[serde(default)]
    pub bidet: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaundryAmenities {
    #[serde(default)]
    pub washing_machine: bool,
    #[serde(default)]
    pub dryer: bool,
    #[serde(default)]
    pub iron: bool,
    #[serde(default)]
    pub ironing_board: bool,
    #[serde(default)]
    pub laundry_service: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitchenAmenities {
    #[serde(default)]
    pub kitchenette: bool,
    #[serde(default)]
    pub refrigerator: bool,
    #[serde(default)]
    pub microwave: bool,
    #[serde(default)]
    pub electric_kettle: bool,
    #[serde(default)]
    pub coffee_maker: bool,
    #[serde(default)]
    pub cooking_utensils: bool,
    #[serde(default)]
    pub dining_area: bool,
    #[serde(default)]
    pub minibar: bool,
    #[serde(default)]
    pub restaurant_on_site: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntertainmentAmenities {
    #[serde(default)]
    pub television: bool,
    #[serde(default)]
    pub cable_channels: bool,
    #[serde(default)]
    pub streaming_services: bool,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub games_room: bool,
    #[serde(default)]
    pub swimming_pool: bool,
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub spa: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatingAmenities {
    #[serde(default)]
    pub air_conditioning: bool,
    #[serde(default)]
    pub heating: bool,
    #[serde(default)]
    pub ceiling_fan: bool,
    #[serde(default)]
    pub fireplace: bool,
    #[serde(default)]
    pub extra_blankets: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SafetyAmenities {
    #[serde(default)]
    pub smoke_detector: bool,
    #[serde(default)]
    pub fire_extinguisher: bool,
    #[serde(default)]
    pub first_aid_kit: bool,
    #[serde(default)]
    pub security_guard: bool,
    #[serde(default)]
    pub cctv: bool,
    #[serde(default)]
    pub safe_deposit_box: bool,
    #[serde(default)]
    pub key_card_access: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilityAmenities {
    #[serde(default)]
    pub wheelchair_accessible: bool,
    #[serde(default)]
    pub elevator: bool,
    #[serde(default)]
    pub ground_floor_room: bool,
    #[serde(default)]
    pub accessible_bathroom: bool,
    #[serde(default)]
    pub braille_signage: bool,
    #[serde(default)]
    pub step_free_entrance: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HospitalityAmenities {
    #[serde(default)]
    pub daily_housekeeping: bool,
    #[serde(default)]
    pub room_service: bool,
    #[serde(default)]
    pub concierge: bool,
    #[serde(default)]
    pub airport_shuttle: bool,
    #[serde(default)]
    pub front_desk_24h: bool,
    #[serde(default)]
    pub luggage_storage: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast_included: bool,
    #[serde(default)]
    pub pet_friendly_rooms: bool,
    #[serde(default)]
    pub non_smoking_rooms: bool,
    #[serde(default)]
    pub family_rooms: bool,
    #[serde(default)]
    pub currency_exchange: bool,
}

/// Number of named flags on the sheet
pub const LODGE_AMENITY_FLAG_COUNT: usize = 60;

impl LodgeAmenitySheet {
    /// Set the flag matching a selector label, returning false for labels
    /// that do not name a known flag.
    pub fn set_flag(&mut self, label: &str) -> bool {
        match self.flag_mut(&normalize_label(label)) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Names of all flags currently enabled
    pub fn enabled_names(&self) -> Vec<String> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map
                .into_iter()
                .filter(|(_, value)| value.as_bool() == Some(true))
                .map(|(name, _)| name)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        let flag = match name {
            "private_bathroom" => &mut self.bathroom.private_bathroom,
            "shower" => &mut self.bathroom.shower,
            "bathtub" => &mut self.bathroom.bathtub,
            "hot_water" => &mut self.bathroom.hot_water,
            "hairdryer" => &mut self.bathroom.hairdryer,
            "toiletries" => &mut self.bathroom.toiletries,
            "towels" => &mut self.bathroom.towels,
            "bidet" => &mut self.bathroom.bidet,
            "washing_machine" => &mut self.laundry.washing_machine,
            "dryer" => &mut self.laundry.dryer,
            "iron" => &mut self.laundry.iron,
            "ironing_board" => &mut self.laundry.ironing_board,
            "laundry_service" => &mut self.laundry.laundry_service,
            "kitchenette" => &mut self.kitchen.kitchenette,
            "refrigerator" => &mut self.kitchen.refrigerator,
            "microwave" => &mut self.kitchen.microwave,
            "electric_kettle" => &mut self.kitchen.electric_kettle,
            "coffee_maker" => &mut self.kitchen.coffee_maker,
            "cooking_utensils" => &mut self.kitchen.cooking_utensils,
            "dining_area" => &mut self.kitchen.dining_area,
            "minibar" => &mut self.kitchen.minibar,
            "restaurant_on_site" => &mut self.kitchen.restaurant_on_site,
            "television" | "tv" => &mut self.entertainment.television,
            "cable_channels" => &mut self.entertainment.cable_channels,
            "streaming_services" => &mut self.entertainment.streaming_services,
            "wifi" | "wi_fi" => &mut self.entertainment.wifi,
            "games_room" | "game_room" => &mut self.entertainment.games_room,
            "swimming_pool" => &mut self.entertainment.swimming_pool,
            "gym" => &mut self.entertainment.gym,
            "spa" => &mut self.entertainment.spa,
            "air_conditioning" => &mut self.heating.air_conditioning,
            "heating" => &mut self.heating.heating,
            "ceiling_fan" => &mut self.heating.ceiling_fan,
            "fireplace" => &mut self.heating.fireplace,
            "extra_blankets" => &mut self.heating.extra_blankets,
            "smoke_detector" => &mut self.safety.smoke_detector,
            "fire_extinguisher" => &mut self.safety.fire_extinguisher,
            "first_aid_kit" => &mut self.safety.first_aid_kit,
            "security_guard" => &mut self.safety.security_guard,
            "cctv" => &mut self.safety.cctv,
            "safe_deposit_box" => &mut self.safety.safe_deposit_box,
            "key_card_access" => &mut self.safety.key_card_access,
            "wheelchair_accessible" => &mut self.accessibility.wheelchair_accessible,
            "elevator" | "lift" => &mut self.accessibility.elevator,
            "ground_floor_room" => &mut self.accessibility.ground_floor_room,
            "accessible_bathroom" => &mut self.accessibility.accessible_bathroom,
            "braille_signage" => &mut self.accessibility.braille_signage,
            "step_free_entrance" => &mut self.accessibility.step_free_entrance,
            "daily_housekeeping" => &mut self.hospitality.daily_housekeeping,
            "room_service" => &mut self.hospitality.room_service,
            "concierge" => &mut self.hospitality.concierge,
            "airport_shuttle" => &mut self.hospitality.airport_shuttle,
            "front_desk_24h" | "24h_front_desk" | "24_hour_front_desk" => {
                &mut self.hospitality.front_desk_24h
            }
            "luggage_storage" => &mut self.hospitality.luggage_storage,
            "parking" => &mut self.hospitality.parking,
            "breakfast_included" => &mut self.hospitality.breakfast_included,
            "pet_friendly_rooms" => &mut self.hospitality.pet_friendly_rooms,
            "non_smoking_rooms" => &mut self.hospitality.non_smoking_rooms,
            "family_rooms" => &mut self.hospitality.family_rooms,
            "currency_exchange" => &mut self.hospitality.currency_exchange,
            _ => return None,
        };
        Some(flag)
    }
}

/// Collapse a selector label into the snake_case flag naming used on the wire
fn normalize_label(label: &str) -> String {
    label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
