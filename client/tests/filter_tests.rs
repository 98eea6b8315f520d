//! Filter predicate builder integration tests
//!
//! Covers empty-value omission, boolean serialization over the query
//! string, the count-only mode, and builder idempotence.

use proptest::prelude::*;
use rust_decimal::Decimal;

use nyumba_client::filters::FilterState;
use shared::{PropertyType, Purpose, TermCategory};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Only set values serialize; None, empty strings, and empty arrays
    /// are omitted entirely.
    #[test]
    fn sparse_state_serializes_only_set_values() {
        let state = FilterState {
            min_bedrooms: Some(3),
            has_pool: None,
            bathroom_amenities: vec![],
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert_eq!(
            params,
            vec![("min_bedrooms".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn booleans_serialize_as_strings() {
        let state = FilterState {
            has_pool: Some(true),
            pet_friendly: Some(false),
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert!(params.contains(&("has_pool".to_string(), "true".to_string())));
        assert!(params.contains(&("pet_friendly".to_string(), "false".to_string())));
    }

    #[test]
    fn enums_serialize_as_wire_tags() {
        let state = FilterState {
            purpose: Some(Purpose::RentBuy),
            term_category: Some(TermCategory::Short),
            property_types: vec![PropertyType::House, PropertyType::LodgeHotel],
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert!(params.contains(&("purpose".to_string(), "RENT_BUY".to_string())));
        assert!(params.contains(&("term_category".to_string(), "SHORT".to_string())));
        assert!(params.contains(&("property_type".to_string(), "HOUSE".to_string())));
        assert!(params.contains(&("property_type".to_string(), "LODGE_HOTEL".to_string())));
    }

    #[test]
    fn prices_serialize_normalized() {
        let state = FilterState {
            min_price: Some(Decimal::new(150000, 2)),
            max_price: Some(Decimal::new(5000, 0)),
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert!(params.contains(&("min_price".to_string(), "1500".to_string())));
        assert!(params.contains(&("max_price".to_string(), "5000".to_string())));
    }

    #[test]
    fn amenity_buckets_filter_independently() {
        let state = FilterState {
            bathroom_amenities: vec!["Hot water".to_string()],
            safety_amenities: vec!["CCTV".to_string(), "Smoke detector".to_string()],
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert!(params.contains(&("bathroom_amenities".to_string(), "Hot water".to_string())));
        assert!(params.contains(&("safety_amenities".to_string(), "CCTV".to_string())));
        assert!(params.contains(&(
            "safety_amenities".to_string(),
            "Smoke detector".to_string()
        )));
        assert_eq!(params.len(), 3);
    }

    /// Count mode reuses the same predicate plus the flag
    #[test]
    fn count_mode_adds_only_the_flag() {
        let state = FilterState {
            min_bathrooms: Some(2),
            ..FilterState::default()
        };
        let mut expected = state.to_query_params();
        expected.push(("count_only".to_string(), "true".to_string()));
        assert_eq!(state.to_count_params(), expected);
    }

    #[test]
    fn blank_amenity_entries_are_dropped() {
        let state = FilterState {
            kitchen_amenities: vec!["".to_string(), "  ".to_string(), "Microwave".to_string()],
            ..FilterState::default()
        };
        let params = state.to_query_params();
        assert_eq!(params.len(), 1);
        assert!(params.contains(&("kitchen_amenities".to_string(), "Microwave".to_string())));
    }
}

// ============================================================================
// Live Count Tests
// ============================================================================

#[cfg(test)]
mod live_count_tests {
    use super::*;
    use std::sync::Arc;

    use nyumba_client::filters::{CountState, LiveCount};
    use nyumba_client::{MarketplaceClient, Session};

    fn unreachable_client() -> Arc<MarketplaceClient> {
        let session = Arc::new(Session::in_memory());
        Arc::new(
            MarketplaceClient::with_base_url("http://127.0.0.1:9", session)
                .expect("client builds"),
        )
    }

    /// A superseded filter change aborts the pending request; nothing is
    /// counted until the debounce elapses.
    #[test]
    fn superseded_requests_are_aborted() {
        tokio_test::block_on(async {
            let mut live = LiveCount::new(unreachable_client());
            live.filters_changed(FilterState::default());
            live.filters_changed(FilterState {
                min_bedrooms: Some(2),
                ..FilterState::default()
            });
            assert_eq!(live.current(), CountState::Unknown);
        });
    }

    /// A failed count request resets to Unknown, never a stale count
    #[test]
    fn failures_reset_to_unknown() {
        tokio_test::block_on(async {
            let mut live = LiveCount::new(unreachable_client());
            let mut updates = live.subscribe();
            live.filters_changed(FilterState::default());

            updates.changed().await.expect("sender alive");
            assert_eq!(*updates.borrow(), CountState::Unknown);
        });
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn filter_state_strategy() -> impl Strategy<Value = FilterState> {
    (
        proptest::option::of(0u32..10),
        proptest::option::of(0u32..10),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::collection::vec("[A-Za-z ]{0,12}", 0..4),
        proptest::collection::vec("[A-Za-z ]{0,12}", 0..4),
    )
        .prop_map(
            |(min_bedrooms, min_bathrooms, has_pool, security, bathroom, kitchen)| FilterState {
                min_bedrooms,
                min_bathrooms,
                has_pool,
                security,
                bathroom_amenities: bathroom,
                kitchen_amenities: kitchen,
                ..FilterState::default()
            },
        )
}

proptest! {
    /// Building the predicate twice from the same state is identical
    #[test]
    fn builder_is_idempotent(state in filter_state_strategy()) {
        prop_assert_eq!(state.to_query_params(), state.to_query_params());
        prop_assert_eq!(state.to_count_params(), state.to_count_params());
    }

    /// No parameter ever carries an empty value
    #[test]
    fn no_empty_values_escape(state in filter_state_strategy()) {
        for (key, value) in state.to_query_params() {
            prop_assert!(!key.is_empty());
            prop_assert!(!value.trim().is_empty());
        }
    }
}
