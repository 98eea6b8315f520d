//! Filter predicate building and the live match count
//!
//! A sparse filter state converts into query parameters for the backend's
//! cross-variant filter endpoint. Only set values are sent: None, empty
//! strings, and empty arrays are omitted entirely. Booleans serialize as
//! "true"/"false" because the transport is a URL query string.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use shared::{Amenity, PropertyType, Purpose, TermCategory};

use crate::api::MarketplaceClient;

/// User-selected filter criteria; everything is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub property_types: Vec<PropertyType>,
    pub purpose: Option<Purpose>,
    pub term_category: Option<TermCategory>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub min_year_built: Option<i32>,
    pub price_negotiable: Option<bool>,
    pub pet_friendly: Option<bool>,
    pub allow_smoking: Option<bool>,
    pub allow_kids: Option<bool>,
    pub security: Option<bool>,
    pub has_pool: Option<bool>,
    pub bathroom_amenities: Vec<String>,
    pub kitchen_amenities: Vec<String>,
    pub entertainment_amenities: Vec<String>,
    pub heating_amenities: Vec<String>,
    pub safety_amenities: Vec<String>,
    pub accessibility_amenities: Vec<String>,
}

impl FilterState {
    /// Query parameters for the filter endpoint.
    ///
    /// Idempotent: the same state always yields the same parameter set.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        for kind in &self.property_types {
            params.push(("property_type".to_string(), kind.as_tag().to_string()));
        }
        if let Some(purpose) = self.purpose {
            params.push(("purpose".to_string(), purpose.as_tag().to_string()));
        }
        if let Some(term) = self.term_category {
            params.push(("term_category".to_string(), term.as_tag().to_string()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("min_price".to_string(), min_price.normalize().to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("max_price".to_string(), max_price.normalize().to_string()));
        }
        if let Some(min_bedrooms) = self.min_bedrooms {
            params.push(("min_bedrooms".to_string(), min_bedrooms.to_string()));
        }
        if let Some(min_bathrooms) = self.min_bathrooms {
            params.push(("min_bathrooms".to_string(), min_bathrooms.to_string()));
        }
        if let Some(min_year_built) = self.min_year_built {
            params.push(("min_year_built".to_string(), min_year_built.to_string()));
        }

        push_flag(&mut params, "price_negotiable", self.price_negotiable);
        push_flag(&mut params, "pet_friendly", self.pet_friendly);
        push_flag(&mut params, "allow_smoking", self.allow_smoking);
        push_flag(&mut params, "allow_kids", self.allow_kids);
        push_flag(&mut params, "security", self.security);
        push_flag(&mut params, "has_pool", self.has_pool);

        for (bucket, values) in self.amenity_buckets() {
            for value in values {
                if !value.trim().is_empty() {
                    params.push((bucket.to_string(), value.clone()));
                }
            }
        }

        params
    }

    /// Same predicate, count-only mode: powers the "Show N Listings"
    /// affordance without transferring full records.
    pub fn to_count_params(&self) -> Vec<(String, String)> {
        let mut params = self.to_query_params();
        params.push(("count_only".to_string(), "true".to_string()));
        params
    }

    /// Flatten every amenity bucket into one combined list, for creation
    /// payloads whose `amenities` field is not bucketed.
    pub fn combined_amenities(&self) -> Vec<Amenity> {
        let mut seen = HashSet::new();
        self.amenity_buckets()
            .into_iter()
            .flat_map(|(_, values)| values.iter())
            .filter(|name| !name.trim().is_empty())
            .filter(|name| seen.insert(name.to_string()))
            .map(|name| Amenity::new(name.clone()))
            .collect()
    }

    fn amenity_buckets(&self) -> [(&'static str, &Vec<String>); 6] {
        [
            ("bathroom_amenities", &self.bathroom_amenities),
            ("kitchen_amenities", &self.kitchen_amenities),
            ("entertainment_amenities", &self.entertainment_amenities),
            ("heating_amenities", &self.heating_amenities),
            ("safety_amenities", &self.safety_amenities),
            ("accessibility_amenities", &self.accessibility_amenities),
        ]
    }
}

fn push_flag(params: &mut Vec<(String, String)>, key: &str, value: Option<bool>) {
    if let Some(flag) = value {
        params.push((key.to_string(), flag.to_string()));
    }
}

/// Vocabulary of selectable filter values, from `properties/filter/options/`
#[derive(Debug, Clone, Deserialize)]
pub struct FilterOptions {
    pub property_types: Vec<String>,
    #[serde(default)]
    pub amenity_categories: BTreeMap<String, Vec<String>>,
}

/// State of the live "Show N Listings" count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountState {
    /// No count available; the affordance renders disabled. Also the state
    /// after a failed count request, never a stale or zero count.
    Unknown,
    Known(u64),
}

/// Debounced live count over the filter endpoint.
///
/// Each filter change supersedes the previous request: the pending task is
/// aborted before a new one is scheduled, so a slow response can never land
/// after the filters it was computed for are gone.
pub struct LiveCount {
    client: Arc<MarketplaceClient>,
    debounce: Duration,
    tx: watch::Sender<CountState>,
    rx: watch::Receiver<CountState>,
    task: Option<JoinHandle<()>>,
}

impl LiveCount {
    pub fn new(client: Arc<MarketplaceClient>) -> Self {
        let debounce = Duration::from_millis(client.config().filters.count_debounce_ms);
        let (tx, rx) = watch::channel(CountState::Unknown);
        Self {
            client,
            debounce,
            tx,
            rx,
            task: None,
        }
    }

    /// Receiver for count updates
    pub fn subscribe(&self) -> watch::Receiver<CountState> {
        self.rx.clone()
    }

    pub fn current(&self) -> CountState {
        *self.rx.borrow()
    }

    /// Schedule a re-count for the given filter state, debounced.
    pub fn filters_changed(&mut self, filters: FilterState) {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let debounce = self.debounce;
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            match client.filter_count(&filters).await {
                Ok(count) => {
                    let _ = tx.send(CountState::Known(count));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "filter count request failed");
                    let _ = tx.send(CountState::Unknown);
                }
            }
        }));
    }
}

impl Drop for LiveCount {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
