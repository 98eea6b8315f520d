//! Nyumba Property Marketplace - API Client
//!
//! Typed client for the marketplace REST backend: listing normalization,
//! purpose/price resolution, listing-form validation and payload assembly,
//! filter predicate building with a debounced live match count, and
//! session-aware wrappers around the per-variant property, auth,
//! reservation, and messaging endpoints.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod normalize;
pub mod pricing;
pub mod routing;
pub mod session;

pub use api::MarketplaceClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use session::Session;

/// Install the standard tracing subscriber for applications embedding the
/// client. Honors `RUST_LOG`; defaults to debug output for this crate.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nyumba_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
