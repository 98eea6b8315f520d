//! Reservation endpoints

use reqwest::Method;
use uuid::Uuid;

use shared::{NewReservation, Reservation};

use crate::error::ApiResult;

use super::MarketplaceClient;

impl MarketplaceClient {
    /// Reservations involving the current user
    pub async fn reservations(&self) -> ApiResult<Vec<Reservation>> {
        self.authorized_get("reservations/", &[]).await
    }

    pub async fn create_reservation(&self, input: &NewReservation) -> ApiResult<Reservation> {
        self.authorized_json(Method::POST, "reservations/", input)
            .await
    }

    pub async fn cancel_reservation(&self, id: Uuid) -> ApiResult<Reservation> {
        self.authorized_json(
            Method::POST,
            &format!("reservations/{}/cancel/", id),
            &serde_json::json!({}),
        )
        .await
    }
}
