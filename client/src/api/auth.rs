//! User auth endpoints
//!
//! Login installs the returned token pair into the session and decodes the
//! access token locally to expose the user id and verification status, so
//! no extra round trip is needed after authenticating.

use serde::{Deserialize, Serialize};

use shared::User;

use crate::error::ApiResult;
use crate::session::{decode_claims, AuthTokens, SessionClaims};

use super::MarketplaceClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration payload for a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_agent: bool,
}

impl MarketplaceClient {
    /// Authenticate and install the session
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<SessionClaims> {
        let tokens: AuthTokens = self
            .public_post("users/login/", &LoginRequest { email, password })
            .await?;
        let claims = decode_claims(&tokens.access_token)?;
        self.session().install(tokens)?;
        Ok(claims)
    }

    /// Create a new account
    pub async fn register(&self, input: &NewUser) -> ApiResult<User> {
        self.public_post("users/create/", input).await
    }

    /// Profile of the authenticated user
    pub async fn me(&self) -> ApiResult<User> {
        self.authorized_get("users/me/", &[]).await
    }

    /// Drop the local session; the backend keeps no client-side state
    pub fn logout(&self) -> ApiResult<()> {
        self.session().clear()
    }
}
