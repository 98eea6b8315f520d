//! REST surface of the marketplace backend
//!
//! `MarketplaceClient` owns the HTTP client, the configuration, and the
//! session. Authorized requests read the bearer header through the session
//! accessor; a 401 triggers exactly one refresh-and-retry when a refresh
//! token exists.

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{self, ApiError, ApiResult};
use crate::session::Session;

mod auth;
mod messages;
mod properties;
mod reservations;

pub use auth::NewUser;
pub use properties::PropertyResource;

/// Typed client for the marketplace REST backend
pub struct MarketplaceClient {
    http: reqwest::Client,
    config: Arc<Config>,
    session: Arc<Session>,
}

impl MarketplaceClient {
    pub fn new(config: Config, session: Arc<Session>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
            session,
        })
    }

    /// Client against a custom base URL (for tests and staging)
    pub fn with_base_url(base_url: impl Into<String>, session: Arc<Session>) -> ApiResult<Self> {
        let mut config = Config::default();
        config.api.base_url = base_url.into();
        Self::new(config, session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Exchange the refresh token for a new token pair.
    ///
    /// Surfaces `MissingRefreshToken` when the session has nothing to
    /// refresh with; callers decide whether that means re-login.
    pub async fn refresh_session(&self) -> ApiResult<()> {
        let refresh_token = self
            .session
            .refresh_token()
            .ok_or(ApiError::MissingRefreshToken)?;

        let response = self
            .http
            .post(self.url("users/refresh/"))
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await?;

        let tokens = match Self::handle_json(response).await {
            Ok(tokens) => tokens,
            Err(ApiError::Server { status: 401, .. }) => return Err(ApiError::TokenExpired),
            Err(err) => return Err(err),
        };
        self.session.install(tokens)
    }

    // ------------------------------------------------------------------
    // Request plumbing shared by the resource modules
    // ------------------------------------------------------------------

    pub(crate) async fn authorized_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let url = self.url(path);
        let response = self
            .send_authorized(|| self.http.get(&url).query(query))
            .await?;
        Self::handle_json(response).await
    }

    pub(crate) async fn authorized_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.url(path);
        let response = self
            .send_authorized(|| self.http.request(method.clone(), &url).json(body))
            .await?;
        Self::handle_json(response).await
    }

    pub(crate) async fn authorized_delete(&self, path: &str) -> ApiResult<()> {
        let url = self.url(path);
        let response = self.send_authorized(|| self.http.delete(&url)).await?;
        Self::handle_empty(response).await
    }

    /// Multipart requests rebuild their form on retry because a multipart
    /// body cannot be cloned.
    pub(crate) async fn authorized_multipart<T, F, Fut>(
        &self,
        method: Method,
        path: &str,
        build_form: F,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<Form>>,
    {
        let url = self.url(path);
        let bearer = self.bearer()?;
        let response = self
            .http
            .request(method.clone(), &url)
            .header(AUTHORIZATION, bearer.as_str())
            .multipart(build_form().await?)
            .send()
            .await?;

        let response = if response.status() == StatusCode::UNAUTHORIZED {
            self.refresh_session().await?;
            let bearer = self.bearer()?;
            self.http
                .request(method, &url)
                .header(AUTHORIZATION, bearer.as_str())
                .multipart(build_form().await?)
                .send()
                .await?
        } else {
            response
        };

        Self::handle_json(response).await
    }

    /// Unauthenticated request (login, register, refresh)
    pub(crate) async fn public_post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::handle_json(response).await
    }

    async fn send_authorized<F>(&self, build: F) -> ApiResult<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let bearer = self.bearer()?;
        let response = build()
            .header(AUTHORIZATION, bearer.as_str())
            .send()
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        self.refresh_session().await?;
        let bearer = self.bearer()?;
        Ok(build()
            .header(AUTHORIZATION, bearer.as_str())
            .send()
            .await?)
    }

    fn bearer(&self) -> ApiResult<String> {
        self.session
            .bearer()
            .ok_or_else(|| ApiError::Unauthorized("no active session".to_string()))
    }

    pub(crate) async fn handle_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error::parse_error_body(status.as_u16(), &body))
        }
    }

    pub(crate) async fn handle_empty(response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error::parse_error_body(status.as_u16(), &body))
        }
    }
}

impl std::fmt::Debug for MarketplaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceClient")
            .field("base_url", &self.config.api.base_url)
            .finish()
    }
}
