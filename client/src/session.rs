//! Session and token management
//!
//! The session is the one piece of shared auth state: tokens are cached in
//! memory and mirrored to persistent storage, and every authorized request
//! reads the bearer header through a single accessor. The access token is
//! decoded locally (no server round trip) to expose the user id and
//! verification status.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Token pair returned by the login and refresh endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Claims extracted from the access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// User id
    pub sub: String,
    #[serde(default)]
    pub is_verified: bool,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token with an unreadable expiry counts as expired
    pub fn is_expired(&self) -> bool {
        self.expires_at()
            .map(|at| at <= Utc::now())
            .unwrap_or(true)
    }
}

/// Decode the claims of an access token without verifying its signature.
///
/// The client holds no signing secret; the token is trusted because it came
/// over TLS from the auth endpoint. Expiry is not enforced here so callers
/// can still inspect an expired session.
pub fn decode_claims(token: &str) -> ApiResult<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| ApiError::Decode(format!("invalid access token: {}", e)))
}

/// Persistent backing store for the token pair
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> io::Result<Option<AuthTokens>>;
    fn store(&self, tokens: &AuthTokens) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// File-backed token storage
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> io::Result<Option<AuthTokens>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn store(&self, tokens: &AuthTokens) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(tokens)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, raw)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// In-memory token storage for tests and embedders that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    inner: Mutex<Option<AuthTokens>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> io::Result<Option<AuthTokens>> {
        Ok(self.inner.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    fn store(&self, tokens: &AuthTokens) -> io::Result<()> {
        *self.inner.lock().unwrap_or_else(|p| p.into_inner()) = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.inner.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}

/// The active session: in-memory token cache mirrored to storage
pub struct Session {
    tokens: RwLock<Option<AuthTokens>>,
    storage: Box<dyn TokenStorage>,
}

impl Session {
    /// Create a session, warming the cache from storage
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        let tokens = match storage.load() {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load persisted session");
                None
            }
        };
        Self {
            tokens: RwLock::new(tokens),
            storage,
        }
    }

    /// Session persisted at the configured token path
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Box::new(FileTokenStorage::new(
            config.session.token_path.as_str(),
        )))
    }

    /// Session persisted nowhere, useful in tests
    pub fn in_memory() -> Self {
        Self::new(Box::<MemoryTokenStorage>::default())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// `Authorization` header value for the current access token
    pub fn bearer(&self) -> Option<String> {
        self.read()
            .map(|tokens| format!("Bearer {}", tokens.access_token))
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().and_then(|tokens| tokens.refresh_token)
    }

    /// Claims of the current access token, if any
    pub fn claims(&self) -> Option<SessionClaims> {
        let tokens = self.read()?;
        decode_claims(&tokens.access_token).ok()
    }

    /// Replace the token pair and mirror it to storage
    pub fn install(&self, tokens: AuthTokens) -> ApiResult<()> {
        self.storage.store(&tokens)?;
        *self
            .tokens
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(tokens);
        Ok(())
    }

    /// Drop the session from memory and storage
    pub fn clear(&self) -> ApiResult<()> {
        self.storage.clear()?;
        *self
            .tokens
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }

    fn read(&self) -> Option<AuthTokens> {
        self.tokens
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
