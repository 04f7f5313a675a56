// ============================================================================
// SESSION STATE - Single source of truth for console access
// ============================================================================
// Persisted tokens are authoritative; `authenticated` only caches them and
// is dropped whenever the tokens stop being usable.
// ============================================================================

use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::models::auth::SignInResponse;
use crate::utils::constants::{
    STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN, STORAGE_KEY_TOKEN_EXPIRES_AT,
};
use crate::utils::storage::SessionStorage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// RFC3339 expiry; `None` means the issuer did not send one
    pub expires_at: Option<String>,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at.to_rfc3339());
        self
    }

    /// Missing keys read as empty strings
    pub fn load(storage: &dyn SessionStorage) -> Self {
        Self {
            access_token: storage.get(STORAGE_KEY_ACCESS_TOKEN).unwrap_or_default(),
            refresh_token: storage.get(STORAGE_KEY_REFRESH_TOKEN).unwrap_or_default(),
            expires_at: storage
                .get(STORAGE_KEY_TOKEN_EXPIRES_AT)
                .filter(|v| !v.is_empty()),
        }
    }

    pub fn persist(&self, storage: &dyn SessionStorage) -> Result<(), StorageError> {
        storage.set(STORAGE_KEY_ACCESS_TOKEN, &self.access_token)?;
        storage.set(STORAGE_KEY_REFRESH_TOKEN, &self.refresh_token)?;
        match self.expires_at {
            Some(ref expires_at) => storage.set(STORAGE_KEY_TOKEN_EXPIRES_AT, expires_at),
            None => storage.remove(STORAGE_KEY_TOKEN_EXPIRES_AT),
        }
    }

    /// Both tokens non-empty
    pub fn is_present(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }

    /// An unparseable expiry counts as expired
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => false,
            Some(ref raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(expires_at) => now >= expires_at.with_timezone(&Utc),
                Err(_) => true,
            },
        }
    }

    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.is_present() && !self.is_expired(now)
    }
}

impl From<SignInResponse> for SessionTokens {
    fn from(response: SignInResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at: response.expires_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub tokens: SessionTokens,
}

impl SessionState {
    pub fn restore(storage: &dyn SessionStorage, now: DateTime<Utc>) -> Self {
        let tokens = SessionTokens::load(storage);
        Self {
            authenticated: tokens.is_usable(now),
            tokens,
        }
    }

    /// Re-read persisted tokens; the cached flag never outlives them
    pub fn refresh(&mut self, storage: &dyn SessionStorage, now: DateTime<Utc>) {
        self.tokens = SessionTokens::load(storage);
        if !self.tokens.is_usable(now) {
            self.authenticated = false;
        }
    }
}
