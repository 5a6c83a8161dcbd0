// ABOUTME: API key management for self-service key provisioning and authentication
// ABOUTME: Generates bake_ keys, hashes them for storage, and checks key lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # API Key Management
//!
//! Keys look like `bake_` followed by 32 lowercase hex characters. Only the
//! SHA-256 digest and a 12-character display prefix are stored.

use bakebase_core::constants::api_keys;
use bakebase_core::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub use bakebase_core::models::{ApiKey, ApiKeyData, ApiKeyStatus};

/// API Key Manager
#[derive(Debug, Clone)]
pub struct ApiKeyManager {
    expiry_days: i64,
}

impl Default for ApiKeyManager {
    fn default() -> Self {
        Self::new(api_keys::DEFAULT_EXPIRY_DAYS)
    }
}

impl ApiKeyManager {
    /// Create a manager issuing keys that expire after `expiry_days`
    #[must_use]
    pub const fn new(expiry_days: i64) -> Self {
        Self { expiry_days }
    }

    /// Lifetime of issued keys in days
    #[must_use]
    pub const fn expiry_days(&self) -> i64 {
        self.expiry_days
    }

    /// Generate fresh key material
    #[must_use]
    pub fn generate_api_key() -> ApiKeyData {
        let random_bytes: [u8; api_keys::RANDOM_BYTES] = thread_rng().gen();
        let full_key = format!("{}{}", api_keys::KEY_PREFIX, hex::encode(random_bytes));

        ApiKeyData {
            key_prefix: Self::extract_key_prefix(&full_key),
            key_hash: Self::hash_key(&full_key),
            full_key,
        }
    }

    /// Validate an API key format
    ///
    /// # Errors
    ///
    /// Returns an error if the key lacks the `bake_` prefix or is not 32 hex characters after it
    pub fn validate_key_format(api_key: &str) -> AppResult<()> {
        let Some(body) = api_key.strip_prefix(api_keys::KEY_PREFIX) else {
            return Err(AppError::invalid_input("Invalid API key format"));
        };
        if api_key.len() != api_keys::KEY_LENGTH {
            return Err(AppError::invalid_input("Invalid API key length"));
        }
        if !body
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(AppError::invalid_input("Invalid API key format"));
        }
        Ok(())
    }

    /// Extract the displayable prefix from a full key
    #[must_use]
    pub fn extract_key_prefix(api_key: &str) -> String {
        api_key
            .chars()
            .take(api_keys::DISPLAY_PREFIX_LENGTH)
            .collect()
    }

    /// Hash an API key for storage and lookup
    #[must_use]
    pub fn hash_key(api_key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(api_key.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Create a new key record and the raw key shown to the caller once
    #[must_use]
    pub fn create_api_key(&self, now: DateTime<Utc>) -> (ApiKey, String) {
        let ApiKeyData {
            full_key,
            key_prefix,
            key_hash,
        } = Self::generate_api_key();

        let api_key = ApiKey {
            id: Uuid::new_v4().to_string(),
            key_prefix,
            key_hash,
            created_at: now,
            expires_at: Some(now + Duration::days(self.expiry_days)),
            last_used_at: None,
            revoked_at: None,
        };
        (api_key, full_key)
    }

    /// Check that a stored key may authenticate at `now`
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` for revoked keys and `AUTH_EXPIRED` for expired keys
    pub fn check_key_status(api_key: &ApiKey, now: DateTime<Utc>) -> AppResult<()> {
        match api_key.status(now) {
            ApiKeyStatus::Active => Ok(()),
            ApiKeyStatus::Revoked => Err(AppError::auth_invalid("API key has been revoked.")),
            ApiKeyStatus::Expired => Err(AppError::auth_expired()),
        }
    }
}
