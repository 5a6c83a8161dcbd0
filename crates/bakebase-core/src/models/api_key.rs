// ABOUTME: API key record, lifecycle status, and provisioning DTOs
// ABOUTME: Keys are stored hashed; the raw key is only returned once at creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored API key (never contains the raw key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Record identifier
    pub id: String,
    /// First characters of the raw key, safe to display
    pub key_prefix: String,
    /// SHA-256 hex digest of the raw key
    pub key_hash: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Expiry time; `None` never expires
    pub expires_at: Option<DateTime<Utc>>,
    /// Last successful authentication
    pub last_used_at: Option<DateTime<Utc>>,
    /// Revocation time
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of an API key at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    /// Usable
    Active,
    /// Explicitly revoked
    Revoked,
    /// Past its expiry time
    Expired,
}

impl ApiKeyStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Revoked => "revoked",
            Self::Expired => "expired",
        }
    }
}

impl ApiKey {
    /// Status of the key at `now`; revocation wins over expiry
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> ApiKeyStatus {
        if self.revoked_at.is_some() {
            ApiKeyStatus::Revoked
        } else if self.expires_at.is_some_and(|expires_at| expires_at < now) {
            ApiKeyStatus::Expired
        } else {
            ApiKeyStatus::Active
        }
    }
}

/// Raw key material produced by the generator
#[derive(Debug, Clone)]
pub struct ApiKeyData {
    /// Full key, shown to the caller once
    pub full_key: String,
    /// Displayable prefix
    pub key_prefix: String,
    /// SHA-256 hex digest
    pub key_hash: String,
}
