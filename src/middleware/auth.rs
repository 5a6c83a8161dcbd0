// ABOUTME: API key authentication middleware for protected data endpoints
// ABOUTME: Accepts Authorization Bearer or X-API-Key and rejects unknown, revoked, or expired keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # API Key Authentication
//!
//! Keys are looked up by SHA-256 hash. A successful check stores
//! [`AuthenticatedKey`] in the request extensions and records the key's last
//! use in a background task so the response is not delayed.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bakebase_core::constants::headers::X_API_KEY;
use bakebase_core::errors::AppError;
use chrono::Utc;
use http::{header::AUTHORIZATION, HeaderMap};
use tracing::{debug, error};

use crate::api_keys::ApiKeyManager;
use crate::logging::AppLogger;
use crate::resources::ServerResources;

/// Identity of the key that authenticated the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedKey {
    /// Stored key id
    pub id: String,
    /// Display prefix of the key
    pub key_prefix: String,
}

/// Extract the raw API key from `Authorization: Bearer <key>` or `X-API-Key`
#[must_use]
pub fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty());
    if let Some(key) = bearer {
        return Some(key.to_owned());
    }

    headers
        .get(X_API_KEY)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
}

/// Require a valid API key on every request passing through this layer
///
/// # Errors
///
/// Returns 401 when the key is missing, unknown, revoked, or expired, and 500
/// when the key store cannot be queried
pub async fn require_api_key(
    State(resources): State<Arc<ServerResources>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let raw_key = extract_api_key(request.headers()).ok_or_else(AppError::auth_required)?;
    let key_hash = ApiKeyManager::hash_key(&raw_key);

    let api_key = resources
        .database
        .get_api_key_by_hash(&key_hash)
        .await
        .map_err(|e| {
            error!(error = %e, "API key lookup failed");
            AppError::internal("Internal server error")
                .with_endpoint_description("Authentication failed.")
        })?
        .ok_or_else(|| {
            AppLogger::log_auth_event(
                &ApiKeyManager::extract_key_prefix(&raw_key),
                "unknown_key",
                false,
            );
            AppError::auth_invalid("Invalid API key.")
        })?;

    let now = Utc::now();
    if let Err(rejection) = ApiKeyManager::check_key_status(&api_key, now) {
        AppLogger::log_auth_event(&api_key.key_prefix, api_key.status(now).as_str(), false);
        return Err(rejection);
    }

    debug!(key.prefix = %api_key.key_prefix, "API key authenticated");

    let database = resources.database.clone();
    let key_id = api_key.id.clone();
    tokio::spawn(async move {
        if let Err(e) = database.touch_api_key(&key_id, now).await {
            error!(key.id = %key_id, error = %e, "Failed to update API key last_used_at");
        }
    });

    request.extensions_mut().insert(AuthenticatedKey {
        id: api_key.id,
        key_prefix: api_key.key_prefix,
    });
    Ok(next.run(request).await)
}
