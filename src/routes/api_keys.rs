// ABOUTME: API key provisioning route handlers for the HTML dashboard and JSON endpoint
// ABOUTME: No account required; both provisioning routes are rate limited per client IP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! API key provisioning routes
//!
//! `GET /dashboard/keys` serves a form, `POST /dashboard/keys` renders the new
//! key as HTML, and `POST /api/keys` returns it as JSON. The raw key is shown
//! once; only its hash is stored.

use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Extension, Router,
};
use bakebase_core::errors::{AppError, AppResult};
use chrono::Utc;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::logging::AppLogger;
use crate::middleware::{limit_key_provisioning, ClientIp};
use crate::resources::ServerResources;
use crate::response::{ApiResponse, Meta};

const PAGE_STYLE: &str = r"
    body { font-family: system-ui, sans-serif; max-width: 600px; margin: 2rem auto; padding: 0 1rem; }
    h1 { color: #333; }
    p { line-height: 1.6; color: #555; }
    code { background: #f4f4f4; padding: 0.2em 0.4em; border-radius: 4px; font-size: 0.9em; }
    .key-display { background: #1a1a1a; color: #0f0; padding: 1rem; border-radius: 8px; font-family: monospace; word-break: break-all; margin: 1rem 0; }
    .warning { background: #fff3cd; border: 1px solid #ffc107; padding: 1rem; border-radius: 8px; margin: 1rem 0; }
    button { background: #333; color: white; border: none; padding: 0.75rem 1.5rem; border-radius: 8px; cursor: pointer; font-size: 1rem; }
    button:hover { background: #555; }
    a { color: #0066cc; }
";

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Error</title></head>
<body><h1>Error</h1><p>Failed to generate API key. Please try again.</p>
<a href="/dashboard/keys">Back</a></body></html>
"#;

/// Payload of `POST /api/keys`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedKeyResponse {
    /// Raw API key, shown once
    pub api_key: String,
}

/// Render the provisioning form
#[must_use]
pub fn dashboard_page(expiry_days: i64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>BakeBase API Keys</title>
  <style>{PAGE_STYLE}</style>
</head>
<body>
  <h1>BakeBase API Keys</h1>
  <p>Generate an API key to authenticate with the BakeBase API. No account required.</p>
  <p>Use your key in requests:</p>
  <ul>
    <li><code>Authorization: Bearer &lt;your-key&gt;</code></li>
    <li>Or <code>X-API-Key: &lt;your-key&gt;</code></li>
  </ul>
  <p>Keys expire after {expiry_days} days. Store your key securely; you won't be able to see it again.</p>
  <form method="POST" action="/dashboard/keys">
    <button type="submit">Generate API Key</button>
  </form>
  <p><a href="/">Back to API</a> | <a href="/agents">Agent Guide</a></p>
</body>
</html>
"#
    )
}

/// Render the page showing a freshly generated key
#[must_use]
pub fn key_created_page(api_key: &str) -> String {
    let key = html_escape::encode_text(api_key);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>BakeBase API Key Generated</title>
  <style>{PAGE_STYLE}</style>
</head>
<body>
  <h1>API Key Generated</h1>
  <div class="warning">Copy your key now. You won't be able to see it again.</div>
  <div class="key-display">{key}</div>
  <p>Use it in requests:</p>
  <ul>
    <li><code>Authorization: Bearer {key}</code></li>
    <li>Or <code>X-API-Key: {key}</code></li>
  </ul>
  <p><a href="/dashboard/keys">Generate another key</a> | <a href="/">Back to API</a></p>
</body>
</html>
"#
    )
}

/// API key provisioning routes
pub struct ApiKeyRoutes;

impl ApiKeyRoutes {
    /// Create all API key provisioning routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let limiter = middleware::from_fn_with_state(resources.clone(), limit_key_provisioning);
        Router::new()
            .route(
                "/dashboard/keys",
                get(Self::handle_dashboard)
                    .merge(post(Self::handle_create_key_page).layer(limiter.clone())),
            )
            .route("/api/keys", post(Self::handle_create_key_json).layer(limiter))
            .with_state(resources)
    }

    /// Generate, store, and log a new key; returns the raw key
    async fn provision_key(
        resources: &ServerResources,
        client_ip: Option<ClientIp>,
        channel: &str,
    ) -> AppResult<String> {
        let (api_key, raw_key) = resources.api_key_manager.create_api_key(Utc::now());
        resources.database.create_api_key(&api_key).await?;

        let client_ip = client_ip.map_or_else(|| "unknown".to_owned(), |ip| ip.0.to_string());
        AppLogger::log_key_provisioned(&api_key.key_prefix, &client_ip, channel);
        Ok(raw_key)
    }

    /// Handle `GET /dashboard/keys`
    async fn handle_dashboard(State(resources): State<Arc<ServerResources>>) -> Html<String> {
        Html(dashboard_page(resources.api_key_manager.expiry_days()))
    }

    /// Handle `POST /dashboard/keys`
    async fn handle_create_key_page(
        State(resources): State<Arc<ServerResources>>,
        client_ip: Option<Extension<ClientIp>>,
    ) -> Response {
        let client_ip = client_ip.map(|Extension(ip)| ip);
        match Self::provision_key(&resources, client_ip, "dashboard").await {
            Ok(raw_key) => Html(key_created_page(&raw_key)).into_response(),
            Err(e) => {
                error!(error = %e, "Key generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
            }
        }
    }

    /// Handle `POST /api/keys`
    async fn handle_create_key_json(
        State(resources): State<Arc<ServerResources>>,
        client_ip: Option<Extension<ClientIp>>,
    ) -> Result<Response, AppError> {
        let client_ip = client_ip.map(|Extension(ip)| ip);
        let raw_key = Self::provision_key(&resources, client_ip, "api")
            .await
            .map_err(|e| {
                error!(error = %e, "Key generation failed");
                AppError::internal("Failed to generate API key")
                    .with_endpoint_description("Internal error.")
            })?;

        let meta = Meta::with_glossary(
            format!(
                "API key created. Store it securely; it expires in {} days.",
                resources.api_key_manager.expiry_days()
            ),
            &[(
                "api_key",
                "Your API key. Use in Authorization: Bearer <key> or X-API-Key header.",
            )],
        );
        let body = ApiResponse::new(CreatedKeyResponse { api_key: raw_key }, meta);
        Ok((StatusCode::CREATED, body).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_page_escapes_key() {
        let page = key_created_page("bake_<script>");
        assert!(page.contains("bake_&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_dashboard_mentions_expiry() {
        assert!(dashboard_page(30).contains("Keys expire after 30 days."));
    }
}
