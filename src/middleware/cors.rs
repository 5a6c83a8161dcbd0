// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Allows browser and agent clients from any origin to call the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use http::{header::HeaderName, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use bakebase_core::constants::headers::{
    RATE_LIMIT_LIMIT, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET, X_API_KEY, X_REQUEST_ID,
};

/// Configure CORS for the public API
///
/// Any origin may call the API. Credentials travel in headers rather than
/// cookies, so the API key headers are listed explicitly.
///
/// # Allowed Headers
///
/// - Standard headers: content-type, authorization, accept, origin
/// - API key header: x-api-key
/// - Correlation header: x-request-id
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(X_API_KEY),
            HeaderName::from_static(X_REQUEST_ID),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([
            HeaderName::from_static(X_REQUEST_ID),
            HeaderName::from_static(RATE_LIMIT_LIMIT),
            HeaderName::from_static(RATE_LIMIT_REMAINING),
            HeaderName::from_static(RATE_LIMIT_RESET),
        ])
}
