// ABOUTME: HTTP middleware for authentication, rate limiting, and request correlation
// ABOUTME: Each layer is an axum from_fn middleware applied by the route builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

/// API key authentication for data endpoints
pub mod auth;
/// CORS configuration
pub mod cors;
/// Key provisioning rate limit with `RateLimit-*` headers
pub mod rate_limiting;
/// Request ID propagation
pub mod request_id;

pub use auth::{extract_api_key, require_api_key, AuthenticatedKey};
pub use cors::setup_cors;
pub use rate_limiting::{
    client_ip, create_rate_limit_headers, limit_key_provisioning, ClientIp,
};
pub use request_id::{propagate_request_id, RequestId};
