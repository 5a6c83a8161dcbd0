// ABOUTME: Rate limiting middleware for the key provisioning endpoints
// ABOUTME: Emits RateLimit-* headers and answers 429 with Retry-After when exceeded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Rate Limiting Middleware with HTTP Headers
//!
//! Adds the standard `RateLimit-Limit`, `RateLimit-Remaining`, and
//! `RateLimit-Reset` headers to every provisioning response and turns an
//! exhausted window into a 429 envelope.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bakebase_core::constants::headers::{RATE_LIMIT_LIMIT, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET};
use bakebase_core::errors::AppError;
use chrono::{DateTime, Utc};
use http::{header::RETRY_AFTER, HeaderMap, HeaderValue};
use tracing::warn;

use crate::rate_limiting::RateLimitInfo;
use crate::resources::ServerResources;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Client address resolved by the rate limiter, available to downstream handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

/// Create a `HeaderMap` with rate limit headers
#[must_use]
pub fn create_rate_limit_headers(info: &RateLimitInfo, now: DateTime<Utc>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(RATE_LIMIT_LIMIT, HeaderValue::from(info.limit));
    headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from(info.remaining));
    headers.insert(RATE_LIMIT_RESET, HeaderValue::from(info.seconds_until_reset(now)));
    headers
}

/// Resolve the client IP from the first `X-Forwarded-For` hop, then the socket address
#[must_use]
pub fn client_ip(request: &Request) -> IpAddr {
    let forwarded = request
        .headers()
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|hop| hop.trim().parse().ok());
    if let Some(ip) = forwarded {
        return ip;
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED), |info| info.0.ip())
}

/// Throttle key provisioning per client IP
pub async fn limit_key_provisioning(
    State(resources): State<Arc<ServerResources>>,
    mut request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);
    let now = Utc::now();
    let info = resources.key_limiter.check(ip, now);
    let headers = create_rate_limit_headers(&info, now);

    if info.limited {
        warn!(client.ip = %ip, limit = info.limit, "Key provisioning rate limit exceeded");
        let retry_secs = info.seconds_until_reset(now);
        let retry_minutes = (retry_secs + 59) / 60;
        let error = AppError::rate_limit_exceeded(info.limit, info.reset_at)
            .with_endpoint_description(format!(
                "Rate limit exceeded. Try again in {retry_minutes} minutes."
            ));
        let mut response = error.into_response();
        response.headers_mut().extend(headers);
        response
            .headers_mut()
            .insert(RETRY_AFTER, HeaderValue::from(retry_secs));
        return response;
    }

    request.extensions_mut().insert(ClientIp(ip));
    let mut response = next.run(request).await;
    response.headers_mut().extend(headers);
    response
}
