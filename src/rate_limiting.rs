// ABOUTME: Fixed-window rate limiter for unauthenticated API key provisioning
// ABOUTME: Tracks request counts per client IP with a configurable window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Key Provisioning Rate Limiting
//!
//! Key provisioning is the only unauthenticated write in the API, so it is
//! throttled per client IP. Each IP gets a fixed window that starts with its
//! first request; once the window elapses the counter starts over.

use bakebase_core::constants::rate_limits::{
    KEY_PROVISIONING_MAX_REQUESTS, KEY_PROVISIONING_WINDOW_SECS,
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::net::IpAddr;

/// Rate limit state reported for a single request
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitInfo {
    /// Whether the request is rate limited
    pub limited: bool,
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// When the current window resets
    pub reset_at: DateTime<Utc>,
}

impl RateLimitInfo {
    /// Seconds until the window resets, never negative
    #[must_use]
    pub fn seconds_until_reset(&self, now: DateTime<Utc>) -> i64 {
        (self.reset_at - now).num_seconds().max(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: DateTime<Utc>,
    count: u32,
}

/// Per-IP fixed-window counter for the key provisioning endpoints
#[derive(Debug)]
pub struct KeyProvisioningLimiter {
    max_requests: u32,
    window: Duration,
    windows: DashMap<IpAddr, Window>,
}

impl KeyProvisioningLimiter {
    /// Create a limiter allowing `max_requests` per `window_secs` per client IP
    #[must_use]
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        let window_secs = i64::try_from(window_secs).unwrap_or(i64::MAX);
        Self {
            max_requests,
            window: Duration::seconds(window_secs),
            windows: DashMap::new(),
        }
    }

    /// Requests allowed per window
    #[must_use]
    pub const fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Record a request from `ip` at `now` and report whether it is allowed
    pub fn check(&self, ip: IpAddr, now: DateTime<Utc>) -> RateLimitInfo {
        let mut entry = self.windows.entry(ip).or_insert(Window {
            started_at: now,
            count: 0,
        });

        if now - entry.started_at >= self.window {
            *entry = Window {
                started_at: now,
                count: 0,
            };
        }

        let reset_at = entry.started_at + self.window;
        if entry.count >= self.max_requests {
            return RateLimitInfo {
                limited: true,
                limit: self.max_requests,
                remaining: 0,
                reset_at,
            };
        }

        entry.count += 1;
        RateLimitInfo {
            limited: false,
            limit: self.max_requests,
            remaining: self.max_requests - entry.count,
            reset_at,
        }
    }

    /// Drop windows that have fully elapsed
    pub fn purge_expired(&self, now: DateTime<Utc>) {
        let window = self.window;
        self.windows.retain(|_, state| now - state.started_at < window);
    }

    /// Number of client IPs currently tracked
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

impl Default for KeyProvisioningLimiter {
    fn default() -> Self {
        Self::new(KEY_PROVISIONING_MAX_REQUESTS, KEY_PROVISIONING_WINDOW_SECS)
    }
}
