// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, API key policy, rate limits, and request limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Constants module
//!
//! Application constants grouped by domain. Baking thresholds used by the
//! combination analyzer live next to the analyzer in `bakebase-chemistry`.

/// Service identity used in logs, health checks, and discovery documents
pub mod service {
    /// Public service name
    pub const NAME: &str = "BakeBase";
    /// Service name used in structured logs
    pub const LOG_NAME: &str = "bakebase-server";
    /// Public API version (independent of the crate version)
    pub const API_VERSION: &str = "1.0.0";
    /// One-line service description
    pub const DESCRIPTION: &str = "AI-first food science reference API for baking ingredients";
}

/// API key format and lifecycle
pub mod api_keys {
    /// Prefix for every issued key
    pub const KEY_PREFIX: &str = "bake_";
    /// Number of random bytes hex-encoded after the prefix
    pub const RANDOM_BYTES: usize = 16;
    /// Total key length: prefix (5) + 32 hex chars
    pub const KEY_LENGTH: usize = 37;
    /// Characters kept as the displayable key prefix
    pub const DISPLAY_PREFIX_LENGTH: usize = 12;
    /// Default lifetime of a provisioned key
    pub const DEFAULT_EXPIRY_DAYS: i64 = 90;
}

/// Key provisioning rate limit defaults
pub mod rate_limits {
    /// Requests allowed per window per client IP
    pub const KEY_PROVISIONING_MAX_REQUESTS: u32 = 5;
    /// Window length in seconds (15 minutes)
    pub const KEY_PROVISIONING_WINDOW_SECS: u64 = 15 * 60;
}

/// Request validation limits
pub mod limits {
    /// Maximum ingredients accepted by the combine endpoint
    pub const MAX_COMBINATION_INGREDIENTS: usize = 10;
    /// Number of example names listed per category
    pub const CATEGORY_EXAMPLES: usize = 5;
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/bakebase.db";
}

/// HTTP header names
pub mod headers {
    /// API key header accepted as an alternative to `Authorization: Bearer`
    pub const X_API_KEY: &str = "x-api-key";
    /// Request correlation header
    pub const X_REQUEST_ID: &str = "x-request-id";
    /// Maximum requests allowed in the current window
    pub const RATE_LIMIT_LIMIT: &str = "ratelimit-limit";
    /// Remaining requests in the current window
    pub const RATE_LIMIT_REMAINING: &str = "ratelimit-remaining";
    /// Seconds until the current window resets
    pub const RATE_LIMIT_RESET: &str = "ratelimit-reset";
}
