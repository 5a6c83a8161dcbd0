// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Environment-driven configuration for the HTTP server, store, and analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Configuration module for the BakeBase server
//!
//! Configuration is environment-only; no config file is read.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AnalyzerConfig, ApiKeyConfig, DatabaseConfig, DatabaseUrl, Environment, RateLimitConfig,
    ServerConfig,
};
