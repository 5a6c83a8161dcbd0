// ABOUTME: Core types and constants for the BakeBase ingredient reference API
// ABOUTME: Foundation crate with error handling, ingredient models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![deny(unsafe_code)]

//! # BakeBase Core
//!
//! Foundation crate providing shared types and constants for the BakeBase
//! ingredient reference API. This crate changes infrequently so the chemistry
//! engine and the server can build against it in parallel.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Ingredient records, closed enumerations, and API key records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (ingredients, API keys)
pub mod models;
