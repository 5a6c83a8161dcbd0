// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Validates requests and orchestrates store lookups around the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Domain service layer
//!
//! Route handlers stay thin: they extract the request and delegate here, so
//! the same rules apply whether the caller is an HTTP handler or a test.

/// Combination request validation, id resolution, and analysis
pub mod combination;

/// Ingredient listing filters parsed from query parameters
pub mod ingredients;
