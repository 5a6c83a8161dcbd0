// ABOUTME: Core data models shared by the store, the analyzer, and the HTTP layer
// ABOUTME: Re-exports ingredient and API key types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

/// API key records and provisioning DTOs
pub mod api_key;
/// Ingredient records and closed enumerations
pub mod ingredient;

pub use api_key::{ApiKey, ApiKeyData, ApiKeyStatus};
pub use ingredient::{
    ConfidenceLevel, IngredientCategory, IngredientRecord, Interaction, LeaveningType,
    MeasurementUnit, Substitution,
};
