// ABOUTME: Integration tests for API key generation, validation, and persistence
// ABOUTME: Covers key format, hashing, expiry policy, status checks, and the database round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bakebase::api_keys::{ApiKeyManager, ApiKeyStatus};
use bakebase::errors::ErrorCode;
use chrono::{Duration, Utc};

#[test]
fn test_hash_is_stable_and_distinct() {
    let first = ApiKeyManager::generate_api_key();
    let second = ApiKeyManager::generate_api_key();

    assert_ne!(first.full_key, second.full_key);
    assert_eq!(ApiKeyManager::hash_key(&first.full_key), first.key_hash);
    assert_ne!(first.key_hash, second.key_hash);
    assert!(first.key_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_created_key_expires_after_policy_days() {
    let manager = ApiKeyManager::new(30);
    let now = Utc::now();
    let (api_key, raw_key) = manager.create_api_key(now);

    assert_eq!(api_key.expires_at, Some(now + Duration::days(30)));
    assert_eq!(api_key.key_hash, ApiKeyManager::hash_key(&raw_key));
    assert!(raw_key.starts_with(&api_key.key_prefix));
    assert!(api_key.last_used_at.is_none());
    assert!(api_key.revoked_at.is_none());
}

#[test]
fn test_default_manager_uses_ninety_days() {
    assert_eq!(ApiKeyManager::default().expiry_days(), 90);
}

#[test]
fn test_check_key_status() {
    let now = Utc::now();
    let (mut api_key, _) = ApiKeyManager::new(1).create_api_key(now);

    assert_eq!(api_key.status(now), ApiKeyStatus::Active);
    assert!(ApiKeyManager::check_key_status(&api_key, now).is_ok());

    let later = now + Duration::days(2);
    assert_eq!(api_key.status(later), ApiKeyStatus::Expired);
    let error = ApiKeyManager::check_key_status(&api_key, later).unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthExpired);

    api_key.revoked_at = Some(now);
    assert_eq!(api_key.status(later), ApiKeyStatus::Revoked);
    let error = ApiKeyManager::check_key_status(&api_key, now).unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_database_round_trip() {
    let database = common::create_test_database().await.unwrap();
    let now = Utc::now();
    let (api_key, raw_key) = ApiKeyManager::default().create_api_key(now);
    database.create_api_key(&api_key).await.unwrap();

    let stored = database
        .get_api_key_by_hash(&ApiKeyManager::hash_key(&raw_key))
        .await
        .unwrap()
        .expect("key should be stored");
    assert_eq!(stored.id, api_key.id);
    assert_eq!(stored.key_prefix, api_key.key_prefix);
    assert!(stored.last_used_at.is_none());

    let used_at = now + Duration::minutes(5);
    database.touch_api_key(&api_key.id, used_at).await.unwrap();
    let touched = database
        .get_api_key_by_hash(&api_key.key_hash)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        touched.last_used_at.map(|t| t.timestamp()),
        Some(used_at.timestamp())
    );

    assert!(database.revoke_api_key(&api_key.id, now).await.unwrap());
    assert!(!database.revoke_api_key(&api_key.id, now).await.unwrap());
    let revoked = database
        .get_api_key_by_hash(&api_key.key_hash)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(revoked.status(now), ApiKeyStatus::Revoked);
}

#[tokio::test]
async fn test_unknown_hash_is_absent() {
    let database = common::create_test_database().await.unwrap();
    let missing = database
        .get_api_key_by_hash(&ApiKeyManager::hash_key("bake_missing"))
        .await
        .unwrap();
    assert!(missing.is_none());
}
