// ABOUTME: Integration tests for the per-IP key provisioning rate limiter
// ABOUTME: Covers the fixed window, window reset, client isolation, and purging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bakebase::rate_limiting::KeyProvisioningLimiter;
use chrono::{Duration, Utc};

fn client(last_octet: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(192, 0, 2, last_octet))
}

#[test]
fn test_fixed_window_allows_limit_then_blocks() {
    let limiter = KeyProvisioningLimiter::new(5, 900);
    let now = Utc::now();

    for expected_remaining in (0..5).rev() {
        let info = limiter.check(client(1), now);
        assert!(!info.limited);
        assert_eq!(info.limit, 5);
        assert_eq!(info.remaining, expected_remaining);
    }

    let blocked = limiter.check(client(1), now + Duration::seconds(10));
    assert!(blocked.limited);
    assert_eq!(blocked.remaining, 0);
    assert_eq!(blocked.reset_at, now + Duration::seconds(900));
    assert_eq!(blocked.seconds_until_reset(now + Duration::seconds(10)), 890);
}

#[test]
fn test_window_starts_at_first_request_and_resets() {
    let limiter = KeyProvisioningLimiter::new(2, 60);
    let start = Utc::now();

    limiter.check(client(2), start);
    limiter.check(client(2), start + Duration::seconds(20));
    assert!(limiter.check(client(2), start + Duration::seconds(59)).limited);

    let fresh = limiter.check(client(2), start + Duration::seconds(60));
    assert!(!fresh.limited);
    assert_eq!(fresh.remaining, 1);
    assert_eq!(fresh.reset_at, start + Duration::seconds(120));
}

#[test]
fn test_clients_are_isolated() {
    let limiter = KeyProvisioningLimiter::new(1, 900);
    let now = Utc::now();

    assert!(!limiter.check(client(3), now).limited);
    assert!(limiter.check(client(3), now).limited);
    assert!(!limiter.check(client(4), now).limited);
    assert!(!limiter.check(IpAddr::V6(Ipv6Addr::LOCALHOST), now).limited);
    assert_eq!(limiter.tracked_clients(), 3);
}

#[test]
fn test_reset_time_never_reported_negative() {
    let limiter = KeyProvisioningLimiter::new(1, 30);
    let now = Utc::now();
    let info = limiter.check(client(5), now);
    assert_eq!(info.seconds_until_reset(now + Duration::seconds(45)), 0);
}

#[test]
fn test_purge_forgets_idle_clients() {
    let limiter = KeyProvisioningLimiter::new(3, 60);
    let start = Utc::now();
    limiter.check(client(6), start);
    limiter.check(client(7), start + Duration::seconds(30));

    limiter.purge_expired(start + Duration::seconds(45));
    assert_eq!(limiter.tracked_clients(), 2);

    limiter.purge_expired(start + Duration::seconds(120));
    assert_eq!(limiter.tracked_clients(), 0);
}

#[test]
fn test_default_limits() {
    let limiter = KeyProvisioningLimiter::default();
    assert_eq!(limiter.max_requests(), 5);
}
