// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! FIRESTORE_EMULATOR_HOST to be set; otherwise they are skipped.
//!
//! The emulator provides a clean state for each test run.

use country_events::models::{Age, Event, NewEvent, Profile};
use country_events::services::{EventDirectory, ProfileStore};
use country_events::session::UserIdentity;

mod common;
use common::test_db;

/// Generate a unique identity (and country code) for test isolation.
fn unique_suffix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string()
}

fn profile(name: &str, age: Age, country: &str) -> Profile {
    Profile {
        name: name.to_string(),
        age,
        country_code: country.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROFILE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_new_profile_creation() {
    require_emulator!();

    let profiles = ProfileStore::new(test_db().await);
    let uid = UserIdentity::new(format!("user-{}", unique_suffix()));

    // Initially, profile should not exist
    let before = profiles.get_profile(&uid).await.unwrap();
    assert!(before.is_none(), "Profile should not exist before creation");

    let written = profile("Test", Age::Years(30), "US");
    profiles.put_profile(&uid, &written).await.unwrap();

    let after = profiles.get_profile(&uid).await.unwrap();
    assert_eq!(after, Some(written));

    println!("✓ New profile created and verified: uid={}", uid);
}

#[tokio::test]
async fn test_profile_overwrite_is_not_merge() {
    require_emulator!();

    let profiles = ProfileStore::new(test_db().await);
    let uid = UserIdentity::new(format!("user-{}", unique_suffix()));

    profiles
        .put_profile(&uid, &profile("A", Age::Years(30), "US"))
        .await
        .unwrap();
    profiles
        .put_profile(&uid, &profile("B", Age::Text("31".to_string()), "US"))
        .await
        .unwrap();

    let fetched = profiles.get_profile(&uid).await.unwrap().unwrap();
    assert_eq!(fetched.name, "B");
    assert_eq!(fetched.age, Age::Text("31".to_string()));

    println!("✓ Profile overwrite verified: uid={}", uid);
}

// ═══════════════════════════════════════════════════════════════════════════
// EVENT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_empty_partition_lists_nothing() {
    require_emulator!();

    let directory = EventDirectory::new(test_db().await);
    let country = format!("ZZ{}", unique_suffix());

    let events = directory.list_events(&country).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_event_creation_in_country_partition() {
    require_emulator!();

    let db = test_db().await;
    let profiles = ProfileStore::new(db.clone());
    let directory = EventDirectory::new(db);

    let suffix = unique_suffix();
    let uid = UserIdentity::new(format!("user-{suffix}"));
    let country = format!("C{suffix}");

    profiles
        .put_profile(&uid, &profile("Organizer", Age::Years(41), &country))
        .await
        .unwrap();

    let stored: Event = directory
        .add_event(
            &uid,
            &NewEvent {
                event_name: "Cleanup".to_string(),
                event_description: "Beach cleanup".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(stored.id.is_some(), "Store should assign a document ID");

    let events = directory.list_events(&country).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, "Cleanup");
    assert_eq!(events[0].event_description, "Beach cleanup");
    assert_eq!(events[0].created_by, "Organizer");
    assert_eq!(events[0].created_at, stored.created_at);

    println!("✓ Event created in partition {}", country);
}
