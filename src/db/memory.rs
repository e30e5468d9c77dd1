// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local document store.
//!
//! Mirrors the Firestore collection layout (`users/{uid}` and
//! `countries/{code}/events`) for local development and tests.

use crate::models::{Event, Profile};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory profiles and country-partitioned events.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, Profile>,
    events: DashMap<String, Vec<Event>>,
    next_event_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_profile(&self, uid: &str) -> Option<Profile> {
        self.users.get(uid).map(|entry| entry.value().clone())
    }

    /// Replace the whole profile document.
    pub fn put_profile(&self, uid: &str, profile: &Profile) {
        self.users.insert(uid.to_string(), profile.clone());
    }

    pub fn list_events(&self, country_code: &str) -> Vec<Event> {
        self.events
            .get(country_code)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Append an event with a generated document ID.
    pub fn insert_event(&self, country_code: &str, mut event: Event) -> Event {
        let seq = self.next_event_id.fetch_add(1, Ordering::Relaxed) + 1;
        event.id = Some(format!("evt-{seq:08}"));
        self.events
            .entry(country_code.to_string())
            .or_default()
            .push(event.clone());
        event
    }
}
