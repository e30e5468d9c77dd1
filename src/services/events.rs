// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event directory: events partitioned by country code.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Event, NewEvent, Profile};
use crate::services::ProfileStore;
use crate::session::UserIdentity;
use crate::time_utils::server_timestamp;

/// Lists and appends country-scoped events.
#[derive(Clone)]
pub struct EventDirectory {
    db: FirestoreDb,
    profiles: ProfileStore,
}

impl EventDirectory {
    pub fn new(db: FirestoreDb) -> Self {
        Self {
            profiles: ProfileStore::new(db.clone()),
            db,
        }
    }

    /// Snapshot of every event in a country partition.
    ///
    /// An empty partition yields an empty vec.
    pub async fn list_events(&self, country_code: &str) -> Result<Vec<Event>, AppError> {
        let country_code = country_code.trim();
        if country_code.is_empty() {
            return Err(AppError::IncompleteProfile);
        }

        let events = self.db.list_events(country_code).await?;
        tracing::debug!(country = country_code, count = events.len(), "Events listed");
        Ok(events)
    }

    /// Re-read the user's profile and list its country's events.
    pub async fn list_events_for(
        &self,
        identity: &UserIdentity,
    ) -> Result<(Profile, Vec<Event>), AppError> {
        let profile = self.profiles.require_complete(identity).await?;
        let events = self.list_events(&profile.country_code).await?;
        Ok((profile, events))
    }

    /// Append an event authored by `identity`.
    ///
    /// The profile is read at write time: attribution uses the author's
    /// current name and the event lands in their current country, even if
    /// the profile changed since sign-in. The country partition is never a
    /// caller argument.
    pub async fn add_event(
        &self,
        identity: &UserIdentity,
        new_event: &NewEvent,
    ) -> Result<Event, AppError> {
        let profile = self.profiles.require_complete(identity).await?;
        let country_code = profile.country_code.trim();

        let event = Event {
            id: None,
            event_name: new_event.event_name.clone(),
            event_description: new_event.event_description.clone(),
            created_by: profile.name.clone(),
            created_at: server_timestamp(),
        };

        let stored = self.db.insert_event(country_code, &event).await?;

        tracing::info!(
            uid = %identity,
            country = country_code,
            event_id = stored.id.as_deref().unwrap_or("<unknown>"),
            "Event created"
        );
        Ok(stored)
    }
}
