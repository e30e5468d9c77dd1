// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (`users/{uid}`)
//! - Events (`countries/{countryCode}/events/{autoId}`)
//!
//! Every call is a single round trip; nothing is cached.

use crate::db::collections;
use crate::db::MemoryStore;
use crate::error::AppError;
use crate::models::{Event, Profile};
use std::sync::Arc;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<MemoryStore>),
    Offline,
}

/// Document database client.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a client backed by a process-local store.
    pub fn new_in_memory() -> Self {
        Self::with_memory_store(Arc::new(MemoryStore::new()))
    }

    /// Create a client sharing an existing in-memory store.
    pub fn with_memory_store(store: Arc<MemoryStore>) -> Self {
        Self {
            backend: Backend::Memory(store),
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    fn offline() -> AppError {
        AppError::Database("Database not connected (offline mode)".to_string())
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Get a profile by user identity. `None` means the user has not
    /// registered yet.
    pub async fn get_profile(&self, uid: &str) -> Result<Option<Profile>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(uid)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.get_profile(uid)),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Overwrite the profile document for a user.
    ///
    /// No field mask is sent, so fields absent from `profile` are removed.
    pub async fn put_profile(&self, uid: &str, profile: &Profile) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USERS)
                    .document_id(uid)
                    .object(profile)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.put_profile(uid, profile),
            Backend::Offline => return Err(Self::offline()),
        }

        tracing::debug!(uid, country = %profile.country_code, "Profile written");
        Ok(())
    }

    // ─── Event Operations ────────────────────────────────────────

    /// List every event in a country partition.
    ///
    /// Order is whatever the store returns.
    pub async fn list_events(&self, country_code: &str) -> Result<Vec<Event>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let parent_path = client
                    .parent_path(collections::COUNTRIES, country_code)
                    .map_err(|e| AppError::Database(e.to_string()))?;

                client
                    .fluent()
                    .select()
                    .from(collections::EVENTS)
                    .parent(&parent_path)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))
            }
            Backend::Memory(store) => Ok(store.list_events(country_code)),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Append an event to a country partition with a generated document ID.
    pub async fn insert_event(&self, country_code: &str, event: &Event) -> Result<Event, AppError> {
        let stored = match &self.backend {
            Backend::Firestore(client) => {
                let parent_path = client
                    .parent_path(collections::COUNTRIES, country_code)
                    .map_err(|e| AppError::Database(e.to_string()))?;

                client
                    .fluent()
                    .insert()
                    .into(collections::EVENTS)
                    .generate_document_id()
                    .parent(&parent_path)
                    .object(event)
                    .execute::<Event>()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?
            }
            Backend::Memory(store) => store.insert_event(country_code, event.clone()),
            Backend::Offline => return Err(Self::offline()),
        };

        tracing::debug!(
            country = country_code,
            event_id = stored.id.as_deref().unwrap_or("<unknown>"),
            "Event inserted"
        );
        Ok(stored)
    }
}
