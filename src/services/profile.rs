// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store: one profile document per user identity.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::Profile;
use crate::session::UserIdentity;

/// Reads and overwrites profiles. Every read goes to the store.
#[derive(Clone)]
pub struct ProfileStore {
    db: FirestoreDb,
}

impl ProfileStore {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Fetch the profile for `identity`; `None` if the user never registered.
    pub async fn get_profile(&self, identity: &UserIdentity) -> Result<Option<Profile>, AppError> {
        self.db.get_profile(identity.as_str()).await
    }

    /// Replace the stored profile with `profile`.
    pub async fn put_profile(
        &self,
        identity: &UserIdentity,
        profile: &Profile,
    ) -> Result<(), AppError> {
        self.db.put_profile(identity.as_str(), profile).await?;
        tracing::info!(uid = %identity, country = %profile.country_code, "Profile saved");
        Ok(())
    }

    /// Fetch the profile and require it to have a country.
    pub async fn require_complete(&self, identity: &UserIdentity) -> Result<Profile, AppError> {
        let profile = self
            .get_profile(identity)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", identity)))?;

        if !profile.is_complete() {
            return Err(AppError::IncompleteProfile);
        }
        Ok(profile)
    }
}
