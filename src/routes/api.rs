// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Event, NewEvent, Profile};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).put(put_profile))
        .route("/api/events", get(list_events).post(add_event))
}

// ─── Profile ─────────────────────────────────────────────────

/// Get the caller's profile.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Profile>> {
    let profile = state
        .profiles
        .get_profile(&user.identity)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user.identity)))?;

    Ok(Json(profile))
}

/// Replace the caller's profile. A profile without a country is refused.
async fn put_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>> {
    if !profile.is_complete() {
        return Err(AppError::IncompleteProfile);
    }
    state.profiles.put_profile(&user.identity, &profile).await?;
    Ok(Json(profile))
}

// ─── Events ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct EventsResponse {
    pub country_code: String,
    pub events: Vec<Event>,
}

/// List events in the caller's country.
async fn list_events(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<EventsResponse>> {
    let (profile, events) = state.events.list_events_for(&user.identity).await?;

    Ok(Json(EventsResponse {
        country_code: profile.country_code,
        events,
    }))
}

/// Create an event in the caller's country.
async fn add_event(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(new_event): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = state.events.add_event(&user.identity, &new_event).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
