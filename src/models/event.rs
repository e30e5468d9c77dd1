// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Country-scoped event model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored event record in `countries/{countryCode}/events`.
///
/// Events are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Event {
    /// Store-generated document ID
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event_name: String,
    pub event_description: String,
    /// Author's display name at write time (not their identity)
    pub created_by: String,
    /// Assigned by the server when the event is written (RFC 3339)
    pub created_at: String,
}

/// Event fields supplied by the author.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct NewEvent {
    pub event_name: String,
    #[serde(default)]
    pub event_description: String,
}
