// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User profile model for storage and API.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Per-user profile stored in Firestore under `users/{uid}`.
///
/// Written only by full overwrite; there is no partial update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct Profile {
    /// Display name, used as event attribution
    pub name: String,
    pub age: Age,
    /// Country partition key for events (e.g. "US")
    #[serde(default)]
    pub country_code: String,
}

impl Profile {
    /// A profile without a country code cannot scope event queries.
    pub fn is_complete(&self) -> bool {
        !self.country_code.trim().is_empty()
    }

    /// Country code if the profile is complete.
    pub fn country(&self) -> Option<&str> {
        self.is_complete().then_some(self.country_code.trim())
    }
}

/// Age as entered by the user.
///
/// Older clients stored the raw text field, newer ones store a number, so
/// both shapes are accepted. Firestore may hand back any numeric value
/// (doubles included), which lands in `Number` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub enum Age {
    Years(u32),
    Number(f64),
    Text(String),
}

impl Default for Age {
    fn default() -> Self {
        Age::Text(String::new())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Years(years) => write!(f, "{years}"),
            Age::Number(value) => write!(f, "{value}"),
            Age::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age::Years(years)
    }
}

impl From<&str> for Age {
    fn from(text: &str) -> Self {
        Age::Text(text.to_string())
    }
}
