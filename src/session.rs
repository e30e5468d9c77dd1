// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signed-in session state for a client workflow.
//!
//! A `Session` is owned by the workflow that created it and is only
//! mutated by the identity gate. It starts empty, is populated on sign-in,
//! and is emptied again on logout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identity issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of exchanging a provider ID token for a local credential.
#[derive(Debug, Clone)]
pub struct SessionCredential {
    pub identity: UserIdentity,
    /// Signed session JWT
    pub token: String,
    /// Email reported by the provider, if shared
    pub email: Option<String>,
    /// Account display name reported by the provider, if shared
    pub display_name: Option<String>,
}

/// Holder of at most one signed-in user.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<SessionCredential>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.current.as_ref().map(|c| &c.identity)
    }

    pub fn credential(&self) -> Option<&SessionCredential> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn establish(&mut self, credential: SessionCredential) {
        self.current = Some(credential);
    }

    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}
