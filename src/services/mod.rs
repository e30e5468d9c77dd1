// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod events;
pub mod google_oidc;
pub mod identity;
pub mod profile;

pub use events::EventDirectory;
pub use google_oidc::{GoogleIdTokenVerifier, OidcError, VerifiedIdentity};
pub use identity::{exchange_id_token, ConsentProvider, IdentityGate};
pub use profile::ProfileStore;
