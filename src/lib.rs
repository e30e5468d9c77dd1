// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Country Events: sign in with Google, register a profile, and share
//! events with people in the same country.
//!
//! This crate provides the HTTP API used by the mobile client, and the
//! client-side workflow (session, screen routing, gesture handlers) that
//! drives it.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod session;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{EventDirectory, GoogleIdTokenVerifier, ProfileStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub profiles: ProfileStore,
    pub events: EventDirectory,
    pub id_token_verifier: Arc<GoogleIdTokenVerifier>,
}

impl AppState {
    pub fn new(config: Config, db: FirestoreDb, id_token_verifier: Arc<GoogleIdTokenVerifier>) -> Self {
        Self {
            config,
            profiles: ProfileStore::new(db.clone()),
            events: EventDirectory::new(db.clone()),
            db,
            id_token_verifier,
        }
    }
}
