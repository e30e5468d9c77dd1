// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use country_events::config::Config;
use country_events::db::FirestoreDb;
use country_events::error::AuthError;
use country_events::routes::create_router;
use country_events::services::{ConsentProvider, GoogleIdTokenVerifier};
use country_events::AppState;
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

pub const TEST_KID: &str = "test-google-kid";
pub const TEST_ID_TOKEN_SECRET: &[u8] = b"test-google-id-token-secret";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// ID token verifier that trusts a single HS256 test key.
#[allow(dead_code)]
pub fn test_verifier(config: &Config) -> Arc<GoogleIdTokenVerifier> {
    Arc::new(
        GoogleIdTokenVerifier::new_with_static_key(
            config,
            TEST_KID,
            Algorithm::HS256,
            DecodingKey::from_secret(TEST_ID_TOKEN_SECRET),
        )
        .expect("static verifier"),
    )
}

/// Create a Google-style ID token for `sub` accepted by [`test_verifier`].
#[allow(dead_code)]
pub fn google_id_token(config: &Config, sub: &str) -> String {
    #[derive(Serialize)]
    struct Claims<'a> {
        iss: &'a str,
        aud: &'a str,
        sub: &'a str,
        email: String,
        name: String,
        exp: u64,
        iat: u64,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        iss: "https://accounts.google.com",
        aud: &config.google_client_id,
        sub,
        email: format!("{sub}@example.com"),
        name: format!("Test {sub}"),
        exp: now + 3600,
        iat: now,
    };

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(TEST_KID.to_string());
    encode(&header, &claims, &EncodingKey::from_secret(TEST_ID_TOKEN_SECRET)).unwrap()
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_db(FirestoreDb::new_in_memory())
}

#[allow(dead_code)]
pub fn create_test_app_with_db(db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let verifier = test_verifier(&config);
    let state = Arc::new(AppState::new(config, db, verifier));

    (create_router(state.clone()), state)
}

/// Consent provider that replays scripted outcomes.
///
/// Clones share state, so a test can keep one to inspect calls.
#[allow(dead_code)]
#[derive(Clone)]
pub struct ScriptedConsent {
    inner: Arc<ScriptState>,
}

#[allow(dead_code)]
struct ScriptState {
    outcomes: Mutex<VecDeque<Result<String, AuthError>>>,
    sign_outs: AtomicUsize,
    fail_sign_out: bool,
}

#[allow(dead_code)]
impl ScriptedConsent {
    pub fn new(outcomes: impl IntoIterator<Item = Result<String, AuthError>>) -> Self {
        Self::build(outcomes, false)
    }

    pub fn with_failing_sign_out(
        outcomes: impl IntoIterator<Item = Result<String, AuthError>>,
    ) -> Self {
        Self::build(outcomes, true)
    }

    fn build(
        outcomes: impl IntoIterator<Item = Result<String, AuthError>>,
        fail_sign_out: bool,
    ) -> Self {
        Self {
            inner: Arc::new(ScriptState {
                outcomes: Mutex::new(outcomes.into_iter().collect()),
                sign_outs: AtomicUsize::new(0),
                fail_sign_out,
            }),
        }
    }

    pub fn sign_out_count(&self) -> usize {
        self.inner.sign_outs.load(Ordering::SeqCst)
    }
}

impl ConsentProvider for ScriptedConsent {
    async fn request_id_token(&self) -> Result<String, AuthError> {
        let next = self.inner.outcomes.lock().unwrap().pop_front();
        next.unwrap_or(Err(AuthError::Cancelled))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.inner.sign_outs.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_sign_out {
            Err(AuthError::ProviderUnavailable("offline".to_string()))
        } else {
            Ok(())
        }
    }
}
