// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity gate: federated sign-in and sign-out.
//!
//! The interactive consent screen is owned by the UI layer and reached
//! through [`ConsentProvider`]. The gate turns the provider's ID token into
//! a local session credential.

use crate::error::AuthError;
use crate::middleware::auth::create_jwt;
use crate::services::google_oidc::{GoogleIdTokenVerifier, OidcError};
use crate::session::{Session, SessionCredential, UserIdentity};
use std::future::Future;
use std::sync::Arc;

/// Interactive sign-in surface of the federated identity provider.
pub trait ConsentProvider: Send + Sync {
    /// Show the consent flow and return the provider's ID token.
    fn request_id_token(&self) -> impl Future<Output = Result<String, AuthError>> + Send;

    /// End the provider-side session.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}

impl From<OidcError> for AuthError {
    fn from(err: OidcError) -> Self {
        match err {
            OidcError::Forbidden(msg) => AuthError::Unknown(msg),
            OidcError::Transient(msg) => AuthError::ProviderUnavailable(msg),
        }
    }
}

/// Verify a provider ID token and mint a session JWT for it.
pub async fn exchange_id_token(
    verifier: &GoogleIdTokenVerifier,
    signing_key: &[u8],
    id_token: &str,
) -> Result<SessionCredential, AuthError> {
    let verified = verifier.verify_id_token(id_token).await?;
    let identity = UserIdentity::new(verified.subject);

    let token = create_jwt(&identity, signing_key)
        .map_err(|e| AuthError::Unknown(format!("session token creation failed: {e}")))?;

    Ok(SessionCredential {
        identity,
        token,
        email: verified.email,
        display_name: verified.name,
    })
}

/// Wraps the consent provider and the token exchange.
pub struct IdentityGate<P> {
    provider: P,
    verifier: Arc<GoogleIdTokenVerifier>,
    signing_key: Vec<u8>,
}

impl<P: ConsentProvider> IdentityGate<P> {
    pub fn new(provider: P, verifier: Arc<GoogleIdTokenVerifier>, signing_key: Vec<u8>) -> Self {
        Self {
            provider,
            verifier,
            signing_key,
        }
    }

    /// Run the sign-in flow and populate `session` on success.
    ///
    /// On any error the session is left untouched.
    pub async fn sign_in(&self, session: &mut Session) -> Result<UserIdentity, AuthError> {
        match self.obtain_credential().await {
            Ok(credential) => {
                let identity = credential.identity.clone();
                tracing::info!(uid = %identity, "User signed in");
                session.establish(credential);
                Ok(identity)
            }
            Err(e) => {
                match &e {
                    AuthError::Cancelled => tracing::debug!("Sign-in cancelled by user"),
                    AuthError::InProgress => tracing::debug!("Sign-in already in progress"),
                    AuthError::ProviderUnavailable(msg) => {
                        tracing::warn!(error = %msg, "Identity provider unavailable")
                    }
                    AuthError::Unknown(msg) => tracing::error!(error = %msg, "Sign-in failed"),
                }
                Err(e)
            }
        }
    }

    async fn obtain_credential(&self) -> Result<SessionCredential, AuthError> {
        let id_token = self.provider.request_id_token().await?;
        exchange_id_token(&self.verifier, &self.signing_key, &id_token).await
    }

    /// Sign out with the provider and clear the local session.
    ///
    /// The local session is cleared even when the provider call fails.
    pub async fn sign_out(&self, session: &mut Session) -> Result<(), AuthError> {
        let uid = session.identity().map(ToString::to_string);
        let result = self.provider.sign_out().await;
        session.clear();

        match &result {
            Ok(()) => tracing::info!(uid = ?uid, "User signed out"),
            Err(e) => tracing::warn!(uid = ?uid, error = %e, "Provider sign-out failed"),
        }
        result
    }
}
