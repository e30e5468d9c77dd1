// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google sign-in routes.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::Result;
use crate::middleware::auth::SESSION_COOKIE;
use crate::models::Profile;
use crate::navigation::{self, NavAction, Screen};
use crate::services::exchange_id_token;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/google", post(google_sign_in))
        .route("/auth/logout", post(logout))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInRequest {
    /// ID token returned by Google Sign-In on the device
    id_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub struct SignInResponse {
    /// Session JWT (also set as a cookie)
    pub token: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Provider display name, for pre-filling a new profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Where the client should navigate next
    pub next_screen: Screen,
}

/// Exchange a Google ID token for a session and decide the first screen.
async fn google_sign_in(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(body): Json<GoogleSignInRequest>,
) -> Result<(CookieJar, Json<SignInResponse>)> {
    let credential = exchange_id_token(
        &state.id_token_verifier,
        &state.config.jwt_signing_key,
        &body.id_token,
    )
    .await?;

    // Routing is decided from a fresh read on every sign-in.
    let profile = state.profiles.get_profile(&credential.identity).await?;
    let profile_complete = profile.as_ref().is_some_and(Profile::is_complete);
    let next_screen = navigation::transition(Screen::Auth, NavAction::SignedIn { profile_complete });

    tracing::info!(
        uid = %credential.identity,
        has_profile = profile.is_some(),
        ?next_screen,
        "Google sign-in successful"
    );

    let cookie = Cookie::build((SESSION_COOKIE, credential.token.clone()))
        .path("/")
        .http_only(true)
        .secure(state.config.frontend_url.starts_with("https://"))
        .same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(SignInResponse {
            token: credential.token,
            user_id: credential.identity.to_string(),
            email: credential.email,
            display_name: credential.display_name,
            next_screen,
        }),
    ))
}

/// Logout - clears the session cookie. Clients holding a bearer token
/// simply discard it.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        StatusCode::NO_CONTENT,
    )
}
