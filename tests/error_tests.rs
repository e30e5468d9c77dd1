// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, response::IntoResponse};
use country_events::error::{AppError, AuthError};

#[test]
fn test_silent_auth_errors() {
    assert!(AuthError::Cancelled.is_silent());
    assert!(AuthError::InProgress.is_silent());
    assert!(!AuthError::ProviderUnavailable("down".to_string()).is_silent());
    assert!(!AuthError::Unknown("boom".to_string()).is_silent());
}

#[test]
fn test_auth_error_maps_to_app_error() {
    assert!(matches!(
        AppError::from(AuthError::Unknown("bad signature".to_string())),
        AppError::InvalidToken
    ));
    assert!(matches!(
        AppError::from(AuthError::ProviderUnavailable("jwks".to_string())),
        AppError::IdentityProvider(_)
    ));
}

#[test]
fn test_error_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (AppError::IncompleteProfile, StatusCode::CONFLICT),
        (
            AppError::IdentityProvider("down".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
        (
            AppError::Database("offline".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}
