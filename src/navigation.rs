// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen routing as a pure state machine.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The four screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "app/src/generated/")
)]
pub enum Screen {
    /// Sign-in screen
    #[default]
    Auth,
    /// Profile editor
    Home,
    /// Event list for the user's country
    Events,
    /// Event composer
    AddEvent,
}

/// User actions and call outcomes that drive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Sign-in succeeded. `profile_complete` is true when a profile with a
    /// country code exists for the identity.
    SignedIn { profile_complete: bool },
    ProfileSaved,
    OpenSettings,
    OpenAddEvent,
    EventSaved,
    CancelAddEvent,
    LogOut,
}

/// Compute the next screen. Pairs with no defined transition leave the
/// screen unchanged.
pub fn transition(screen: Screen, action: NavAction) -> Screen {
    use NavAction::*;
    use Screen::*;

    match (screen, action) {
        (_, LogOut) => Auth,
        (Auth, SignedIn { profile_complete: true }) => Events,
        (Auth, SignedIn { profile_complete: false }) => Home,
        (Home, ProfileSaved) => Events,
        (Events, OpenSettings) => Home,
        (Events, OpenAddEvent) => AddEvent,
        (AddEvent, EventSaved | CancelAddEvent) => Events,
        (current, _) => current,
    }
}

/// Whether `action` is meaningful on `screen`.
pub fn accepts(screen: Screen, action: NavAction) -> bool {
    matches!(action, NavAction::LogOut) || transition(screen, action) != screen
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCREENS: [Screen; 4] = [Screen::Auth, Screen::Home, Screen::Events, Screen::AddEvent];

    #[test]
    fn sign_in_routes_on_profile_completeness() {
        assert_eq!(
            transition(Screen::Auth, NavAction::SignedIn { profile_complete: true }),
            Screen::Events
        );
        assert_eq!(
            transition(Screen::Auth, NavAction::SignedIn { profile_complete: false }),
            Screen::Home
        );
    }

    #[test]
    fn logout_always_returns_to_auth() {
        for screen in ALL_SCREENS {
            assert_eq!(transition(screen, NavAction::LogOut), Screen::Auth);
            assert!(accepts(screen, NavAction::LogOut));
        }
    }

    #[test]
    fn add_event_returns_to_events_on_save_or_cancel() {
        assert_eq!(
            transition(Screen::Events, NavAction::OpenAddEvent),
            Screen::AddEvent
        );
        assert_eq!(
            transition(Screen::AddEvent, NavAction::EventSaved),
            Screen::Events
        );
        assert_eq!(
            transition(Screen::AddEvent, NavAction::CancelAddEvent),
            Screen::Events
        );
    }

    #[test]
    fn settings_reopens_profile_editor() {
        assert_eq!(transition(Screen::Events, NavAction::OpenSettings), Screen::Home);
        assert_eq!(transition(Screen::Home, NavAction::ProfileSaved), Screen::Events);
    }

    #[test]
    fn undefined_pairs_are_ignored() {
        assert_eq!(transition(Screen::Auth, NavAction::OpenAddEvent), Screen::Auth);
        assert_eq!(
            transition(Screen::Home, NavAction::SignedIn { profile_complete: true }),
            Screen::Home
        );
        assert_eq!(transition(Screen::AddEvent, NavAction::OpenSettings), Screen::AddEvent);
        assert!(!accepts(Screen::Events, NavAction::EventSaved));
    }
}
