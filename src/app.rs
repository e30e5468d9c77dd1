// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client workflow: gesture handlers over the identity gate, the stores,
//! and the screen router.
//!
//! Each gesture awaits at most a short chain of sequential calls. Failures
//! are logged, returned as an error [`Notice`], and leave the screen where
//! it was so the user can retry.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Event, NewEvent, Profile};
use crate::navigation::{self, NavAction, Screen};
use crate::services::{ConsentProvider, EventDirectory, IdentityGate, ProfileStore};
use crate::session::{Session, UserIdentity};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Blocking message shown to the user after a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// What the Events screen displays.
#[derive(Debug, Clone, Default)]
pub struct EventsView {
    pub profile: Option<Profile>,
    pub events: Vec<Event>,
}

impl EventsView {
    pub fn heading(&self) -> String {
        match self.profile.as_ref().and_then(Profile::country) {
            Some(country) => format!("Events in {country}"),
            None => "Events".to_string(),
        }
    }
}

/// One signed-in client: session, current screen and screen data.
pub struct EventsApp<P> {
    gate: IdentityGate<P>,
    profiles: ProfileStore,
    events: EventDirectory,
    session: Session,
    screen: Screen,
    profile_form: Option<Profile>,
    events_view: EventsView,
}

impl<P: ConsentProvider> EventsApp<P> {
    pub fn new(gate: IdentityGate<P>, db: FirestoreDb) -> Self {
        Self {
            gate,
            profiles: ProfileStore::new(db.clone()),
            events: EventDirectory::new(db),
            session: Session::new(),
            screen: Screen::Auth,
            profile_form: None,
            events_view: EventsView::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Stored profile loaded into the editor, if any.
    pub fn profile_form(&self) -> Option<&Profile> {
        self.profile_form.as_ref()
    }

    pub fn events_view(&self) -> &EventsView {
        &self.events_view
    }

    // ─── Gestures ────────────────────────────────────────────────

    /// Sign in and route to `Events` (complete profile) or `Home`.
    pub async fn sign_in(&mut self) -> Option<Notice> {
        if self.screen != Screen::Auth {
            return None;
        }

        let identity = match self.gate.sign_in(&mut self.session).await {
            Ok(identity) => identity,
            Err(e) if e.is_silent() => return None,
            Err(e) => return Some(Notice::error(e.to_string())),
        };

        let profile = match self.profiles.get_profile(&identity).await {
            Ok(profile) => profile,
            Err(e) => {
                // Routing needs the profile; without it stay signed out on Auth.
                self.session.clear();
                return Some(store_failure("Error fetching user data", e));
            }
        };

        let profile_complete = profile.as_ref().is_some_and(Profile::is_complete);
        if profile.is_some() && !profile_complete {
            tracing::warn!(uid = %identity, "Profile has no country; routing to profile editor");
        }

        self.navigate(NavAction::SignedIn { profile_complete });
        match self.screen {
            Screen::Events => self.load_events(&identity).await,
            _ => {
                self.profile_form = profile;
                None
            }
        }
    }

    /// Overwrite the user's profile and continue to the event list.
    pub async fn save_profile(&mut self, profile: Profile) -> Option<Notice> {
        if !navigation::accepts(self.screen, NavAction::ProfileSaved) {
            return None;
        }
        let identity = match self.require_identity() {
            Ok(identity) => identity,
            Err(notice) => return Some(notice),
        };

        if !profile.is_complete() {
            return Some(Notice::error("Please select a country"));
        }

        if let Err(e) = self.profiles.put_profile(&identity, &profile).await {
            return Some(store_failure("Error saving user information", e));
        }

        self.profile_form = Some(profile);
        self.navigate(NavAction::ProfileSaved);
        self.load_events(&identity)
            .await
            .or_else(|| Some(Notice::info("User information saved successfully!")))
    }

    /// Re-open the profile editor from the event list.
    pub async fn open_settings(&mut self) -> Option<Notice> {
        if !navigation::accepts(self.screen, NavAction::OpenSettings) {
            return None;
        }
        let identity = match self.require_identity() {
            Ok(identity) => identity,
            Err(notice) => return Some(notice),
        };

        // Load before navigating so a failed read leaves the event list as it was.
        match self.profiles.get_profile(&identity).await {
            Ok(profile) => {
                self.profile_form = profile;
                self.navigate(NavAction::OpenSettings);
                None
            }
            Err(e) => Some(store_failure("Error fetching user data", e)),
        }
    }

    pub fn open_add_event(&mut self) {
        if navigation::accepts(self.screen, NavAction::OpenAddEvent) {
            self.navigate(NavAction::OpenAddEvent);
        }
    }

    /// Write a new event and return to the event list.
    pub async fn save_event(&mut self, new_event: NewEvent) -> Option<Notice> {
        if !navigation::accepts(self.screen, NavAction::EventSaved) {
            return None;
        }
        let identity = match self.require_identity() {
            Ok(identity) => identity,
            Err(notice) => return Some(notice),
        };

        if let Err(e) = self.events.add_event(&identity, &new_event).await {
            return Some(store_failure("Error saving event", e));
        }

        self.navigate(NavAction::EventSaved);
        self.load_events(&identity)
            .await
            .or_else(|| Some(Notice::info("Event saved successfully!")))
    }

    /// Leave the composer without writing anything.
    pub fn cancel_add_event(&mut self) {
        if navigation::accepts(self.screen, NavAction::CancelAddEvent) {
            self.navigate(NavAction::CancelAddEvent);
        }
    }

    /// Reload the event list for the current profile.
    pub async fn refresh_events(&mut self) -> Option<Notice> {
        if self.screen != Screen::Events {
            return None;
        }
        match self.require_identity() {
            Ok(identity) => self.load_events(&identity).await,
            Err(notice) => Some(notice),
        }
    }

    /// Sign out and return to `Auth`. Screen data is discarded so the next
    /// sign-in starts from scratch.
    pub async fn log_out(&mut self) -> Option<Notice> {
        let result = self.gate.sign_out(&mut self.session).await;

        self.profile_form = None;
        self.events_view = EventsView::default();
        self.navigate(NavAction::LogOut);

        result
            .err()
            .map(|e| Notice::error(format!("Error logging out: {e}")))
    }

    // ─── Helpers ─────────────────────────────────────────────────

    fn navigate(&mut self, action: NavAction) {
        let next = navigation::transition(self.screen, action);
        tracing::debug!(from = ?self.screen, to = ?next, ?action, "Navigate");
        self.screen = next;
    }

    fn require_identity(&self) -> Result<UserIdentity, Notice> {
        self.session
            .identity()
            .cloned()
            .ok_or_else(|| Notice::error("No user is signed in!"))
    }

    async fn load_events(&mut self, identity: &UserIdentity) -> Option<Notice> {
        match self.events.list_events_for(identity).await {
            Ok((profile, events)) => {
                self.events_view = EventsView {
                    profile: Some(profile),
                    events,
                };
                None
            }
            Err(e) => Some(store_failure("Error fetching events", e)),
        }
    }
}

fn store_failure(context: &str, err: AppError) -> Notice {
    tracing::error!(error = %err, "{context}");
    Notice::error(format!("{context}: {err}"))
}
