use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::profile::{find_profile, Profile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Profile,
    Main,
}

impl Route {
    /// `/main` opens the drawing screen; every other path, including `/`,
    /// lands on profile selection.
    pub fn from_path(path: &str) -> Self {
        let mut parts = path.trim_matches('/').split('/');
        match parts.next() {
            Some("main") => Route::Main,
            _ => Route::Profile,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Profile => "/profile",
            Route::Main => "/main",
        }
    }

    pub fn resolve(self, state: Option<NavState>) -> Result<Destination, NavError> {
        match self {
            Route::Profile => Ok(Destination::Selector),
            Route::Main => {
                let state = state.ok_or(NavError::MissingProfile)?;
                Ok(Destination::Drawing(state.profile()?))
            }
        }
    }
}

/// A screen together with the state it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Selector,
    Drawing(Profile),
}

impl Destination {
    pub fn route(&self) -> Route {
        match self {
            Destination::Selector => Route::Profile,
            Destination::Drawing(_) => Route::Main,
        }
    }

    pub fn nav_state(&self) -> Option<NavState> {
        match self {
            Destination::Selector => None,
            Destination::Drawing(profile) => Some(NavState::for_profile(profile)),
        }
    }
}

/// The screen change that has been scheduled but not mounted yet.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    destination: Option<Destination>,
}

impl PendingNavigation {
    /// Records `destination` as scheduled. Returns false when that same
    /// destination is already waiting, so a double click mounts once.
    pub fn begin(&mut self, destination: Destination) -> bool {
        if self.destination == Some(destination) {
            return false;
        }
        self.destination = Some(destination);
        true
    }

    pub fn finish(&mut self) -> Option<Destination> {
        self.destination.take()
    }

    pub fn is_pending(&self) -> bool {
        self.destination.is_some()
    }
}

/// Transient state attached to a history entry.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub profile_id: u32,
}

impl NavState {
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            profile_id: profile.id,
        }
    }

    pub fn profile(&self) -> Result<Profile, NavError> {
        find_profile(self.profile_id).ok_or(NavError::UnknownProfile(self.profile_id))
    }

    pub fn to_json(&self) -> Result<String, NavError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CATALOG;

    #[test]
    fn parses_paths() {
        assert_eq!(Route::from_path("/main"), Route::Main);
        assert_eq!(Route::from_path("/main/"), Route::Main);
        assert_eq!(Route::from_path("/profile"), Route::Profile);
        assert_eq!(Route::from_path("/"), Route::Profile);
        assert_eq!(Route::from_path(""), Route::Profile);
        assert_eq!(Route::from_path("/mainly"), Route::Profile);
        assert_eq!(Route::from_path("/somewhere/else"), Route::Profile);
    }

    #[test]
    fn main_without_profile_is_rejected() {
        assert!(matches!(
            Route::Main.resolve(None),
            Err(NavError::MissingProfile)
        ));
        assert_eq!(Route::Profile.resolve(None).ok(), Some(Destination::Selector));
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let state = NavState { profile_id: 42 };
        assert!(matches!(
            Route::Main.resolve(Some(state)),
            Err(NavError::UnknownProfile(42))
        ));
    }

    #[test]
    fn nav_state_survives_history_serialization() {
        let destination = Destination::Drawing(CATALOG[2]);
        let json = destination
            .nav_state()
            .expect("drawing carries state")
            .to_json()
            .expect("serialize");
        assert_eq!(json, r#"{"profile_id":3}"#);
        let state = NavState::from_json(&json).expect("deserialize");
        assert_eq!(Route::Main.resolve(Some(state)).ok(), Some(destination));
    }

    #[test]
    fn malformed_state_is_an_error() {
        assert!(matches!(
            NavState::from_json("not json"),
            Err(NavError::InvalidState(_))
        ));
        assert!(Destination::Selector.nav_state().is_none());
    }

    #[test]
    fn repeated_navigation_is_scheduled_once() {
        let mut pending = PendingNavigation::default();
        let drawing = Destination::Drawing(CATALOG[1]);
        assert!(pending.begin(drawing));
        assert!(!pending.begin(drawing));
        assert!(pending.is_pending());
        assert_eq!(pending.finish(), Some(drawing));
        assert!(!pending.is_pending());
        assert!(pending.begin(drawing));
    }

    #[test]
    fn a_different_destination_replaces_the_pending_one() {
        let mut pending = PendingNavigation::default();
        assert!(pending.begin(Destination::Drawing(CATALOG[0])));
        assert!(pending.begin(Destination::Selector));
        assert_eq!(pending.finish(), Some(Destination::Selector));
    }
}
