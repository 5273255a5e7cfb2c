// Session store - the authenticated identity for this run
//
// An in-memory slot: empty at startup, filled by a successful login, emptied
// by logout. Routing reads nothing else, so there is no separate
// "authenticated" flag that could drift from it. Nothing is written to disk;
// restarting the program logs the user out.

use crate::identity::Profile;
use crate::obfuscation::derive_id;

/// Who is logged in and which class they chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub access_token: String,
    pub email: String,
    pub display_name: Option<String>,
    pub class_id: String,
    /// Obfuscated email the data API expects alongside the plain one
    pub derived_id: String,
}

impl Identity {
    /// Build an identity from a user-info profile and the chosen class
    pub fn from_profile(access_token: impl Into<String>, profile: Profile, class_id: impl Into<String>) -> Self {
        let derived_id = derive_id(&profile.email);
        Self {
            access_token: access_token.into(),
            email: profile.email,
            display_name: profile.name,
            class_id: class_id.into(),
            derived_id,
        }
    }

    /// Greeting name, falling back to "User"
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("User")
    }
}

/// Screen the shell should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

/// Holds the current identity, if any
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identity, replacing any previous one
    pub fn login(&mut self, identity: Identity) {
        tracing::info!(email = %identity.email, class = %identity.class_id, "Logged in");
        self.current = Some(identity);
    }

    /// Clear the identity; a no-op when already logged out
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(email = %identity.email, "Logged out");
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Route derived from the identity slot alone
    pub fn route(&self) -> Route {
        match self.current {
            Some(_) => Route::Home,
            None => Route::Login,
        }
    }
}
