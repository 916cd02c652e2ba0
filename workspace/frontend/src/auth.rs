//! Authentication state: the provider component, startup auto-resume,
//! and login/logout sequencing.

use std::cell::RefCell;
use std::rc::Rc;

use common::{ClaimsPayload, UserDirectory, UserRecord, decode_token, encode_token};
use yew::prelude::*;

use crate::storage::{DirectoryStore, SessionStore};

/// Shared authentication state handed down through the component tree.
#[derive(Clone)]
pub struct AuthContext {
    pub current_user: Option<UserRecord>,
    /// Mock user table; mutated by signup, read by every auth page.
    pub directory: Rc<RefCell<UserDirectory>>,
    set_user: Callback<Option<UserRecord>>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.current_user == other.current_user && Rc::ptr_eq(&self.directory, &other.directory)
    }
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Attempts a login. On a credential match the token is issued and
    /// stored per the remember flag; on a mismatch nothing changes and
    /// the caller surfaces the error inline.
    pub fn login(&self, email: &str, password: &str, remember: bool) -> bool {
        let user = match self.directory.borrow().verify_credentials(email, password) {
            Some(user) => user.clone(),
            None => {
                log::info!("Rejected login for {}", email);
                return false;
            }
        };

        let token = encode_token(&ClaimsPayload::issue(&user, common::now_ms()));
        if let Err(err) = SessionStore.save(&token, remember) {
            log::error!("Failed to store session token: {:?}", err);
        }
        log::info!("User {} logged in", user.email);
        self.set_user.emit(Some(user));
        true
    }

    /// Clears the stored token and the in-memory session. Idempotent;
    /// the dashboard's timers stop when it unmounts on the resulting
    /// redirect.
    pub fn logout(&self) {
        SessionStore.clear();
        if self.current_user.is_some() {
            log::info!("Logged out");
        }
        self.set_user.emit(None);
    }
}

/// The persisted directory snapshot, falling back to the seeded
/// default when none exists.
fn initial_directory() -> UserDirectory {
    match DirectoryStore.load() {
        Some(directory) => {
            log::debug!("Hydrated {} user(s) from snapshot", directory.len());
            directory
        }
        None => UserDirectory::seeded(),
    }
}

/// Resolves a stored token into a live session; anything stale or
/// unresolvable is cleared so the next visit starts clean.
fn resume_session(directory: &UserDirectory) -> Option<UserRecord> {
    let token = SessionStore.load()?;
    match decode_token(&token).and_then(|claims| directory.find_by_id(claims.id).cloned()) {
        Some(user) => {
            log::info!("Resumed session for {}", user.email);
            Some(user)
        }
        None => {
            log::debug!("Clearing stale session token");
            SessionStore.clear();
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let directory = use_mut_ref(initial_directory);
    let current_user = {
        let directory = directory.clone();
        use_state(move || resume_session(&directory.borrow()))
    };

    let set_user = {
        let current_user = current_user.clone();
        Callback::from(move |user: Option<UserRecord>| current_user.set(user))
    };

    let context = AuthContext {
        current_user: (*current_user).clone(),
        directory,
        set_user,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
