//! Browser storage wrappers for the session token and the user
//! directory snapshot.

use common::UserDirectory;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Token key, identical in both storage areas.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// localStorage key for the persisted user directory snapshot.
pub const USERS_DB_KEY: &str = "usersDB";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Keeps the session token in exactly one browser storage area:
/// localStorage survives the tab ("remember me"), sessionStorage does
/// not.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    /// Saves the token durably or tab-scoped. Never writes both areas.
    pub fn save(&self, token: &str, persistent: bool) -> Result<(), JsValue> {
        let storage = if persistent {
            local_storage()
        } else {
            session_storage()
        };
        match storage {
            Some(storage) => storage.set_item(AUTH_TOKEN_KEY, token),
            None => Err(JsValue::from_str("browser storage unavailable")),
        }
    }

    /// Loads the token; the durable copy wins when both exist.
    pub fn load(&self) -> Option<String> {
        local_storage()
            .and_then(|s| s.get_item(AUTH_TOKEN_KEY).ok().flatten())
            .or_else(|| session_storage().and_then(|s| s.get_item(AUTH_TOKEN_KEY).ok().flatten()))
    }

    /// Removes the token from both areas. Idempotent.
    pub fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

/// Persists the mock user table across visits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryStore;

impl DirectoryStore {
    pub fn save(&self, directory: &UserDirectory) -> Result<(), JsValue> {
        match local_storage() {
            Some(storage) => storage.set_item(USERS_DB_KEY, &directory.to_json()),
            None => Err(JsValue::from_str("browser storage unavailable")),
        }
    }

    /// Loads the snapshot, if one was ever written and still parses.
    pub fn load(&self) -> Option<UserDirectory> {
        let json = local_storage()?.get_item(USERS_DB_KEY).ok().flatten()?;
        UserDirectory::from_json(&json)
    }
}
