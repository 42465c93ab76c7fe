//! Browser `localStorage` access: session token, signed-in user, theme and
//! configuration overrides.

use shared::config::StorageKeys;
use shared::{DashboardConfig, SessionStore};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Could not write {} to local storage", key);
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Defaults plus whatever the user saved in local storage
pub fn load_config() -> DashboardConfig {
    let config = DashboardConfig::default();
    match get_item(&config.storage_keys.api_base_url) {
        Some(url) => config.with_api_base_url(&url),
        None => config,
    }
}

/// Session data the login page leaves behind
#[derive(Clone, PartialEq)]
pub struct BrowserSession {
    keys: StorageKeys,
}

impl BrowserSession {
    pub fn new(keys: StorageKeys) -> Self {
        Self { keys }
    }

    /// Identifier the user signed in with
    pub fn logged_user(&self) -> Option<String> {
        get_item(&self.keys.logged_user)
    }

    pub fn has_token(&self) -> bool {
        self.token().map(|t| !t.trim().is_empty()).unwrap_or(false)
    }

    /// Forget everything about the session (logout)
    pub fn clear_all(&self) {
        remove_item(&self.keys.logged_user);
        remove_item(&self.keys.auth_token);
    }
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        get_item(&self.keys.auth_token)
    }

    fn clear_token(&self) {
        remove_item(&self.keys.auth_token);
    }
}
