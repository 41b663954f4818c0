//! Preference store backed by localStorage.
//!
//! A single namespaced key holds the JSON-serialized preference
//! subset; it is read once at startup and written on every relevant
//! mutation.

use contracts::system::auth::StoredPreferences;
use web_sys::window;

const STORAGE_KEY: &str = "business-dashboard-storage";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Restore preferences; None when absent or unreadable
pub fn load_preferences() -> Option<StoredPreferences> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(e) => {
            log::warn!("Stored preferences are unreadable, resetting: {}", e);
            None
        }
    }
}

/// Persist preferences; storage errors are ignored
pub fn save_preferences(prefs: &StoredPreferences) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(prefs) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}
