//! localStorage helpers for state that should survive a reload.
//!
//! Everything here degrades silently: storage can be disabled, full, or
//! holding stale JSON, and none of that should ever break the page. A
//! failed save or load logs a warning and the caller gets the default.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, not saving {key}");
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                log::warn!("failed to save {key} to localStorage");
            }
        }
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}

pub fn load<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(storage) = local_storage() else {
        return T::default();
    };
    match storage.get_item(key) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("discarding corrupt localStorage entry {key}: {e}");
            T::default()
        }),
        _ => T::default(),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn form_key(form_id: &str) -> String {
    format!("form_{form_id}")
}

pub fn save_form_data<T: Serialize>(form_id: &str, data: &T) {
    save(&form_key(form_id), data);
}

pub fn load_form_data<T: DeserializeOwned + Default>(form_id: &str) -> T {
    load(&form_key(form_id))
}

pub fn clear_form_data(form_id: &str) {
    remove(&form_key(form_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keys_are_prefixed() {
        assert_eq!(form_key("contact-inquiry"), "form_contact-inquiry");
    }

    #[test]
    fn form_keys_for_distinct_forms_do_not_collide() {
        assert_ne!(form_key("contact-inquiry"), form_key("affiliate"));
    }
}
