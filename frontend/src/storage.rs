use gloo_storage::{LocalStorage, Storage};
use log::warn;
use shared::theme::THEME_ATTRIBUTE;
use shared::{Result, SharedError, Theme, ThemeStore};

/// `localStorage` with raw string values, so the stored theme reads as
/// `light`/`dark` rather than a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SharedError::Storage(format!("{:?}", e)))
    }
}

/// Sets `data-theme` on `<html>`.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        warn!("No document element to apply theme '{}'", theme.as_str());
        return;
    };

    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        warn!("Failed to apply theme '{}': {:?}", theme.as_str(), e);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::ThemePreference;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const KEY: &str = "lepokedex-theme-test";

    fn applied_theme() -> Option<String> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
    }

    #[wasm_bindgen_test]
    fn test_theme_round_trip_through_local_storage() {
        LocalStorage::delete(KEY);

        let mut preference = ThemePreference::load_with_key(LocalThemeStore, KEY);
        apply_theme(preference.current());
        assert_eq!(LocalThemeStore.read(KEY).as_deref(), Some("light"));
        assert_eq!(applied_theme().as_deref(), Some("light"));

        apply_theme(preference.toggle());
        assert_eq!(LocalThemeStore.read(KEY).as_deref(), Some("dark"));
        assert_eq!(applied_theme().as_deref(), Some("dark"));

        let reloaded = ThemePreference::load_with_key(LocalThemeStore, KEY);
        assert_eq!(reloaded.current(), Theme::Dark);

        LocalStorage::delete(KEY);
    }

    #[wasm_bindgen_test]
    fn test_stored_value_is_raw_string() {
        let mut store = LocalThemeStore;
        store.write(KEY, "dark").unwrap();

        // Not JSON-quoted, so other scripts on the page read the same value.
        assert_eq!(LocalStorage::raw().get_item(KEY).unwrap().as_deref(), Some("dark"));

        LocalStorage::delete(KEY);
    }
}
