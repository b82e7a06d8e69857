use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

pub const THEME_STORAGE_KEY: &str = "lepokedex-theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a persisted value, compared exactly. Anything other than the two
    /// known names counts as "nothing stored".
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        match value {
            Some("light") => Some(Theme::Light),
            Some("dark") => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button: shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Durable string key-value storage for the theme flag.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    entries: HashMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The active theme plus the store it is persisted in.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, THEME_STORAGE_KEY)
    }

    /// Reads the stored theme; when none is usable the default is written back.
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = store.read(&key);
        let current = Theme::from_stored(stored.as_deref()).unwrap_or_default();
        let mut preference = Self {
            store,
            key,
            current,
        };
        preference.persist();
        preference
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        debug!("Theme {} -> {}", self.current.as_str(), theme.as_str());
        self.current = theme;
        self.persist();
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.write(&self.key, self.current.as_str()) {
            warn!("Failed to persist theme '{}': {}", self.current.as_str(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharedError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct ReadOnlyStore(Option<String>);

    impl ThemeStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            self.0.clone()
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(SharedError::Storage("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_first_load_defaults_to_light_and_persists() {
        let preference = ThemePreference::load(MemoryThemeStore::new());

        assert_eq!(preference.current(), Theme::Light);
        assert_eq!(
            preference.store().read(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_persists_and_survives_reload() {
        let mut preference = ThemePreference::load(MemoryThemeStore::new());

        assert_eq!(preference.toggle(), Theme::Dark);
        assert_eq!(
            preference.store().read(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );

        let reloaded = ThemePreference::load(preference.into_store());
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_returns_to_light() {
        let mut preference = ThemePreference::load(MemoryThemeStore::new());
        preference.toggle();
        assert_eq!(preference.toggle(), Theme::Light);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("sepia"), None)]
    #[case(Some(" dark "), None)]
    #[case(Some("Dark"), None)]
    #[case(Some("light"), Some(Theme::Light))]
    #[case(Some("dark"), Some(Theme::Dark))]
    fn test_from_stored(#[case] stored: Option<&str>, #[case] expected: Option<Theme>) {
        assert_eq!(Theme::from_stored(stored), expected);
    }

    #[test]
    fn test_unknown_stored_value_is_replaced() {
        let mut store = MemoryThemeStore::new();
        store.write(THEME_STORAGE_KEY, "sepia").unwrap();

        let preference = ThemePreference::load(store);

        assert_eq!(preference.current(), Theme::Light);
        assert_eq!(
            preference.store().read(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_write_failure_still_switches_theme() {
        let mut preference = ThemePreference::load(ReadOnlyStore(Some("dark".to_string())));
        assert_eq!(preference.current(), Theme::Dark);
        assert_eq!(preference.toggle(), Theme::Light);
    }

    #[test]
    fn test_serde_names_match_storage_values() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
