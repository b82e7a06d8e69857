use log::warn;
use shared::{TargetInstant, THEME_STORAGE_KEY};

/// Presentation start, local time.
pub const DEFAULT_TARGET: &str = "2025-06-15T09:00:00";

/// `DEFAULT_TARGET` read as UTC, used only if local parsing fails.
const FALLBACK_TARGET_MS: i64 = 1_749_978_000_000;

pub const DEFAULT_NOTIFY_ENDPOINT: &str = "https://formspree.io/f/lepokedex";

pub struct Config;

impl Config {
    // Build-time overrides: COUNTDOWN_TARGET=2025-06-15T09:00:00 NOTIFY_ENDPOINT=... trunk build

    pub fn target_instant() -> TargetInstant {
        resolve_target(option_env!("COUNTDOWN_TARGET"))
    }

    pub fn notify_endpoint() -> String {
        option_env!("NOTIFY_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_NOTIFY_ENDPOINT)
            .to_string()
    }

    pub fn theme_storage_key() -> &'static str {
        THEME_STORAGE_KEY
    }
}

pub fn resolve_target(configured: Option<&str>) -> TargetInstant {
    if let Some(value) = configured {
        match TargetInstant::from_local_str(value) {
            Ok(target) => return target,
            Err(e) => warn!("Ignoring COUNTDOWN_TARGET: {}", e),
        }
    }
    TargetInstant::from_local_str(DEFAULT_TARGET)
        .unwrap_or_else(|_| TargetInstant::from_millis(FALLBACK_TARGET_MS))
}
