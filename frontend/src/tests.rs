#[cfg(test)]
mod tests {
    use crate::components::footer::version_label;
    use crate::config::{resolve_target, Config, DEFAULT_NOTIFY_ENDPOINT, DEFAULT_TARGET};
    use pretty_assertions::assert_eq;
    use shared::TargetInstant;

    #[test]
    fn test_default_target_is_presentation_start() {
        let expected = TargetInstant::from_local_str(DEFAULT_TARGET).unwrap();
        assert_eq!(resolve_target(None), expected);
    }

    #[test]
    fn test_invalid_target_override_falls_back() {
        assert_eq!(resolve_target(Some("June 15, 2025")), resolve_target(None));
    }

    #[test]
    fn test_target_instant_is_fixed() {
        // The landing page stores it once; every read must agree.
        assert_eq!(Config::target_instant(), Config::target_instant());
        assert_eq!(Config::target_instant(), resolve_target(option_env!("COUNTDOWN_TARGET")));
    }

    #[test]
    fn test_target_override() {
        let target = resolve_target(Some("2030-01-01T00:00:00"));
        assert!(target > resolve_target(None));
    }

    #[test]
    fn test_notify_endpoint_is_https() {
        let endpoint = Config::notify_endpoint();
        assert!(endpoint.starts_with("https://"));
        if option_env!("NOTIFY_ENDPOINT").is_none() {
            assert_eq!(endpoint, DEFAULT_NOTIFY_ENDPOINT);
        }
    }

    #[test]
    fn test_theme_key() {
        assert_eq!(Config::theme_storage_key(), "lepokedex-theme");
    }

    #[test]
    fn test_version_label() {
        let label = version_label();
        assert!(label.starts_with('v'));
        assert!(label.contains('.'));
    }
}
