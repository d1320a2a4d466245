#[cfg(test)]
mod tests {
    use http_probe::config::{ensure_config_file_exists, generate_default_config_template};
    use http_probe::{ProbeConfig, ProbeError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn generated_template_round_trips_through_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("probe.toml");

        fs::write(&config_path, generate_default_config_template()).unwrap();

        let config = ProbeConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.path, "/invoice/534");
        assert_eq!(config.params.get("currency"), Some(&"EUR".to_string()));
        // The template ships with the seed commented out so default runs
        // stay random
        assert!(config.seed.is_none());
    }

    #[test]
    fn ensure_flow_creates_a_loadable_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir
            .path()
            .join("probe.toml")
            .to_string_lossy()
            .to_string();

        assert!(ensure_config_file_exists(&config_path, true).unwrap());
        assert!(ProbeConfig::load_from_file(&config_path).is_ok());
        assert!(!ensure_config_file_exists(&config_path, true).unwrap());
    }

    #[test]
    fn a_missing_config_is_reported_with_its_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let result = ProbeConfig::load_from_file(&config_path);
        match result {
            Err(ProbeError::ConfigNotFound { path }) => assert_eq!(path, config_path),
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn an_edited_config_must_still_validate() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("probe.toml");

        fs::write(&config_path, "base_url = \"not-a-valid-url\"\n").unwrap();

        let result = ProbeConfig::load_from_file(&config_path);
        assert!(matches!(result, Err(ProbeError::InvalidConfig { .. })));
    }
}
