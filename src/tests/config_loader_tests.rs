#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::loader::{
        CONFIG_ENV_VAR, ConfigError, get_config_file_path, load_config_from_path,
        save_config_to_path,
    };
    use crate::config::{Config, Preferences};
    use crate::state::{Level, Theme};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // Helper function to create a test config path
    fn create_test_config_path() -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("test_config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_load_nonexistent_config() {
        let (_temp_dir, config_path) = create_test_config_path();

        // Loading a non-existent config should create a default one
        let config = load_config_from_path(&config_path).expect("Failed to load default config");

        assert!(config_path.exists(), "Config file should have been created");
        assert_eq!(config, Config::default());
        assert_eq!(config.preferences.theme, Theme::Light);
        assert_eq!(config.preferences.level, Level::Easy);
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp_dir, config_path) = create_test_config_path();

        let config = Config {
            preferences: Preferences {
                theme: Theme::Dark,
                level: Level::Hard,
            },
        };
        save_config_to_path(&config, &config_path).expect("Failed to save config");

        let contents = fs::read_to_string(&config_path).expect("Failed to read saved config");
        assert!(contents.contains("theme = \"dark\""));
        assert!(contents.contains("level = 2"));

        let loaded_config = load_config_from_path(&config_path).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_malformed_config() {
        let (temp_dir, _) = create_test_config_path();
        let config_path = temp_dir.path().join("broken.toml");

        fs::write(&config_path, "invalid toml content ! @ #")
            .expect("Failed to write invalid config");

        match load_config_from_path(&config_path) {
            Err(ConfigError::Parse(_)) => {}
            Ok(_) => panic!("Expected error when loading invalid config"),
            Err(e) => panic!("Unexpected error type: {e:?}"),
        }
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let (temp_dir, _) = create_test_config_path();

        let level_path = temp_dir.path().join("level.toml");
        fs::write(&level_path, "[preferences]\nlevel = 3\n").expect("Failed to write config");
        assert!(matches!(
            load_config_from_path(&level_path),
            Err(ConfigError::Parse(_))
        ));

        let theme_path = temp_dir.path().join("theme.toml");
        fs::write(&theme_path, "[preferences]\ntheme = \"sepia\"\n")
            .expect("Failed to write config");
        assert!(matches!(
            load_config_from_path(&theme_path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_partial_config() {
        let (temp_dir, _) = create_test_config_path();
        let config_path = temp_dir.path().join("partial.toml");

        // Only the theme is set, the level falls back to its default
        let partial_config = r#"
            [preferences]
            theme = "dark"
        "#;
        fs::write(&config_path, partial_config).expect("Failed to write partial config");

        let loaded_config = load_config_from_path(&config_path).expect("Failed to load partial config");
        assert_eq!(loaded_config.preferences.theme, Theme::Dark);
        assert_eq!(loaded_config.preferences.level, Level::Easy);

        // An empty file is a valid, fully default config
        fs::write(&config_path, "").expect("Failed to write empty config");
        let empty_config = load_config_from_path(&config_path).expect("Failed to load empty config");
        assert_eq!(empty_config, Config::default());
    }

    #[test]
    fn test_config_env_var_override() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("override_config.toml");

        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, config_path.to_str().unwrap());
        }

        assert_eq!(get_config_file_path(), config_path);

        unsafe {
            std::env::remove_var(CONFIG_ENV_VAR);
        }
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(err.to_string().starts_with("config file I/O failed"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
