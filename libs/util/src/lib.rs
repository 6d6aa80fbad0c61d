use std::path::Path;

use anyhow::Context;
use toml::{map::Map, Value};
use tracing_subscriber::EnvFilter;

pub static CONFIG_ENV: &str = "GH_ACTIVITY_CONFIG";

pub fn load_config(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let config = std::fs::read_to_string(path).with_context(|| {
        format!("failed to read config {}", path.display())
    })?;

    toml::from_str::<Map<String, Value>>(&config).with_context(|| {
        format!("failed to parse config {}", path.display())
    })
}

/// Loads the file named by `GH_ACTIVITY_CONFIG`, or an empty table when the
/// variable is unset so every key falls back to its default.
pub fn load_config_from_env() -> anyhow::Result<Map<String, Value>> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config(Path::new(&path)),
        None => Ok(Map::new()),
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use serial_test::serial;

    use super::{load_config, load_config_from_env, CONFIG_ENV};

    #[test]
    fn test_load_config() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github]\nbase_url = \"http://localhost:8080\"")
            .unwrap();

        // Act
        let config = load_config(file.path());

        // Assert
        let config = config.unwrap();
        assert_eq!(
            config["github"]["base_url"].as_str(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github\nbase_url = ").unwrap();

        // Act
        let config = load_config(file.path());

        // Assert
        assert!(config.is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config(&dir.path().join("missing.toml"));

        assert!(config.is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_from_env_unset() {
        std::env::remove_var(CONFIG_ENV);

        let config = load_config_from_env();

        assert!(config.unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_load_config_from_env_set() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nlimit = 3").unwrap();
        std::env::set_var(CONFIG_ENV, file.path());

        // Act
        let config = load_config_from_env();
        std::env::remove_var(CONFIG_ENV);

        // Assert
        assert_eq!(config.unwrap()["display"]["limit"].as_integer(), Some(3));
    }

    #[test]
    #[serial]
    fn test_load_config_from_env_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));

        let config = load_config_from_env();
        std::env::remove_var(CONFIG_ENV);

        assert!(config.is_err());
    }
}
