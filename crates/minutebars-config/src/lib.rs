//! Configuration management.

mod settings;

pub use settings::{AppConfig, LoggingConfig, OutputSettings, PreviewSettings, SessionSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from an optional file and the environment.
///
/// A missing file falls back to defaults; `MINUTEBARS__SESSION__SEED=7`
/// style variables override file values.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("MINUTEBARS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minutebars.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[session]\ndate = \"2024-03-01\"\nstart_price = 42.5\n\n[preview]\nrows = 3").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.session.date, "2024-03-01");
        assert_eq!(config.session.start_price, 42.5);
        assert_eq!(config.session.sigma, 0.0018);
        assert_eq!(config.preview.rows, 3);
        assert_eq!(config.preview.width, 140);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.session, SessionSettings::default());
    }
}
