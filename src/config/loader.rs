//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading
//! [`ZakatSettings`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ZakatSettings;

/// Loads and provides access to the payer's settings.
///
/// # File Format
///
/// ```yaml
/// fiqh: Hanafi
/// nisab_standard: Silver
/// currency: "USD"
/// gold_price_per_gram: "65"
/// silver_price_per_gram: "0.8"
/// ```
///
/// # Example
///
/// ```no_run
/// use zakat_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./settings.yaml").unwrap();
/// println!("Currency: {}", loader.settings().currency);
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: ZakatSettings,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file does not exist
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML for
    /// the settings structure.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let settings =
            serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "loaded settings");

        Ok(Self { settings })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &ZakatSettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> ZakatSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fiqh, NisabStandard};
    use std::io::Write;

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("zakat_settings_{}.yaml", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_settings() {
        let path = write_temp(
            "fiqh: Shafi\n\
             nisab_standard: Gold\n\
             currency: \"PKR\"\n\
             gold_price_per_gram: \"18500\"\n\
             silver_price_per_gram: \"230\"\n",
        );

        let loader = SettingsLoader::load(&path).unwrap();
        let settings = loader.settings();
        assert_eq!(settings.fiqh, Fiqh::Shafi);
        assert_eq!(settings.nisab_standard, NisabStandard::Gold);
        assert_eq!(settings.currency, "PKR");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = SettingsLoader::load("/definitely/missing/settings.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let path = write_temp("fiqh: [unclosed");
        let result = SettingsLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_unknown_fiqh_is_parse_error() {
        let path = write_temp(
            "fiqh: Maliki\n\
             nisab_standard: Gold\n\
             currency: \"USD\"\n\
             gold_price_per_gram: \"65\"\n\
             silver_price_per_gram: \"0.8\"\n",
        );
        let result = SettingsLoader::load(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_file(path).ok();
    }
}
