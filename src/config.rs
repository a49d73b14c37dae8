use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub artifacts: ArtifactSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Paths to the serialized model and scaler produced offline.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactSettings {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    #[serde(default = "default_scaler_path")]
    pub scaler_path: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            scaler_path: default_scaler_path(),
        }
    }
}

fn default_model_path() -> String {
    "artifacts/model.json".to_string()
}
fn default_scaler_path() -> String {
    "artifacts/scaler.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HEMOSCAN__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. HEMOSCAN__ARTIFACTS__MODEL_PATH -> artifacts.model_path
            .add_source(
                Environment::with_prefix("HEMOSCAN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HEMOSCAN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let settings: Settings = toml::from_str("[artifacts]").unwrap();
        assert_eq!(settings.artifacts.model_path, "artifacts/model.json");
        assert_eq!(settings.artifacts.scaler_path, "artifacts/scaler.json");
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [artifacts]
            model_path = "/opt/hemoscan/model.json"

            [logging]
            level = "debug"
            format = "pretty"
            "#,
        )
        .unwrap();
        assert_eq!(settings.artifacts.model_path, "/opt/hemoscan/model.json");
        assert_eq!(settings.logging.level, "debug");
    }
}
