//! Platform configuration parsing and validation
//!
//! The configuration file is JSON with camelCase keys. Validation is
//! best-effort: problems are reported per entry through the platform logger
//! and never block reconciliation.

use std::path::Path;

use airbridge_core::device::DeviceConfig;
use airbridge_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger::PlatformLogger;

/// Default refresh interval in seconds (1 hour).
pub const DEFAULT_REFRESH_RATE: u64 = 3600;

/// Raw platform configuration as loaded from disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Platform display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Configured forecast locations
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,

    /// Forecast refresh interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<u64>,

    /// Logging verbosity label; the value consulted by level resolution
    /// lives under `options`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PlatformOptions>,
}

/// Optional overrides, nested under `options` in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<u64>,

    /// Skip display-name cleanup and keep raw values
    #[serde(default)]
    pub allow_invalid_characters: bool,
}

/// Validated, defaulted runtime configuration. Read-only after
/// initialization.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub name: Option<String>,
    pub devices: Vec<DeviceConfig>,
    pub refresh_rate: u64,
    /// Resolved logging label, for reporting only
    pub logging: String,
    pub allow_invalid_characters: bool,
}

impl PlatformConfig {
    /// Load a platform configuration from a JSON file.
    ///
    /// A missing or malformed file is fatal; everything past this boundary
    /// is a diagnostic.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config_not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::config_invalid(format!("{}: {e}", path.display())))
    }

    /// The logging value consulted by level resolution.
    pub fn logging_selection(&self) -> Option<&str> {
        self.options.as_ref()?.logging.as_deref()
    }

    /// The effective refresh override, options first.
    pub fn refresh_selection(&self) -> Option<u64> {
        self.options
            .as_ref()
            .and_then(|o| o.refresh_rate)
            .or(self.refresh_rate)
    }

    pub fn allow_invalid_characters(&self) -> bool {
        self.options
            .as_ref()
            .is_some_and(|o| o.allow_invalid_characters)
    }

    /// Best-effort validation producing the runtime view.
    ///
    /// Missing credentials and an empty device list are reported and the
    /// entries are passed through anyway; an entry with missing fields
    /// reconciles under an incomplete identity.
    pub fn verify(&self, log: &PlatformLogger) -> EffectiveConfig {
        let refresh_rate = match self.refresh_selection() {
            Some(rate) => rate,
            None => {
                log.info("Using Default Refresh Rate of 1 hour");
                DEFAULT_REFRESH_RATE
            }
        };

        if self.devices.is_empty() {
            log.error("No Device Config");
        }
        for device in &self.devices {
            if device.api_key.as_deref().unwrap_or_default().is_empty() {
                log.error(format!(
                    "Missing AirNow ApiKey for {}",
                    device.location_name
                ));
            }
            if device.zip_code.as_deref().unwrap_or_default().is_empty() {
                log.error(format!("Missing Zip Code for {}", device.location_name));
            }
        }

        let logging = self
            .logging_selection()
            .or(self.logging.as_deref())
            .unwrap_or("standard")
            .to_string();

        EffectiveConfig {
            name: self.name.clone(),
            devices: self.devices.clone(),
            refresh_rate,
            logging,
            allow_invalid_characters: self.allow_invalid_characters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use airbridge_core::level::PlatformLogging;

    use super::*;

    fn quiet_logger() -> PlatformLogger {
        PlatformLogger::new(PlatformLogging::None)
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "name": "Air",
            "devices": [
                { "locationName": "Denver", "apiKey": "K1", "zipCode": "80202" },
                { "locationName": "Boulder", "apiKey": "K1", "zipCode": "80301", "delete": true }
            ],
            "refreshRate": 1800,
            "logging": "standard",
            "options": { "logging": "debug", "allowInvalidCharacters": true }
        }"#;

        let config: PlatformConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.refresh_rate, Some(1800));
        assert_eq!(config.logging_selection(), Some("debug"));
        assert!(config.allow_invalid_characters());
        assert!(config.devices[1].delete);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        assert!(config.devices.is_empty());
        assert!(config.logging_selection().is_none());
        assert!(!config.allow_invalid_characters());
    }

    #[test]
    fn test_options_refresh_override_wins() {
        let json = r#"{ "refreshRate": 1800, "options": { "refreshRate": 600 } }"#;
        let config: PlatformConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.refresh_selection(), Some(600));
    }

    #[test]
    fn test_verify_applies_refresh_default() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        let effective = config.verify(&quiet_logger());
        assert_eq!(effective.refresh_rate, DEFAULT_REFRESH_RATE);
        assert_eq!(effective.logging, "standard");
    }

    #[test]
    fn test_verify_keeps_incomplete_devices() {
        let json = r#"{ "devices": [ { "locationName": "Denver" } ] }"#;
        let config: PlatformConfig = serde_json::from_str(json).unwrap();
        let effective = config.verify(&quiet_logger());
        // Diagnostics only; the entry still reaches reconciliation
        assert_eq!(effective.devices.len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = PlatformConfig::load(Path::new("/nonexistent/airbridge.json")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "devices": [ { "locationName": "Denver", "apiKey": "K1", "zipCode": "80202" } ] }"#,
        )
        .unwrap();

        let config = PlatformConfig::load(&path).unwrap();
        assert_eq!(config.devices.len(), 1);
        assert_eq!(config.devices[0].location_name, "Denver");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = PlatformConfig::load(&path).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("config.json"));
    }
}
