//! Configured forecast locations

use serde::{Deserialize, Serialize};

use crate::identity::{accessory_identity, AccessoryIdentity};

/// One user-declared forecast location
///
/// Entries come from the platform configuration file, which uses camelCase
/// keys. An entry is immutable for the duration of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    /// Human-readable label for the location
    pub location_name: String,

    /// Credential for the AirNow forecast source
    ///
    /// Optional at the type level: a missing credential is a validation
    /// diagnostic, not a parse failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Zip code the forecast is looked up by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// Firmware revision override for the accessory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<String>,

    /// Marks the entry for removal instead of maintenance
    #[serde(default)]
    pub delete: bool,
}

impl DeviceConfig {
    /// The seed string the accessory identity is derived from.
    ///
    /// Absent fields contribute the empty string, so an incomplete entry
    /// still yields a stable (if degenerate) identity.
    pub fn identity_seed(&self) -> String {
        format!(
            "{}{}{}",
            self.location_name,
            self.api_key.as_deref().unwrap_or_default(),
            self.zip_code.as_deref().unwrap_or_default()
        )
    }

    /// Stable identity of this entry, the join key against the accessory
    /// cache.
    pub fn identity(&self) -> AccessoryIdentity {
        accessory_identity(
            &self.location_name,
            self.api_key.as_deref().unwrap_or_default(),
            self.zip_code.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_entry() {
        let json = r#"{
            "locationName": "Denver",
            "apiKey": "K1",
            "zipCode": "80202",
            "firmware": "1.2.0"
        }"#;

        let device: DeviceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(device.location_name, "Denver");
        assert_eq!(device.api_key.as_deref(), Some("K1"));
        assert_eq!(device.zip_code.as_deref(), Some("80202"));
        assert_eq!(device.firmware.as_deref(), Some("1.2.0"));
        assert!(!device.delete);
    }

    #[test]
    fn test_parse_device_entry_minimal() {
        // Only the location name is required at the type level
        let device: DeviceConfig = serde_json::from_str(r#"{"locationName": "Boulder"}"#).unwrap();
        assert_eq!(device.location_name, "Boulder");
        assert!(device.api_key.is_none());
        assert!(device.zip_code.is_none());
        assert!(device.firmware.is_none());
        assert!(!device.delete);
    }

    #[test]
    fn test_parse_device_entry_delete() {
        let device: DeviceConfig =
            serde_json::from_str(r#"{"locationName": "Denver", "delete": true}"#).unwrap();
        assert!(device.delete);
    }

    #[test]
    fn test_identity_seed_concatenation() {
        let device: DeviceConfig = serde_json::from_str(
            r#"{"locationName": "Denver", "apiKey": "K1", "zipCode": "80202"}"#,
        )
        .unwrap();
        assert_eq!(device.identity_seed(), "DenverK180202");
    }

    #[test]
    fn test_identity_seed_with_missing_fields() {
        let device: DeviceConfig = serde_json::from_str(r#"{"locationName": "Denver"}"#).unwrap();
        assert_eq!(device.identity_seed(), "Denver");
    }

    #[test]
    fn test_identity_matches_component_derivation() {
        let device: DeviceConfig = serde_json::from_str(
            r#"{"locationName": "Denver", "apiKey": "K1", "zipCode": "80202"}"#,
        )
        .unwrap();
        assert_eq!(device.identity(), accessory_identity("Denver", "K1", "80202"));
    }
}
