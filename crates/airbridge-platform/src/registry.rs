//! Accessory records and the host registry contract

use airbridge_core::device::DeviceConfig;
use airbridge_core::identity::AccessoryIdentity;
use airbridge_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Context stored with every accessory.
///
/// Holds the last-seen device entry plus the fields the accessory
/// information service exposes. The host persists this alongside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryContext {
    /// The device entry that produced this accessory, as last reconciled
    pub device: DeviceConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_revision: Option<String>,
}

/// A registered accessory as persisted by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryRecord {
    /// Stable join key against the configured device list
    pub identity: AccessoryIdentity,

    /// User-visible accessory name, already cleaned
    pub display_name: String,

    pub context: AccessoryContext,
}

/// The host runtime capability set.
///
/// Calls are synchronous, at-most-once side effects issued from within a
/// reconciliation pass; the host's registry is the durable source of truth
/// across restarts.
pub trait AccessoryRegistry {
    /// Persist newly created accessories.
    fn register(&mut self, records: &[AccessoryRecord]) -> Result<()>;

    /// Remove retired accessories from the durable registry.
    fn unregister(&mut self, records: &[AccessoryRecord]) -> Result<()>;

    /// Persist mutated accessory records.
    fn update(&mut self, records: &[AccessoryRecord]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_roundtrip_uses_camel_case() {
        let device: DeviceConfig = serde_json::from_str(
            r#"{"locationName": "Denver", "apiKey": "K1", "zipCode": "80202"}"#,
        )
        .unwrap();
        let record = AccessoryRecord {
            identity: device.identity(),
            display_name: "Denver".to_string(),
            context: AccessoryContext {
                device,
                serial_number: Some("80202".to_string()),
                model: Some("Forecast by Zip Code".to_string()),
                firmware_revision: Some("0.1.0".to_string()),
            },
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"displayName\""));
        assert!(json.contains("\"serialNumber\""));
        assert!(json.contains("\"firmwareRevision\""));
        assert!(json.contains("\"locationName\""));

        let back: AccessoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_parses_with_sparse_context() {
        let json = r#"{
            "identity": "8c1f9d1e-2c3b-5a4d-9e8f-7a6b5c4d3e2f",
            "displayName": "Denver",
            "context": { "device": { "locationName": "Denver" } }
        }"#;
        let record: AccessoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name, "Denver");
        assert!(record.context.serial_number.is_none());
        assert!(record.context.model.is_none());
    }
}
