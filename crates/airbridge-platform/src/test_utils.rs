//! Test utilities for the platform layer
//!
//! Provides device/record builders and a recording registry fake shared by
//! unit and integration tests.

use airbridge_core::device::DeviceConfig;
use airbridge_core::prelude::*;

use crate::config::PlatformConfig;
use crate::registry::{AccessoryContext, AccessoryRecord, AccessoryRegistry};

/// Creates a test device with a default credential and zip code.
pub fn test_device(location_name: &str) -> DeviceConfig {
    test_device_full(location_name, Some("K1"), Some("80202"), false)
}

/// Creates a test device with full control over all fields.
pub fn test_device_full(
    location_name: &str,
    api_key: Option<&str>,
    zip_code: Option<&str>,
    delete: bool,
) -> DeviceConfig {
    DeviceConfig {
        location_name: location_name.to_string(),
        api_key: api_key.map(str::to_string),
        zip_code: zip_code.map(str::to_string),
        firmware: None,
        delete,
    }
}

/// Creates a minimal platform configuration around the given devices.
pub fn test_config(devices: Vec<DeviceConfig>) -> PlatformConfig {
    PlatformConfig {
        name: Some("Air".to_string()),
        devices,
        refresh_rate: Some(3600),
        logging: None,
        options: None,
    }
}

/// Creates a fully populated accessory record for the given triple.
pub fn test_record(location_name: &str, api_key: &str, zip_code: &str) -> AccessoryRecord {
    let device = test_device_full(location_name, Some(api_key), Some(zip_code), false);
    AccessoryRecord {
        identity: device.identity(),
        display_name: location_name.to_string(),
        context: AccessoryContext {
            device,
            serial_number: Some(zip_code.to_string()),
            model: Some("Forecast by Zip Code".to_string()),
            firmware_revision: Some("0.1.0".to_string()),
        },
    }
}

/// One side effect observed by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    Register(Vec<String>),
    Unregister(Vec<String>),
    Update(Vec<String>),
}

/// Registry fake that records every call, by accessory display name.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    pub calls: Vec<RegistryCall>,
    /// When set, `register` fails for batches containing this display name
    pub fail_register_for: Option<String>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display names passed to `register`, in call order.
    pub fn registered(&self) -> Vec<String> {
        self.names_for(|call| match call {
            RegistryCall::Register(names) => Some(names),
            _ => None,
        })
    }

    /// Display names passed to `unregister`, in call order.
    pub fn unregistered(&self) -> Vec<String> {
        self.names_for(|call| match call {
            RegistryCall::Unregister(names) => Some(names),
            _ => None,
        })
    }

    /// Display names passed to `update`, in call order.
    pub fn updated(&self) -> Vec<String> {
        self.names_for(|call| match call {
            RegistryCall::Update(names) => Some(names),
            _ => None,
        })
    }

    fn names_for<'a, F>(&'a self, select: F) -> Vec<String>
    where
        F: Fn(&'a RegistryCall) -> Option<&'a Vec<String>>,
    {
        self.calls
            .iter()
            .filter_map(select)
            .flatten()
            .cloned()
            .collect()
    }
}

fn display_names(records: &[AccessoryRecord]) -> Vec<String> {
    records.iter().map(|r| r.display_name.clone()).collect()
}

impl AccessoryRegistry for RecordingRegistry {
    fn register(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        let names = display_names(records);
        if let Some(rejected) = &self.fail_register_for {
            if names.iter().any(|name| name == rejected) {
                return Err(Error::registry(format!("register rejected: {rejected}")));
            }
        }
        self.calls.push(RegistryCall::Register(names));
        Ok(())
    }

    fn unregister(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        self.calls
            .push(RegistryCall::Unregister(display_names(records)));
        Ok(())
    }

    fn update(&mut self, records: &[AccessoryRecord]) -> Result<()> {
        self.calls.push(RegistryCall::Update(display_names(records)));
        Ok(())
    }
}
