//! Platform orchestration: accessory cache ownership and reconciliation
//!
//! The platform owns the in-memory accessory cache for the process
//! lifetime. The host restores cached records one by one, fires the launch
//! signal, and the platform runs a single reconciliation pass: every
//! configured location ends up with exactly one live accessory, entries
//! marked for deletion are retired, and new entries are registered.
//!
//! Passes are strictly sequential; every entry point takes `&mut self`, so
//! a second pass cannot overlap a running one.

use airbridge_core::device::DeviceConfig;
use airbridge_core::identity::AccessoryIdentity;
use airbridge_core::level::PlatformLogging;
use airbridge_core::names::{self, RewriteReason};
use airbridge_core::prelude::*;

use crate::config::{EffectiveConfig, PlatformConfig};
use crate::logger::PlatformLogger;
use crate::registry::{AccessoryContext, AccessoryRecord, AccessoryRegistry};
use crate::sensor::AirQualitySensor;

/// Model string stamped on every forecast accessory.
pub const FORECAST_MODEL: &str = "Forecast by Zip Code";

/// The accessory platform.
///
/// Owns the accessory cache and the registry handle; constructs one
/// [`AirQualitySensor`] per live accessory during a pass.
pub struct Platform<R: AccessoryRegistry> {
    log: PlatformLogger,
    config: EffectiveConfig,
    registry: R,
    accessories: Vec<AccessoryRecord>,
    sensors: Vec<AirQualitySensor>,
    version: String,
}

impl<R: AccessoryRegistry> Platform<R> {
    /// Initialize the platform from a loaded configuration.
    ///
    /// `debug_flag` is the process-level debug switch (`-D`/`--debug`),
    /// independent of the config file. Logging resolution happens here,
    /// once, before anything else can log.
    pub fn new(config: PlatformConfig, debug_flag: bool, registry: R) -> Self {
        let configured = config
            .logging_selection()
            .and_then(PlatformLogging::from_config);
        let (level, source) = PlatformLogging::resolve(config.logging_selection(), debug_flag);
        let log = PlatformLogger::new(level);
        log.announce_source(configured, source);

        if let Some(options) = &config.options {
            if let Ok(rendered) = serde_json::to_string(options) {
                log.debug(format!("Platform Config: {rendered}"));
            }
        }

        let version = env!("CARGO_PKG_VERSION").to_string();
        log.debug(format!("Plugin Version: {version}"));

        let effective = config.verify(&log);
        log.debug("Config OK");
        log.debug(format!(
            "Finished initializing platform: {}",
            effective.name.as_deref().unwrap_or("Air")
        ));

        Self {
            log,
            config: effective,
            registry,
            accessories: Vec::new(),
            sensors: Vec::new(),
            version,
        }
    }

    /// Host restore path, called once per cached record before the launch
    /// signal fires.
    pub fn configure_accessory(&mut self, record: AccessoryRecord) {
        self.log.info(format!(
            "Loading accessory from cache: {}",
            record.display_name
        ));
        self.accessories.push(record);
    }

    /// The host lifecycle signal: all cached accessories have been
    /// restored. Triggers the reconciliation pass.
    pub fn did_finish_launching(&mut self) {
        self.log.debug("Launch signal received");
        self.discover_devices();
    }

    /// One reconciliation pass over the configured devices.
    ///
    /// Devices are processed in configuration order, duplicates included
    /// (a duplicate identity applies two sequential updates, last write
    /// wins). One entry's failure never aborts the pass.
    pub fn discover_devices(&mut self) {
        if self.config.devices.is_empty() {
            self.log.error("No Device Config");
            return;
        }

        let devices = self.config.devices.clone();
        for device in &devices {
            self.log.info(format!("Discovered {}", device.location_name));
            if let Err(e) = self.reconcile_device(device) {
                self.log.error(format!(
                    "Failed to reconcile {}: {e}",
                    device.location_name
                ));
            }
        }
    }

    fn reconcile_device(&mut self, device: &DeviceConfig) -> Result<()> {
        let identity = device.identity();
        let existing = self
            .accessories
            .iter()
            .position(|record| record.identity == identity);

        match (existing, device.delete) {
            (Some(index), false) => self.update_accessory(index, device),
            (Some(index), true) => self.retire_accessory(index),
            (None, false) => self.create_accessory(device, identity),
            (None, true) => {
                // Nothing to delete, nothing to create
                self.log.debug_error(format!(
                    "Unable to Register new device: {}",
                    device.location_name
                ));
                Ok(())
            }
        }
    }

    fn update_accessory(&mut self, index: usize, device: &DeviceConfig) -> Result<()> {
        let display_name = self.clean_name(&device.location_name);
        let context = self.build_context(device);
        {
            let record = &mut self.accessories[index];
            record.display_name = display_name;
            record.context = context;
        }

        let record = self.accessories[index].clone();
        self.registry.update(std::slice::from_ref(&record))?;
        self.log.info(format!(
            "Restoring existing accessory from cache: {}",
            record.display_name
        ));
        self.sensors.push(AirQualitySensor::new(
            self.log,
            &record,
            self.config.refresh_rate,
        ));
        self.log.debug(format!(
            "{} identity seed: {}",
            device.location_name,
            device.identity_seed()
        ));
        Ok(())
    }

    fn create_accessory(
        &mut self,
        device: &DeviceConfig,
        identity: AccessoryIdentity,
    ) -> Result<()> {
        let record = AccessoryRecord {
            identity,
            display_name: self.clean_name(&device.location_name),
            context: self.build_context(device),
        };

        self.log
            .info(format!("Adding new accessory: {}", device.location_name));
        self.registry.register(std::slice::from_ref(&record))?;
        self.sensors.push(AirQualitySensor::new(
            self.log,
            &record,
            self.config.refresh_rate,
        ));
        self.log.debug(format!(
            "{} identity seed: {}",
            device.location_name,
            device.identity_seed()
        ));
        self.accessories.push(record);
        Ok(())
    }

    fn retire_accessory(&mut self, index: usize) -> Result<()> {
        let record = self.accessories[index].clone();
        self.registry.unregister(std::slice::from_ref(&record))?;
        self.accessories.remove(index);
        self.log.warn(format!(
            "Removing existing accessory from cache: {}",
            record.display_name
        ));
        Ok(())
    }

    fn build_context(&self, device: &DeviceConfig) -> AccessoryContext {
        AccessoryContext {
            device: device.clone(),
            serial_number: device.zip_code.clone(),
            model: Some(FORECAST_MODEL.to_string()),
            firmware_revision: Some(
                device
                    .firmware
                    .clone()
                    .unwrap_or_else(|| self.version.clone()),
            ),
        }
    }

    fn clean_name(&self, raw: &str) -> String {
        if self.config.allow_invalid_characters {
            return raw.to_string();
        }

        let cleaned = names::clean_display_name(raw);
        if !cleaned.was_valid {
            self.log.warn(format!(
                "The accessory '{raw}' has an invalid display name. Use only alphanumeric, \
                 space, and apostrophe characters, starting and ending with an alphanumeric \
                 character."
            ));
            for rewrite in &cleaned.rewrites {
                match rewrite.reason {
                    RewriteReason::InvalidCharacters => self.log.warn(format!(
                        "Removing invalid characters from display name; enable \
                         allowInvalidCharacters to keep them. Before: '{}' After: '{}'",
                        rewrite.before, rewrite.after
                    )),
                    RewriteReason::InvalidBounds => self.log.warn(format!(
                        "Removing invalid starting or ending characters from display name. \
                         Before: '{}' After: '{}'",
                        rewrite.before, rewrite.after
                    )),
                }
            }
        }
        cleaned.value
    }

    /// The in-memory accessory cache, in registration order.
    pub fn accessories(&self) -> &[AccessoryRecord] {
        &self.accessories
    }

    /// Sensor handles constructed during the last pass.
    pub fn sensors(&self) -> &[AirQualitySensor] {
        &self.sensors
    }

    pub fn logger(&self) -> &PlatformLogger {
        &self.log
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Consume the platform, handing the registry back to the host.
    pub fn into_registry(self) -> R {
        self.registry
    }
}
