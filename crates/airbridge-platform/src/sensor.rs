//! Per-accessory air-quality sensor handle
//!
//! Reconciliation constructs one handle per live accessory and hands it to
//! the forecast poller. The handle carries the platform log facade, the
//! accessory's context fields and the configured location; constructing it
//! performs no I/O.

use std::time::Duration;

use airbridge_core::device::DeviceConfig;
use airbridge_core::identity::AccessoryIdentity;

use crate::logger::PlatformLogger;
use crate::registry::AccessoryRecord;

/// Handle bound to one registered accessory.
#[derive(Debug, Clone)]
pub struct AirQualitySensor {
    log: PlatformLogger,
    identity: AccessoryIdentity,
    display_name: String,
    device: DeviceConfig,
    serial_number: Option<String>,
    model: Option<String>,
    firmware_revision: Option<String>,
    refresh_rate: u64,
}

impl AirQualitySensor {
    pub fn new(log: PlatformLogger, record: &AccessoryRecord, refresh_rate: u64) -> Self {
        log.debug(format!(
            "Attached air quality sensor: {}",
            record.display_name
        ));
        Self {
            log,
            identity: record.identity,
            display_name: record.display_name.clone(),
            device: record.context.device.clone(),
            serial_number: record.context.serial_number.clone(),
            model: record.context.model.clone(),
            firmware_revision: record.context.firmware_revision.clone(),
            refresh_rate,
        }
    }

    pub fn logger(&self) -> &PlatformLogger {
        &self.log
    }

    pub fn identity(&self) -> AccessoryIdentity {
        self.identity
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The configured location this sensor polls for.
    pub fn device(&self) -> &DeviceConfig {
        &self.device
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn firmware_revision(&self) -> Option<&str> {
        self.firmware_revision.as_deref()
    }

    pub fn set_serial_number(&mut self, value: impl Into<String>) {
        self.serial_number = Some(value.into());
    }

    pub fn set_model(&mut self, value: impl Into<String>) {
        self.model = Some(value.into());
    }

    pub fn set_firmware_revision(&mut self, value: impl Into<String>) {
        self.firmware_revision = Some(value.into());
    }

    /// Polling interval for forecast refreshes.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_rate)
    }
}

#[cfg(test)]
mod tests {
    use airbridge_core::level::PlatformLogging;

    use super::*;
    use crate::test_utils::test_record;

    #[test]
    fn test_sensor_snapshots_record_context() {
        let record = test_record("Denver", "K1", "80202");
        let sensor = AirQualitySensor::new(
            PlatformLogger::new(PlatformLogging::None),
            &record,
            DEFAULT_TEST_REFRESH,
        );

        assert_eq!(sensor.identity(), record.identity);
        assert_eq!(sensor.display_name(), "Denver");
        assert_eq!(sensor.serial_number(), Some("80202"));
        assert_eq!(sensor.model(), Some("Forecast by Zip Code"));
        assert_eq!(sensor.refresh_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_sensor_context_fields_are_writable() {
        let record = test_record("Denver", "K1", "80202");
        let mut sensor = AirQualitySensor::new(
            PlatformLogger::new(PlatformLogging::None),
            &record,
            DEFAULT_TEST_REFRESH,
        );

        sensor.set_firmware_revision("2.0.0");
        assert_eq!(sensor.firmware_revision(), Some("2.0.0"));
    }

    const DEFAULT_TEST_REFRESH: u64 = 3600;
}
