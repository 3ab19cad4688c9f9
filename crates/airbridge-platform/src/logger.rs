//! Gated platform log facade
//!
//! Transport is `tracing`; whether a platform message is emitted at all is
//! decided here, from the level resolved once at startup. `none` suppresses
//! everything, `debug` raises debug messages to info with a `[DEBUG]`
//! prefix, `debugMode` routes them to the debug level.

use airbridge_core::level::{LoggingSource, PlatformLogging};

/// Log facade consulted by every platform message.
///
/// Cheap to copy; every sensor handle carries one.
#[derive(Debug, Clone, Copy)]
pub struct PlatformLogger {
    level: PlatformLogging,
}

impl PlatformLogger {
    pub fn new(level: PlatformLogging) -> Self {
        Self { level }
    }

    /// The resolved level this facade gates on.
    pub fn level(&self) -> PlatformLogging {
        self.level
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.level.is_debug_enabled()
    }

    pub fn enabled(&self) -> bool {
        self.level.logging_enabled()
    }

    /// Report which resolution source won, the way operators expect to see
    /// it: only when the winning level is itself debug-grade.
    pub fn announce_source(&self, configured: Option<PlatformLogging>, source: LoggingSource) {
        match source {
            LoggingSource::Config => {
                if let Some(level) = configured {
                    if level.is_debug_enabled() {
                        self.debug_warn(format!("Using Config Logging: {level}"));
                    }
                }
            }
            LoggingSource::DebugFlag => {
                self.debug_warn(format!("Using {} Logging", self.level));
            }
            LoggingSource::Default => {}
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        if self.enabled() {
            tracing::info!("{}", message.as_ref());
        }
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        if self.enabled() {
            tracing::warn!("{}", message.as_ref());
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        if self.enabled() {
            tracing::error!("{}", message.as_ref());
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        if self.enabled() {
            match self.level {
                PlatformLogging::Debug => tracing::info!("[DEBUG] {}", message.as_ref()),
                PlatformLogging::DebugMode => tracing::debug!("{}", message.as_ref()),
                _ => {}
            }
        }
    }

    pub fn debug_warn(&self, message: impl AsRef<str>) {
        if self.enabled() && self.is_debug_enabled() {
            tracing::warn!("[DEBUG] {}", message.as_ref());
        }
    }

    pub fn debug_error(&self, message: impl AsRef<str>) {
        if self.enabled() && self.is_debug_enabled() {
            tracing::error!("[DEBUG] {}", message.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_suppresses_everything() {
        let log = PlatformLogger::new(PlatformLogging::None);
        assert!(!log.enabled());
        assert!(!log.is_debug_enabled());
    }

    #[test]
    fn test_standard_emits_but_not_debug() {
        let log = PlatformLogger::new(PlatformLogging::Standard);
        assert!(log.enabled());
        assert!(!log.is_debug_enabled());
    }

    #[test]
    fn test_debug_modes_enable_debug_gates() {
        for level in [PlatformLogging::Debug, PlatformLogging::DebugMode] {
            let log = PlatformLogger::new(level);
            assert!(log.enabled());
            assert!(log.is_debug_enabled());
        }
    }
}
