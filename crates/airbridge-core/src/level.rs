//! Platform logging level state machine
//!
//! The effective verbosity is resolved exactly once per startup from three
//! competing sources: the configured value, the process-level debug flag,
//! and the default. It is not re-resolved until the process restarts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Effective platform logging verbosity.
///
/// Exactly one value is active for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlatformLogging {
    /// Info/warn/error platform messages
    #[default]
    Standard,
    /// Standard plus debug messages raised to info with a `[DEBUG]` prefix
    Debug,
    /// Forced by the process debug flag; debug messages use the debug level
    DebugMode,
    /// All platform output suppressed
    None,
}

/// Which source won the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingSource {
    /// A recognized value in the configuration's options
    Config,
    /// The process-level debug flag
    DebugFlag,
    /// Neither was present
    Default,
}

impl PlatformLogging {
    /// Lenient parse of a configured logging value.
    ///
    /// Only `debug`, `standard` and `none` are accepted from configuration;
    /// anything else (including `debugMode`, which is flag-only) counts as
    /// unset so resolution falls through.
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "standard" => Some(Self::Standard),
            "none" => Some(Self::None),
            _ => Option::None,
        }
    }

    /// Resolve the effective level, once per startup.
    ///
    /// Priority: recognized config value, then the debug flag, then the
    /// default. A set debug flag forces the final state to `DebugMode` even
    /// over an explicit `standard`/`none` config value, so operators can get
    /// full verbosity at launch time without editing the config file. That
    /// override is intentional.
    pub fn resolve(configured: Option<&str>, debug_flag: bool) -> (Self, LoggingSource) {
        let (level, source) = match configured.and_then(Self::from_config) {
            Some(level) => (level, LoggingSource::Config),
            Option::None if debug_flag => (Self::DebugMode, LoggingSource::DebugFlag),
            Option::None => (Self::Standard, LoggingSource::Default),
        };

        if debug_flag {
            return (Self::DebugMode, source);
        }
        (level, source)
    }

    /// Whether debug-gated messages are emitted.
    pub fn is_debug_enabled(self) -> bool {
        matches!(self, Self::Debug | Self::DebugMode)
    }

    /// Whether any platform output is emitted at all.
    pub fn logging_enabled(self) -> bool {
        matches!(self, Self::Debug | Self::DebugMode | Self::Standard)
    }
}

impl fmt::Display for PlatformLogging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Debug => write!(f, "debug"),
            Self::DebugMode => write!(f, "debugMode"),
            Self::None => write!(f, "none"),
        }
    }
}
