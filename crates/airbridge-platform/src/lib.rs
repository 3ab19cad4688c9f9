//! # airbridge-platform - Accessory Reconciliation
//!
//! The platform layer: loads and validates the platform configuration,
//! owns the in-memory accessory cache, and reconciles configured forecast
//! locations against the host accessory registry.
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`PlatformConfig`] - Raw configuration as loaded from disk
//! - [`PlatformOptions`] - Optional logging/refresh overrides
//! - [`EffectiveConfig`] - Validated, defaulted runtime view
//!
//! ### Logging (`logger`)
//! - [`PlatformLogger`] - Gated log facade consulted by every platform
//!   message
//!
//! ### Registry (`registry`)
//! - [`AccessoryRecord`], [`AccessoryContext`] - Persisted accessory shape
//! - [`AccessoryRegistry`] - The narrow host runtime capability set
//!
//! ### Reconciliation (`platform`)
//! - [`Platform`] - Restores cached accessories, runs the reconciliation
//!   pass, constructs sensor handles
//!
//! ### Sensors (`sensor`)
//! - [`AirQualitySensor`] - Per-accessory handle for the forecast poller

pub mod config;
pub mod logger;
pub mod platform;
pub mod registry;
pub mod sensor;
pub mod test_utils;

pub use config::{EffectiveConfig, PlatformConfig, PlatformOptions, DEFAULT_REFRESH_RATE};
pub use logger::PlatformLogger;
pub use platform::{Platform, FORECAST_MODEL};
pub use registry::{AccessoryContext, AccessoryRecord, AccessoryRegistry};
pub use sensor::AirQualitySensor;
