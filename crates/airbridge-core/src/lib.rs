//! # airbridge-core - Core Domain Types
//!
//! Foundation crate for airbridge. Provides the device configuration model,
//! stable accessory identity derivation, display-name cleanup, the platform
//! logging level state machine, error handling, and the tracing bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, uuid, regex, tracing).
//!
//! ## Public API
//!
//! ### Devices (`device`)
//! - [`DeviceConfig`] - One configured forecast location
//!
//! ### Identity (`identity`)
//! - [`AccessoryIdentity`] - Stable opaque token joining a device
//!   configuration to its accessory record across restarts
//! - [`accessory_identity()`] - Derive an identity from the
//!   name/credential/zip triple
//!
//! ### Display Names (`names`)
//! - [`clean_display_name()`] - Normalize a free-text name into the
//!   constrained accessory character set
//!
//! ### Logging Level (`level`)
//! - [`PlatformLogging`] - Effective platform verbosity, resolved once at
//!   startup from config, the process debug flag, and the default
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use airbridge_core::prelude::*;
//! ```

pub mod device;
pub mod error;
pub mod identity;
pub mod level;
pub mod logging;
pub mod names;

/// Prelude for common imports used throughout all airbridge crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use device::DeviceConfig;
pub use error::{Error, Result, ResultExt};
pub use identity::{accessory_identity, AccessoryIdentity};
pub use level::{LoggingSource, PlatformLogging};
pub use names::{clean_display_name, CleanedName, NameRewrite, RewriteReason};
