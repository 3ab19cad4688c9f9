//! Stable accessory identity derivation

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for accessory identity derivation.
///
/// Changing this value invalidates every persisted accessory cache.
const IDENTITY_NAMESPACE: Uuid = Uuid::from_u128(0x5f7d3a86_9f2c_44d1_b0c3_8a1f54d20a6e);

/// Opaque, stable token joining a device configuration to its accessory
/// record across restarts.
///
/// Derived deterministically from the configured
/// `(locationName, apiKey, zipCode)` triple: identical triples always yield
/// the same identity and any change to any component yields a different one,
/// which reads as a new logical device rather than an update of the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessoryIdentity(Uuid);

impl AccessoryIdentity {
    /// Derive an identity from a raw seed string.
    pub fn from_seed(seed: &str) -> Self {
        Self(Uuid::new_v5(&IDENTITY_NAMESPACE, seed.as_bytes()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccessoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Derive the identity for a `(locationName, apiKey, zipCode)` triple.
///
/// Pure and deterministic: no process state, no clock. The concatenation of
/// the three fields is the canonical pre-image.
pub fn accessory_identity(
    location_name: &str,
    api_key: &str,
    zip_code: &str,
) -> AccessoryIdentity {
    AccessoryIdentity::from_seed(&format!("{location_name}{api_key}{zip_code}"))
}
