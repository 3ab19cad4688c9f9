//! End-to-end reconciliation flows across simulated restarts

use airbridge_core::level::{LoggingSource, PlatformLogging};
use airbridge_platform::test_utils::{
    test_config, test_device, test_device_full, RecordingRegistry,
};
use airbridge_platform::{AccessoryRecord, Platform, PlatformConfig, FORECAST_MODEL};

/// Run one platform lifetime: restore the given records, fire the launch
/// signal, and return the resulting cache plus the recording registry.
fn run_pass(
    config: PlatformConfig,
    restored: Vec<AccessoryRecord>,
) -> (Vec<AccessoryRecord>, RecordingRegistry) {
    let mut platform = Platform::new(config, false, RecordingRegistry::new());
    for record in restored {
        platform.configure_accessory(record);
    }
    platform.did_finish_launching();

    let cache = platform.accessories().to_vec();
    (cache, platform.into_registry())
}

#[test]
fn full_lifecycle_across_three_startups() {
    // Startup 1: empty cache, two locations
    let config = test_config(vec![test_device("Denver"), test_device("Boulder")]);
    let (cache, registry) = run_pass(config, Vec::new());

    assert_eq!(cache.len(), 2);
    assert_eq!(registry.registered(), vec!["Denver", "Boulder"]);
    assert_eq!(cache[0].context.model.as_deref(), Some(FORECAST_MODEL));
    assert_eq!(cache[0].context.serial_number.as_deref(), Some("80202"));

    // Startup 2: unchanged config, restored cache. Updates only.
    let config = test_config(vec![test_device("Denver"), test_device("Boulder")]);
    let (cache, registry) = run_pass(config, cache);

    assert_eq!(cache.len(), 2);
    assert!(registry.registered().is_empty());
    assert_eq!(registry.updated(), vec!["Denver", "Boulder"]);

    // Startup 3: Denver gains a firmware pin, Boulder is marked for
    // removal, and a new location appears
    let mut denver = test_device("Denver");
    denver.firmware = Some("1.2.0".to_string());
    let boulder = test_device_full("Boulder", Some("K1"), Some("80202"), true);
    let aspen = test_device_full("Aspen", Some("K1"), Some("81611"), false);
    let config = test_config(vec![denver, boulder, aspen]);
    let (cache, registry) = run_pass(config, cache);

    assert_eq!(cache.len(), 2);
    let denver_record = cache
        .iter()
        .find(|r| r.display_name == "Denver")
        .expect("Denver survives");
    assert_eq!(
        denver_record.context.firmware_revision.as_deref(),
        Some("1.2.0")
    );
    assert!(cache.iter().any(|r| r.display_name == "Aspen"));
    assert_eq!(registry.unregistered(), vec!["Boulder"]);
    assert_eq!(registry.registered(), vec!["Aspen"]);
}

#[test]
fn identity_survives_restart_but_not_credential_change() {
    let config = test_config(vec![test_device("Denver")]);
    let (cache, _) = run_pass(config, Vec::new());
    let original_identity = cache[0].identity;

    // Unchanged triple: same identity, record is matched and updated
    let config = test_config(vec![test_device("Denver")]);
    let (cache, registry) = run_pass(config, cache);
    assert_eq!(cache[0].identity, original_identity);
    assert!(registry.registered().is_empty());

    // Changed credential: a new logical device, the stale record lingers
    let rotated = test_device_full("Denver", Some("K2"), Some("80202"), false);
    let config = test_config(vec![rotated]);
    let (cache, registry) = run_pass(config, cache);
    assert_eq!(cache.len(), 2);
    assert_ne!(cache[1].identity, original_identity);
    assert_eq!(registry.registered(), vec!["Denver"]);
}

#[test]
fn mixed_validity_pass_reconciles_what_it_can() {
    let incomplete = test_device_full("Somewhere", None, None, false);
    let valid = test_device("Denver");
    let orphan_delete = test_device_full("Ghost", Some("K1"), Some("00000"), true);

    let config = test_config(vec![incomplete, valid, orphan_delete]);
    let (cache, registry) = run_pass(config, Vec::new());

    // The incomplete entry still registers (incomplete identity), the
    // orphan delete is a no-op, and the valid entry is unaffected
    assert_eq!(cache.len(), 2);
    assert_eq!(registry.registered(), vec!["Somewhere", "Denver"]);
    assert!(registry.unregistered().is_empty());
}

#[test]
fn logging_precedence_flag_beats_explicit_none() {
    let (level, _) = PlatformLogging::resolve(Some("none"), true);
    assert_eq!(level, PlatformLogging::DebugMode);

    let (level, source) = PlatformLogging::resolve(Some("none"), false);
    assert_eq!(level, PlatformLogging::None);
    assert_eq!(source, LoggingSource::Config);
    assert!(!level.logging_enabled());
}

#[test]
fn sanitized_names_flow_into_records_and_sensors() {
    let device = test_device("  Denver@@ Airport!! ");
    let config = test_config(vec![device]);

    let mut platform = Platform::new(config, false, RecordingRegistry::new());
    platform.did_finish_launching();

    assert_eq!(platform.accessories()[0].display_name, "Denver Airport");
    assert_eq!(platform.sensors()[0].display_name(), "Denver Airport");
    assert_eq!(platform.registry().registered(), vec!["Denver Airport"]);
}
