use std::ptr;

use rstest::rstest;
use wirever_registry::{IntegrityAudit, RegistryConfig, RegistryError, TransportVersion};

use super::*;

#[test]
fn test_every_named_version_is_registered() {
	// ZERO is the only declared constant left out.
	assert_eq!(registry().len(), TransportVersions::NAMES.len() - 1);
	assert_eq!(all().len(), registry().len());
	for name in TransportVersions::NAMES.iter().filter(|name| **name != "ZERO") {
		assert!(registry().by_name(name).is_ok(), "{name} missing from registry");
	}
}

#[test]
fn test_latest_is_newest_declaration() {
	assert_eq!(latest(), versions().SOURCE_MODE_TELEMETRY);
	assert_eq!(latest().id(), 8_802_00_0);
	assert_eq!(all().next_back(), Some(latest()));
}

#[test]
fn test_compatibility_pins() {
	assert_eq!(minimum_compatible(), VERSIONS.V_7_17_0);
	assert_eq!(minimum_ccs_version(), VERSIONS.V_8_15_0);
	assert!(minimum_compatible().before(minimum_ccs_version()));
	assert!(registry().is_compatible(latest()));
}

#[test]
fn test_all_is_strictly_ascending() {
	let ids: Vec<u32> = all().map(TransportVersion::id).collect();
	assert!(ids.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(ids.first(), Some(&VERSIONS.V_7_0_0.id()));
}

#[test]
fn test_aliases_are_not_indexed() {
	assert!(matches!(registry().by_name("MINIMUM_COMPATIBLE"), Err(RegistryError::UnknownName { .. })));
	assert_eq!(registry().name_of(VERSIONS.V_8_15_0), Some("V_8_15_0"));
}

#[test]
fn test_backports_are_patches_of_their_base() {
	let v = versions();
	assert!(v.V_8_15_2.is_patch_from(v.V_8_15_0));
	assert!(v.QUERY_RULES_LIST_INCLUDES_TYPES_BACKPORT_8_15.is_patch_from(v.V_8_15_0));
	assert!(v.QUERY_RULES_LIST_INCLUDES_TYPES_BACKPORT_8_16.is_patch_from(v.INFERENCE_DONT_PERSIST_ON_READ_BACKPORT_8_16));
	assert!(!v.ESQL_PROFILE_SLEEPS.is_patch_from(v.V_8_15_0));
}

#[rstest]
#[case::seven(7_17_00_99, "7.17.0")]
#[case::shared_id(8_500_020, "8.9.0-8.9.2")]
#[case::patch_pair(8_702_00_2, "8.15.0-8.15.1")]
#[case::between(8_725_00_0, "8.15.4-8.16.0")]
#[case::current(8_802_00_0, "9.0.0")]
#[case::future(9_000_00_0, "9.0.1-snapshot[9000000]")]
fn test_release_labels(#[case] id: u32, #[case] expected: &str) {
	assert_eq!(lookup_release_label(id), expected);
}

#[test]
fn test_build_without_audit_matches() {
	let unaudited = Catalog::build(RegistryConfig::default().audit(IntegrityAudit::Disabled)).unwrap();
	assert_eq!(unaudited.registry().len(), registry().len());
	assert_eq!(unaudited.registry().latest(), latest());
}

#[test]
fn test_unignored_alias_is_rejected() {
	let config = RegistryConfig::default().audit(IntegrityAudit::Enabled).ignored(["ZERO"]);
	let err = Catalog::build(config).unwrap_err();
	assert!(matches!(
		err,
		CatalogError::Registry(RegistryError::DuplicateMapping {
			existing: "V_7_17_0",
			name: "MINIMUM_COMPATIBLE",
			..
		})
	));
}

#[test]
fn test_try_init_returns_shared_catalog() {
	let first = catalog();
	let second = try_init(RegistryConfig::default()).unwrap();
	assert!(ptr::eq(first, second));
}

#[test]
fn test_concurrent_readers_agree() {
	let expected = latest();
	std::thread::scope(|s| {
		let handles: Vec<_> = (0..4).map(|_| s.spawn(|| (latest(), all().len()))).collect();
		for handle in handles {
			assert_eq!(handle.join().unwrap(), (expected, registry().len()));
		}
	});
}
