use super::{CompatibilityPins, Declaration, TransportVersionRegistry, build_index};
use crate::config::{IntegrityAudit, RegistryConfig};
use crate::error::RegistryError;
use crate::version::TransportVersion;
use crate::wire;

fn decl(name: &'static str, id: u32) -> Declaration {
	Declaration {
		name,
		version: TransportVersion::new(id),
	}
}

fn sample_registry() -> TransportVersionRegistry {
	let decls = [
		decl("ZERO", 0),
		decl("V_7_17_0", 7_17_00_99),
		decl("V_8_15_0", 8_702_00_2),
		decl("V_8_15_2", 8_702_00_3),
		decl("QUERY_RULES_LIST_INCLUDES_TYPES_BACKPORT_8_15", 8_702_00_4),
		decl("ESQL_PROFILE_SLEEPS", 8_725_00_0),
		decl("ZDT_NANOS_SUPPORT", 8_726_00_0),
	];
	let index = build_index(&decls, &RegistryConfig::default()).unwrap();
	TransportVersionRegistry::from_index(
		index,
		CompatibilityPins {
			minimum_compatible: TransportVersion::new(7_17_00_99),
			minimum_ccs: TransportVersion::new(8_702_00_2),
		},
	)
	.unwrap()
}

#[test]
fn test_audit_reports_both_names() {
	let decls = [decl("A", 1), decl("B", 2), decl("C", 2)];
	let config = RegistryConfig::default().audit(IntegrityAudit::Enabled);

	let err = build_index(&decls, &config).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateMapping {
			id: 2,
			existing: "B",
			name: "C",
		}
	);
	assert!(err.to_string().contains("[B] and [C]"));
}

#[test]
fn test_disabled_audit_lets_later_name_win() {
	let decls = [decl("A", 1), decl("B", 2), decl("C", 2)];
	let config = RegistryConfig::default().audit(IntegrityAudit::Disabled);

	let index = build_index(&decls, &config).unwrap();
	assert_eq!(index.len(), 2);
	assert_eq!(index.names.get(&2), Some(&"C"));
}

#[test]
fn test_index_is_id_ordered_regardless_of_input_order() {
	let decls = [decl("C", 30), decl("A", 10), decl("B", 20)];
	let index = build_index(&decls, &RegistryConfig::default()).unwrap();
	assert_eq!(index.by_id.keys().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_empty_index_has_no_latest() {
	let index = build_index(&[decl("ZERO", 0)], &RegistryConfig::default()).unwrap();
	assert!(index.is_empty());

	let pins = CompatibilityPins {
		minimum_compatible: TransportVersion::ZERO,
		minimum_ccs: TransportVersion::ZERO,
	};
	assert_eq!(TransportVersionRegistry::from_index(index, pins).unwrap_err(), RegistryError::Empty);
}

#[test]
fn test_latest_is_maximum_id() {
	let registry = sample_registry();
	let max = registry.all().map(TransportVersion::id).max().unwrap();
	assert_eq!(registry.latest().id(), max);
	assert_eq!(registry.latest().id(), 8_726_00_0);
}

#[test]
fn test_all_is_ascending() {
	let registry = sample_registry();
	let ids: Vec<u32> = registry.all().map(TransportVersion::id).collect();
	assert!(ids.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(ids.len(), registry.len());
}

#[test]
fn test_range_query() {
	let registry = sample_registry();
	let backports: Vec<u32> = registry.range(8_702_00_0..8_703_00_0).map(TransportVersion::id).collect();
	assert_eq!(backports, vec![8_702_00_2, 8_702_00_3, 8_702_00_4]);
}

#[test]
fn test_best_known() {
	let registry = sample_registry();
	assert_eq!(registry.best_known(8_725_00_0).id(), 8_725_00_0);
	assert_eq!(registry.best_known(8_725_00_5).id(), 8_725_00_0);
	assert_eq!(registry.best_known(9_000_00_0).id(), 8_726_00_0);
	assert_eq!(registry.best_known(42), TransportVersion::ZERO);
}

#[test]
fn test_from_id_keeps_unknown_ids() {
	let registry = sample_registry();
	let future = registry.from_id(9_100_00_0);

	assert!(!registry.is_known(future.id()));
	assert!(future.on_or_after(registry.latest()));
	assert_eq!(registry.from_id(8_702_00_2), registry.minimum_ccs());
}

#[test]
fn test_compatibility_floors() {
	let registry = sample_registry();

	assert!(registry.is_compatible(TransportVersion::new(7_17_00_99)));
	assert!(!registry.is_compatible(TransportVersion::new(7_16_00_99)));
	assert!(registry.is_ccs_compatible(TransportVersion::new(8_725_00_0)));
	assert!(!registry.is_ccs_compatible(TransportVersion::new(7_17_00_99)));
}

#[test]
fn test_lookup_by_name() {
	let registry = sample_registry();
	let v8_15 = registry.by_name("V_8_15_0").unwrap();

	assert_eq!(v8_15.id(), 8_702_00_2);
	assert_eq!(registry.name_of(v8_15), Some("V_8_15_0"));
	assert_eq!(registry.name_of(TransportVersion::ZERO), None);
}

#[test]
fn test_unknown_name_suggests_closest() {
	let registry = sample_registry();

	let err = registry.by_name("ZDT_NANO_SUPPORT").unwrap_err();
	assert_eq!(
		err,
		RegistryError::UnknownName {
			name: "ZDT_NANO_SUPPORT".to_string(),
			suggestion: Some("ZDT_NANOS_SUPPORT"),
		}
	);
	assert!(err.to_string().contains("did you mean \"ZDT_NANOS_SUPPORT\""));

	let err = registry.by_name("SOMETHING_ELSE").unwrap_err();
	assert!(matches!(err, RegistryError::UnknownName { suggestion: None, .. }));
}

#[test]
fn test_read_version_from_wire() {
	let registry = sample_registry();
	let bytes = wire::encode(registry.minimum_ccs()).unwrap();

	assert_eq!(registry.read_version(&bytes).unwrap(), registry.minimum_ccs());
	assert!(registry.read_version(&[]).is_err());
}
