use proptest::prelude::*;

use super::{TransportVersion, VersionParts};
use crate::error::VersionError;

#[test]
fn test_parts_of_patch_version() {
	let parts = TransportVersion::new(8_702_00_3).parts();
	assert_eq!(
		parts,
		VersionParts {
			major: 8,
			server: 702,
			variant: 0,
			patch: 3,
		}
	);
	assert_eq!(parts.to_id().unwrap(), 8_702_00_3);
}

#[test]
fn test_variant_part_is_preserved() {
	let parts = VersionParts::from_id(9_001_42_7);
	assert_eq!(parts.major, 9);
	assert_eq!(parts.server, 1);
	assert_eq!(parts.variant, 42);
	assert_eq!(parts.patch, 7);
	assert_eq!(parts.to_id().unwrap(), 9_001_42_7);
}

#[test]
fn test_two_digit_major() {
	let parts = VersionParts::from_id(10_000_00_0);
	assert_eq!(parts.major, 10);
	assert_eq!(parts.server, 0);
}

#[test]
fn test_to_id_rejects_wide_parts() {
	let parts = VersionParts {
		major: 8,
		server: 1000,
		variant: 0,
		patch: 0,
	};
	assert!(matches!(
		parts.to_id(),
		Err(VersionError::PartOutOfRange { part: "server", value: 1000, max: 999 })
	));

	let parts = VersionParts {
		major: 8,
		server: 1,
		variant: 0,
		patch: 10,
	};
	assert!(matches!(parts.to_id(), Err(VersionError::PartOutOfRange { part: "patch", .. })));
}

#[test]
fn test_to_id_rejects_overflowing_major() {
	let parts = VersionParts {
		major: 5000,
		server: 0,
		variant: 0,
		patch: 0,
	};
	assert!(matches!(parts.to_id(), Err(VersionError::IdOverflow { major: 5000 })));
}

#[test]
fn test_ordering_helpers() {
	let v8_15 = TransportVersion::new(8_702_00_2);
	let v8_16 = TransportVersion::new(8_772_00_1);
	let mid = TransportVersion::new(8_725_00_0);

	assert!(mid.on_or_after(v8_15));
	assert!(v8_15.on_or_after(v8_15));
	assert!(mid.before(v8_16));
	assert!(mid.between(v8_15, v8_16));
	assert!(v8_15.between(v8_15, v8_16));
	assert!(!v8_16.between(v8_15, v8_16));
}

#[test]
fn test_is_patch_from() {
	let backport = TransportVersion::new(8_702_00_4);

	assert!(backport.is_patch_from(backport));
	assert!(TransportVersion::new(8_702_00_5).is_patch_from(backport));
	assert!(!TransportVersion::new(8_702_00_3).is_patch_from(backport));
	assert!(!TransportVersion::new(8_703_00_0).is_patch_from(backport));
}

#[test]
fn test_display_is_numeric_id() {
	assert_eq!(TransportVersion::new(8_702_00_3).to_string(), "8702003");
	assert_eq!(TransportVersion::ZERO.to_string(), "0");
}

proptest! {
	/// Decomposing and recomposing any id yields the same id.
	#[test]
	fn prop_parts_recompose(id in any::<u32>()) {
		prop_assert_eq!(VersionParts::from_id(id).to_id().unwrap(), id);
	}

	/// Ordering by id agrees with lexicographic ordering of the parts.
	#[test]
	fn prop_parts_order_matches_id_order(a in any::<u32>(), b in any::<u32>()) {
		prop_assert_eq!(
			VersionParts::from_id(a).cmp(&VersionParts::from_id(b)),
			a.cmp(&b)
		);
	}
}
