//! Error types for version declaration, sealing and lookup.
//!
//! Every [`RegistryError`] is a programming fault in the version catalog. Callers
//! at process startup treat them as fatal.

/// Faults raised while declaring or sealing transport versions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// A declaration was attempted after the accumulator was sealed.
	#[error("transport version accumulator is sealed; no further ids can be declared")]
	Closed,

	/// The same id was declared twice.
	#[error("version id {id} defined twice")]
	DuplicateId { id: u32 },

	/// An id was declared below the highest id declared so far.
	#[error("version id {id} is not defined in the right location (after {last}); keep constants sorted")]
	OutOfOrder { id: u32, last: u32 },

	/// Two distinct names map to the same id in the sealed index.
	#[error("versions [{existing}] and [{name}] have the same version number [{id}]; each transport version needs a different id")]
	DuplicateMapping {
		id: u32,
		existing: &'static str,
		name: &'static str,
	},

	/// No versions survived into the sealed index.
	#[error("no transport versions registered")]
	Empty,

	/// A pinned compatibility version is not a member of the sealed index.
	#[error("{role} pin {id} is not a registered transport version")]
	UnknownPin { role: &'static str, id: u32 },

	/// Lookup by constant name failed.
	#[error("unknown transport version name {name:?}{}", suggestion.as_ref().map(|s| format!(" (did you mean {s:?}?)")).unwrap_or_default())]
	UnknownName {
		name: String,
		suggestion: Option<&'static str>,
	},
}

/// Faults in the release table used for label lookup.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
	#[error("failed to parse release table: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid release label {0:?}; expected major.minor.revision")]
	InvalidLabel(String),

	/// A release points at an id newer than anything registered.
	#[error("release {release} maps to id {id}, beyond the latest defined version {latest}")]
	ReleaseBeyondLatest { release: String, id: u32, latest: u32 },

	/// Release labels do not increase with their ids.
	#[error("release {later} (id {later_id}) does not follow release {earlier} (id {earlier_id})")]
	ReleaseOrder {
		earlier: String,
		earlier_id: u32,
		later: String,
		later_id: u32,
	},
}

/// Faults in the numeric layout or wire form of a single version id.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
	#[error("{part} part {value} exceeds its maximum {max}")]
	PartOutOfRange { part: &'static str, value: u32, max: u32 },

	#[error("major {major} does not fit in a version id")]
	IdOverflow { major: u32 },

	#[error("failed to read transport version from wire: {0}")]
	Wire(#[from] postcard::Error),
}
