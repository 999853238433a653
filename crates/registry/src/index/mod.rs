//! Sealed transport version index.
//!
//! # Purpose
//!
//! Holds every declared transport version in id order together with the derived
//! compatibility constants. Negotiation code reads it on hot paths, so nothing
//! here locks or allocates after construction (apart from error values).
//!
//! # Mental Model
//!
//! 1. **Declare:** [`crate::VersionDeclarations::def`] validates each id through the
//!    [`crate::IdAccumulator`] and records the constant's name.
//! 2. **Seal:** [`crate::VersionDeclarations::seal`] closes the accumulator, runs
//!    [`build_index`] over the declarations and derives the constants in
//!    [`TransportVersionRegistry::from_index`].
//! 3. **Read:** the sealed [`TransportVersionRegistry`] is immutable and shared.
//!
//! # Invariants
//!
//! - Ids are unique and appear in declaration order.
//!   - Enforced in: [`crate::IdAccumulator::register`].
//!   - Failure symptom: two wire formats share an id across a rolling upgrade.
//!
//! - One name per id in the sealed index.
//!   - Enforced in: [`build_index`] when [`crate::IntegrityAudit`] is enabled.
//!   - Failure symptom: an alias leaks into [`TransportVersionRegistry::all`].
//!
//! - Compatibility pins are members of the index.
//!   - Enforced in: [`TransportVersionRegistry::from_index`].
//!   - Failure symptom: the compatibility floor names a version no node speaks.

mod build;

use std::collections::BTreeMap;
use std::ops::RangeBounds;

pub use build::{Declaration, VersionIndex, build_index};
use rustc_hash::FxHashMap as HashMap;

use crate::error::{RegistryError, VersionError};
use crate::version::TransportVersion;
use crate::wire;

/// Versions chosen by the integrator as compatibility floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityPins {
	/// Oldest version this process still negotiates with.
	pub minimum_compatible: TransportVersion,
	/// Oldest version accepted for cross-cluster search.
	pub minimum_ccs: TransportVersion,
}

/// Immutable, id-ordered registry of every known transport version.
#[derive(Debug)]
pub struct TransportVersionRegistry {
	by_id: BTreeMap<u32, TransportVersion>,
	id_names: HashMap<u32, &'static str>,
	by_name: HashMap<&'static str, TransportVersion>,
	latest: TransportVersion,
	minimum_compatible: TransportVersion,
	minimum_ccs: TransportVersion,
}

impl TransportVersionRegistry {
	/// Derives the latest version and checks the pins against the index.
	pub fn from_index(index: VersionIndex, pins: CompatibilityPins) -> Result<Self, RegistryError> {
		let latest = index
			.by_id
			.last_key_value()
			.map(|(_, version)| *version)
			.ok_or(RegistryError::Empty)?;

		for (role, pin) in [
			("minimum compatible", pins.minimum_compatible),
			("minimum ccs", pins.minimum_ccs),
		] {
			if !index.by_id.contains_key(&pin.id()) {
				return Err(RegistryError::UnknownPin { role, id: pin.id() });
			}
		}

		let by_name = index
			.names
			.iter()
			.map(|(&id, &name)| (name, TransportVersion::new(id)))
			.collect();

		tracing::debug!(
			versions = index.by_id.len(),
			latest = %latest,
			minimum_compatible = %pins.minimum_compatible,
			minimum_ccs = %pins.minimum_ccs,
			"sealed transport version registry"
		);

		Ok(Self {
			by_id: index.by_id,
			id_names: index.names,
			by_name,
			latest,
			minimum_compatible: pins.minimum_compatible,
			minimum_ccs: pins.minimum_ccs,
		})
	}

	/// Returns the highest registered version.
	#[inline]
	pub fn latest(&self) -> TransportVersion {
		self.latest
	}

	#[inline]
	pub fn minimum_compatible(&self) -> TransportVersion {
		self.minimum_compatible
	}

	#[inline]
	pub fn minimum_ccs(&self) -> TransportVersion {
		self.minimum_ccs
	}

	/// Returns every registered version in ascending id order.
	#[inline]
	pub fn all(&self) -> impl DoubleEndedIterator<Item = TransportVersion> + ExactSizeIterator + '_ {
		self.by_id.values().copied()
	}

	/// Returns registered versions whose ids fall in `range`, ascending.
	pub fn range<R: RangeBounds<u32>>(&self, range: R) -> impl DoubleEndedIterator<Item = TransportVersion> + '_ {
		self.by_id.range(range).map(|(_, version)| *version)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.by_id.len()
	}

	/// Always false for a sealed registry; present for API symmetry with `len`.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty()
	}

	#[inline]
	pub fn get(&self, id: u32) -> Option<TransportVersion> {
		self.by_id.get(&id).copied()
	}

	#[inline]
	pub fn is_known(&self, id: u32) -> bool {
		self.by_id.contains_key(&id)
	}

	/// Resolves an id received from a peer.
	///
	/// Unknown ids, typically from a newer node, still produce a version that
	/// compares correctly against registered ones.
	#[inline]
	pub fn from_id(&self, id: u32) -> TransportVersion {
		self.get(id).unwrap_or(TransportVersion::new(id))
	}

	/// Returns the highest registered version at or below `id`, or the zero
	/// version when `id` predates everything registered.
	pub fn best_known(&self, id: u32) -> TransportVersion {
		self.by_id
			.range(..=id)
			.next_back()
			.map(|(_, version)| *version)
			.unwrap_or(TransportVersion::ZERO)
	}

	/// Returns true if a peer speaking `version` can be negotiated with.
	#[inline]
	pub fn is_compatible(&self, version: TransportVersion) -> bool {
		version.on_or_after(self.minimum_compatible)
	}

	#[inline]
	pub fn is_ccs_compatible(&self, version: TransportVersion) -> bool {
		version.on_or_after(self.minimum_ccs)
	}

	/// Returns the constant name a version was declared under.
	pub fn name_of(&self, version: TransportVersion) -> Option<&'static str> {
		self.id_names.get(&version.id()).copied()
	}

	/// Looks a version up by its constant name.
	pub fn by_name(&self, name: &str) -> Result<TransportVersion, RegistryError> {
		self.by_name.get(name).copied().ok_or_else(|| RegistryError::UnknownName {
			name: name.to_string(),
			suggestion: self.suggest_name(name),
		})
	}

	/// Suggests a similar constant name using fuzzy matching.
	fn suggest_name(&self, name: &str) -> Option<&'static str> {
		self.by_name
			.keys()
			.map(|&candidate| (strsim::levenshtein(name, candidate), candidate))
			.filter(|&(distance, _)| distance <= 3)
			.min()
			.map(|(_, candidate)| candidate)
	}

	/// Decodes a version id from the wire and resolves it via [`Self::from_id`].
	pub fn read_version(&self, bytes: &[u8]) -> Result<TransportVersion, VersionError> {
		wire::decode_id(bytes).map(|id| self.from_id(id))
	}
}

#[cfg(test)]
mod tests;
