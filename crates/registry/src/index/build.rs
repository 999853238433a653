use std::collections::BTreeMap;

use rustc_hash::FxHashMap as HashMap;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::version::TransportVersion;

/// A named version constant, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
	pub name: &'static str,
	pub version: TransportVersion,
}

/// Ordered id table produced by [`build_index`], consumed by
/// [`crate::TransportVersionRegistry::from_index`].
#[derive(Debug, Default)]
pub struct VersionIndex {
	pub(crate) by_id: BTreeMap<u32, TransportVersion>,
	pub(crate) names: HashMap<u32, &'static str>,
}

impl VersionIndex {
	pub fn len(&self) -> usize {
		self.by_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty()
	}
}

/// Collects every non-ignored declaration into an ordered id table.
///
/// With the integrity audit enabled, two names sharing an id fail with
/// [`RegistryError::DuplicateMapping`]. This is independent of the accumulator's
/// own duplicate check and catches declarations that never went through it,
/// such as an alias missing from the ignore list. With the audit disabled the
/// later declaration wins.
pub fn build_index(declarations: &[Declaration], config: &RegistryConfig) -> Result<VersionIndex, RegistryError> {
	let audit = config.audit.is_enabled();
	let mut index = VersionIndex {
		by_id: BTreeMap::new(),
		names: HashMap::with_capacity_and_hasher(declarations.len(), Default::default()),
	};

	for decl in declarations {
		if config.is_ignored(decl.name) {
			continue;
		}

		let id = decl.version.id();
		index.by_id.insert(id, decl.version);

		if let Some(existing) = index.names.insert(id, decl.name)
			&& audit
			&& existing != decl.name
		{
			return Err(RegistryError::DuplicateMapping {
				id,
				existing,
				name: decl.name,
			});
		}
	}

	Ok(index)
}
