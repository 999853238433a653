//! Process-wide transport version catalog.
//!
//! The catalog is declared, validated and sealed on first access and is
//! immutable afterwards. Call [`try_init`] during startup, before accepting
//! connections that negotiate a wire format, to surface catalog faults as an
//! error instead of a panic on first use.

use std::sync::{LazyLock, OnceLock};

use wirever_registry::{
	CompatibilityPins, RegistryConfig, RegistryError, ReleaseError, ReleaseTable, TransportVersion, TransportVersionRegistry,
	VersionDeclarations,
};

mod versions;

pub use versions::TransportVersions;

/// Embedded release table.
const RELEASES_TOML: &str = include_str!("../resources/releases.toml");

/// Errors that can occur while building the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error(transparent)]
	Registry(#[from] RegistryError),
	#[error(transparent)]
	Release(#[from] ReleaseError),
}

/// Declared versions, the sealed registry built from them, and the release
/// label table.
#[derive(Debug)]
pub struct Catalog {
	pub versions: TransportVersions,
	registry: TransportVersionRegistry,
	releases: ReleaseTable,
}

impl Catalog {
	pub fn build(config: RegistryConfig) -> Result<Self, CatalogError> {
		let mut decls = VersionDeclarations::new(config);
		let versions = TransportVersions::declare(&mut decls)?;

		// Should be the version of the last minor of the previous major.
		let minimum_compatible = decls.alias("MINIMUM_COMPATIBLE", versions.V_7_17_0);
		// Should be the version of the previous minor release.
		let minimum_ccs = decls.alias("MINIMUM_CCS_VERSION", versions.V_8_15_0);

		let registry = decls.seal(CompatibilityPins {
			minimum_compatible,
			minimum_ccs,
		})?;
		let releases = ReleaseTable::from_toml(RELEASES_TOML, registry.latest())?;

		Ok(Self {
			versions,
			registry,
			releases,
		})
	}

	#[inline]
	pub fn registry(&self) -> &TransportVersionRegistry {
		&self.registry
	}

	pub fn lookup_release_label(&self, id: u32) -> String {
		self.releases.lookup(id)
	}
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Builds the process-wide catalog with `config` unless it already exists.
pub fn try_init(config: RegistryConfig) -> Result<&'static Catalog, CatalogError> {
	if let Some(catalog) = CATALOG.get() {
		return Ok(catalog);
	}
	let built = Catalog::build(config)?;
	Ok(CATALOG.get_or_init(|| built))
}

/// Returns the process-wide catalog, building it with the default config on
/// first use.
///
/// # Panics
///
/// Panics if the catalog is invalid. A broken catalog cannot negotiate safely.
pub fn catalog() -> &'static Catalog {
	CATALOG.get_or_init(|| match Catalog::build(RegistryConfig::default()) {
		Ok(catalog) => catalog,
		Err(e) => {
			tracing::error!(error = %e, "transport version catalog is invalid");
			panic!("transport version catalog: {e}");
		}
	})
}

pub static VERSIONS: LazyLock<&'static TransportVersions> = LazyLock::new(|| &catalog().versions);
pub static REGISTRY: LazyLock<&'static TransportVersionRegistry> = LazyLock::new(|| catalog().registry());

#[inline]
pub fn versions() -> &'static TransportVersions {
	&catalog().versions
}

#[inline]
pub fn registry() -> &'static TransportVersionRegistry {
	catalog().registry()
}

/// The highest transport version defined in this build.
#[inline]
pub fn latest() -> TransportVersion {
	registry().latest()
}

#[inline]
pub fn minimum_compatible() -> TransportVersion {
	registry().minimum_compatible()
}

#[inline]
pub fn minimum_ccs_version() -> TransportVersion {
	registry().minimum_ccs()
}

/// Every registered version in ascending id order.
pub fn all() -> impl DoubleEndedIterator<Item = TransportVersion> + ExactSizeIterator {
	registry().all()
}

/// Maps any id to the best-matching release label, e.g. `8.15.0` or
/// `8.15.4-8.16.0`.
pub fn lookup_release_label(id: u32) -> String {
	catalog().lookup_release_label(id)
}

#[cfg(test)]
mod tests;
