use crate::accumulator::IdAccumulator;
use crate::config::{IntegrityAudit, RegistryConfig};
use crate::error::RegistryError;
use crate::index::{CompatibilityPins, Declaration, TransportVersionRegistry, build_index};
use crate::version::TransportVersion;

/// Declaration sequence for transport versions.
///
/// Each [`def`](Self::def) goes through the [`IdAccumulator`]; [`seal`](Self::seal)
/// consumes the builder, so no declaration can follow it.
#[derive(Debug)]
pub struct VersionDeclarations {
	ids: IdAccumulator,
	declared: Vec<Declaration>,
	config: RegistryConfig,
}

impl Default for VersionDeclarations {
	fn default() -> Self {
		Self::new(RegistryConfig::default())
	}
}

impl VersionDeclarations {
	pub fn new(config: RegistryConfig) -> Self {
		Self {
			ids: IdAccumulator::new(),
			declared: Vec::new(),
			config,
		}
	}

	/// Returns the number of named constants recorded so far, aliases included.
	pub fn len(&self) -> usize {
		self.declared.len()
	}

	pub fn is_empty(&self) -> bool {
		self.declared.is_empty()
	}

	pub fn declarations(&self) -> &[Declaration] {
		&self.declared
	}

	/// Declares a new version constant.
	pub fn def(&mut self, name: &'static str, id: u32) -> Result<TransportVersion, RegistryError> {
		let version = self.ids.register(id)?;
		self.declared.push(Declaration { name, version });
		Ok(version)
	}

	/// Records another name for an already declared version.
	///
	/// Aliases bypass the accumulator and must be listed in
	/// [`RegistryConfig::ignored`]; the integrity audit rejects them otherwise.
	pub fn alias(&mut self, name: &'static str, version: TransportVersion) -> TransportVersion {
		self.declared.push(Declaration { name, version });
		version
	}

	/// Closes the accumulator and builds the sealed registry.
	pub fn seal(mut self, pins: CompatibilityPins) -> Result<TransportVersionRegistry, RegistryError> {
		let declared_ids = self.ids.close()?;
		if self.config.audit == IntegrityAudit::Disabled {
			tracing::debug!(declared_ids, "sealing transport versions without the integrity audit");
		}

		let index = build_index(&self.declared, &self.config)?;
		tracing::debug!(
			declared_ids,
			named = self.declared.len(),
			indexed = index.len(),
			"built transport version index"
		);

		TransportVersionRegistry::from_index(index, pins)
	}
}
