//! Registry build configuration.

use std::borrow::Cow;

use serde::Deserialize;

/// Names that never enter the sealed index: the zero sentinel and aliases of
/// other constants.
pub const DEFAULT_IGNORED: &[&str] = &["ZERO", "CURRENT", "MINIMUM_COMPATIBLE", "MINIMUM_CCS_VERSION"];

/// Whether the sealed index re-verifies that every id has a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrityAudit {
	Enabled,
	Disabled,
}

impl IntegrityAudit {
	/// Returns the audit mode for the current build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(any(test, debug_assertions, feature = "integrity-audit")) {
			IntegrityAudit::Enabled
		} else {
			IntegrityAudit::Disabled
		}
	}

	#[inline]
	pub fn is_enabled(self) -> bool {
		matches!(self, IntegrityAudit::Enabled)
	}
}

impl Default for IntegrityAudit {
	fn default() -> Self {
		Self::for_build()
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to parse registry config: {0}")]
	Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RegistryConfig {
	pub audit: IntegrityAudit,
	/// Declared names excluded from the sealed index.
	pub ignored: Vec<Cow<'static, str>>,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			audit: IntegrityAudit::for_build(),
			ignored: DEFAULT_IGNORED.iter().map(|&name| Cow::Borrowed(name)).collect(),
		}
	}
}

impl RegistryConfig {
	/// Parses a config table, e.g. `audit = "disabled"`.
	///
	/// Missing keys fall back to [`RegistryConfig::default`].
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}

	pub fn audit(mut self, audit: IntegrityAudit) -> Self {
		self.audit = audit;
		self
	}

	pub fn ignored(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
		self.ignored = names.into_iter().map(Cow::Borrowed).collect();
		self
	}

	pub(crate) fn is_ignored(&self, name: &str) -> bool {
		self.ignored.iter().any(|ignored| ignored == name)
	}
}
