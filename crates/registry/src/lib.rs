//! Transport version registry.
//!
//! Every revision of the wire serialization protocol gets a unique, increasing
//! [`TransportVersion`]. Versions are declared once at startup through
//! [`VersionDeclarations`], validated by the [`IdAccumulator`], and sealed into
//! an immutable [`TransportVersionRegistry`] that negotiation code reads without
//! locking.
//!
//! # Modules
//!
//! - [`version`] - The version identifier and its `M_NNN_SS_P` layout
//! - [`accumulator`] - Uniqueness and ordering checks during declaration
//! - [`builder`] - Declaration sequence consumed by `seal`
//! - [`index`] - Sealed registry and derived compatibility constants
//! - [`release`] - Release label lookup
//! - [`wire`] - Varint wire form of a version id
//! - [`config`] - Integrity audit and ignore list

pub mod accumulator;
pub mod builder;
pub mod config;
pub mod error;
pub mod index;
mod macros;
pub mod release;
pub mod version;
pub mod wire;

pub use accumulator::IdAccumulator;
pub use builder::VersionDeclarations;
pub use config::{ConfigError, DEFAULT_IGNORED, IntegrityAudit, RegistryConfig};
pub use error::{RegistryError, ReleaseError, VersionError};
pub use index::{CompatibilityPins, Declaration, TransportVersionRegistry, VersionIndex, build_index};
pub use release::{ReleaseTable, ReleaseVersion};
pub use version::{TransportVersion, VersionParts};
