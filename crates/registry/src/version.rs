//! Transport version identifier and its numeric layout.
//!
//! An id is a decimal integer laid out as `M_NNN_SS_P`:
//!
//! | Part | Digits | Meaning |
//! |------|--------|---------|
//! | `M` | 1-2 | major generation |
//! | `NNN` | 3 | server sequence |
//! | `SS` | 2 | variant sequence, reserved for a parallel deployment track |
//! | `P` | 1 | patch sequence |
//!
//! The layout is wire-visible and must not change without a major migration.

use std::fmt;

use serde::Serialize;

use crate::error::VersionError;

const MAJOR_STRIDE: u32 = 1_000_000;
const SERVER_STRIDE: u32 = 1_000;
const VARIANT_STRIDE: u32 = 10;

const SERVER_MAX: u32 = 999;
const VARIANT_MAX: u32 = 99;
const PATCH_MAX: u32 = 9;

/// One revision of the wire serialization protocol.
///
/// Instances come from [`crate::IdAccumulator::register`] or from a sealed
/// [`crate::TransportVersionRegistry`]; application code never builds one from a
/// bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TransportVersion(u32);

impl TransportVersion {
	/// The placeholder version with id `0`.
	pub(crate) const ZERO: Self = Self(0);

	#[inline]
	pub(crate) const fn new(id: u32) -> Self {
		Self(id)
	}

	/// Returns the numeric id.
	#[inline]
	pub const fn id(self) -> u32 {
		self.0
	}

	/// Splits the id into its `M_NNN_SS_P` parts.
	#[inline]
	pub const fn parts(self) -> VersionParts {
		VersionParts::from_id(self.0)
	}

	#[inline]
	pub fn on_or_after(self, other: TransportVersion) -> bool {
		self >= other
	}

	#[inline]
	pub fn before(self, other: TransportVersion) -> bool {
		self < other
	}

	/// Returns true if `lower <= self < upper`.
	#[inline]
	pub fn between(self, lower: TransportVersion, upper: TransportVersion) -> bool {
		self.on_or_after(lower) && self.before(upper)
	}

	/// Returns true if `self` is `base` or a later patch in the same
	/// two-digit patch bucket (`id / 100`).
	///
	/// Used to gate backported wire changes: a feature added in
	/// `8_702_00_4` is present on `8_702_00_5` but not on `8_703_00_0`,
	/// which may predate the backport on its own line.
	pub fn is_patch_from(self, base: TransportVersion) -> bool {
		self.on_or_after(base) && self.0 / 100 == base.0 / 100
	}
}

impl fmt::Display for TransportVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Decomposed `M_NNN_SS_P` view of a version id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionParts {
	pub major: u32,
	pub server: u16,
	pub variant: u8,
	pub patch: u8,
}

impl VersionParts {
	/// Decomposes an id. Every `u32` has a decomposition.
	pub const fn from_id(id: u32) -> Self {
		Self {
			major: id / MAJOR_STRIDE,
			server: ((id / SERVER_STRIDE) % (SERVER_MAX + 1)) as u16,
			variant: ((id / VARIANT_STRIDE) % (VARIANT_MAX + 1)) as u8,
			patch: (id % (PATCH_MAX + 1)) as u8,
		}
	}

	/// Recomposes the id, rejecting parts wider than their field.
	pub fn to_id(self) -> Result<u32, VersionError> {
		check_part("server", self.server as u32, SERVER_MAX)?;
		check_part("variant", self.variant as u32, VARIANT_MAX)?;
		check_part("patch", self.patch as u32, PATCH_MAX)?;

		self.major
			.checked_mul(MAJOR_STRIDE)
			.and_then(|id| id.checked_add(self.server as u32 * SERVER_STRIDE))
			.and_then(|id| id.checked_add(self.variant as u32 * VARIANT_STRIDE))
			.and_then(|id| id.checked_add(self.patch as u32))
			.ok_or(VersionError::IdOverflow { major: self.major })
	}
}

fn check_part(part: &'static str, value: u32, max: u32) -> Result<(), VersionError> {
	if value > max {
		return Err(VersionError::PartOutOfRange { part, value, max });
	}
	Ok(())
}

#[cfg(test)]
mod tests;
