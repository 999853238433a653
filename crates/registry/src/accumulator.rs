//! Build-time accumulator that validates ids as they are declared.

use std::collections::BTreeSet;

use crate::error::RegistryError;
use crate::version::TransportVersion;

/// Tracks every id declared so far and rejects duplicates and out-of-order ids.
///
/// Ids must be declared in non-decreasing order. Two contributors adding a
/// version at the end of the list in parallel then collide on the same id, or
/// on the ordering, when their changes are merged.
///
/// Once [`IdAccumulator::close`] has run every further registration fails with
/// [`RegistryError::Closed`].
#[derive(Debug)]
pub struct IdAccumulator {
	ids: Option<BTreeSet<u32>>,
}

impl Default for IdAccumulator {
	fn default() -> Self {
		Self::new()
	}
}

impl IdAccumulator {
	pub fn new() -> Self {
		Self {
			ids: Some(BTreeSet::new()),
		}
	}

	/// Validates `id` against every earlier declaration and records it.
	pub fn register(&mut self, id: u32) -> Result<TransportVersion, RegistryError> {
		let ids = self.ids.as_mut().ok_or(RegistryError::Closed)?;

		if ids.contains(&id) {
			return Err(RegistryError::DuplicateId { id });
		}
		if let Some(&last) = ids.last()
			&& id < last
		{
			return Err(RegistryError::OutOfOrder { id, last });
		}

		ids.insert(id);
		tracing::trace!(id, "declared transport version");
		Ok(TransportVersion::new(id))
	}

	/// Returns the highest id declared so far.
	pub fn last(&self) -> Option<u32> {
		self.ids.as_ref().and_then(|ids| ids.last().copied())
	}

	/// Returns the number of ids declared so far, or zero once closed.
	pub fn len(&self) -> usize {
		self.ids.as_ref().map_or(0, BTreeSet::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_closed(&self) -> bool {
		self.ids.is_none()
	}

	/// Discards the declared set and returns how many ids it held.
	///
	/// Closing twice returns `Closed`.
	pub fn close(&mut self) -> Result<usize, RegistryError> {
		self.ids.take().map(|ids| ids.len()).ok_or(RegistryError::Closed)
	}
}
