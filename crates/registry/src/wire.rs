//! Wire form of a transport version: the id as an unsigned varint.

use crate::error::VersionError;
use crate::version::TransportVersion;

/// Encodes `version` for the handshake header.
pub fn encode(version: TransportVersion) -> Result<Vec<u8>, VersionError> {
	Ok(postcard::to_allocvec(&version)?)
}

/// Decodes a version id written by [`encode`]. Trailing bytes are ignored.
pub fn decode_id(bytes: &[u8]) -> Result<u32, VersionError> {
	let (id, _rest) = postcard::take_from_bytes::<u32>(bytes)?;
	Ok(id)
}
