//! Mapping from transport version ids to human-readable release labels.
//!
//! The table is a TOML document:
//!
//! ```toml
//! current = "9.0.0"
//!
//! [[release]]
//! version = "8.15.0"
//! id = 8_702_00_2
//! ```
//!
//! `current` names the release under development and is attached to the latest
//! defined id when no release already claims it.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ReleaseError;
use crate::version::TransportVersion;

/// A `major.minor.revision` release label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
	pub major: u32,
	pub minor: u32,
	pub revision: u32,
}

impl ReleaseVersion {
	pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
		Self { major, minor, revision }
	}

	pub const fn next_revision(self) -> Self {
		Self {
			revision: self.revision + 1,
			..self
		}
	}
}

impl FromStr for ReleaseVersion {
	type Err = ReleaseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ReleaseError::InvalidLabel(s.to_string());
		let mut parts = s.split('.').map(|part| part.parse::<u32>().map_err(|_| invalid()));

		let major = parts.next().ok_or_else(invalid)??;
		let minor = parts.next().ok_or_else(invalid)??;
		let revision = parts.next().ok_or_else(invalid)??;
		if parts.next().is_some() {
			return Err(invalid());
		}

		Ok(Self::new(major, minor, revision))
	}
}

impl fmt::Display for ReleaseVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
	}
}

/// Releases sharing a single transport version id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReleaseSpan {
	first: ReleaseVersion,
	last: ReleaseVersion,
}

impl ReleaseSpan {
	fn single(release: ReleaseVersion) -> Self {
		Self {
			first: release,
			last: release,
		}
	}

	fn widen(&mut self, release: ReleaseVersion) {
		self.first = self.first.min(release);
		self.last = self.last.max(release);
	}
}

impl fmt::Display for ReleaseSpan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.first == self.last {
			write!(f, "{}", self.first)
		} else {
			write!(f, "{}-{}", self.first, self.last)
		}
	}
}

/// Release table file structure.
#[derive(Debug, Deserialize)]
struct ReleaseFile {
	current: Option<String>,
	#[serde(default)]
	release: Vec<ReleaseRecord>,
}

#[derive(Debug, Deserialize)]
struct ReleaseRecord {
	version: String,
	id: u32,
}

/// Id-ordered release table answering "which release carries this id".
#[derive(Debug, Clone, Default)]
pub struct ReleaseTable {
	releases: BTreeMap<u32, ReleaseSpan>,
}

impl ReleaseTable {
	/// Parses and validates a release table against the latest defined version.
	pub fn from_toml(src: &str, latest: TransportVersion) -> Result<Self, ReleaseError> {
		let file: ReleaseFile = toml::from_str(src)?;
		let records = file
			.release
			.into_iter()
			.map(|record| Ok((record.version.parse::<ReleaseVersion>()?, record.id)))
			.collect::<Result<Vec<_>, ReleaseError>>()?;
		let current = file.current.as_deref().map(str::parse::<ReleaseVersion>).transpose()?;

		Self::new(records, current, latest)
	}

	/// Builds a table from `(release, id)` pairs.
	///
	/// Every id must be at most `latest`, and release labels must increase with
	/// their ids.
	pub fn new(
		records: impl IntoIterator<Item = (ReleaseVersion, u32)>,
		current: Option<ReleaseVersion>,
		latest: TransportVersion,
	) -> Result<Self, ReleaseError> {
		let latest = latest.id();
		let mut releases: BTreeMap<u32, ReleaseSpan> = BTreeMap::new();

		for (release, id) in records {
			if id > latest {
				return Err(ReleaseError::ReleaseBeyondLatest {
					release: release.to_string(),
					id,
					latest,
				});
			}
			releases
				.entry(id)
				.and_modify(|span| span.widen(release))
				.or_insert_with(|| ReleaseSpan::single(release));
		}

		if let Some(current) = current {
			releases.entry(latest).or_insert_with(|| ReleaseSpan::single(current));
		}

		for ((&earlier_id, earlier), (&later_id, later)) in releases.iter().zip(releases.iter().skip(1)) {
			if later.first <= earlier.last {
				return Err(ReleaseError::ReleaseOrder {
					earlier: earlier.last.to_string(),
					earlier_id,
					later: later.first.to_string(),
					later_id,
				});
			}
		}

		Ok(Self { releases })
	}

	/// Returns the number of distinct ids carrying a release.
	pub fn len(&self) -> usize {
		self.releases.len()
	}

	pub fn is_empty(&self) -> bool {
		self.releases.is_empty()
	}

	/// Returns the best-matching release label for `id`.
	///
	/// * A release id yields its label, or `first-last` when several releases
	///   share it.
	/// * Any other id yields `lower-upper`: the revision after the nearest
	///   release below, and the nearest release above (or `snapshot[<id>]` past
	///   the last release). Equal bounds collapse to a single label.
	/// * An id below every release yields `<upper`.
	pub fn lookup(&self, id: u32) -> String {
		if let Some(span) = self.releases.get(&id) {
			return span.to_string();
		}

		let upper = match self.releases.range((Bound::Excluded(id), Bound::Unbounded)).next() {
			Some((_, span)) => span.first.to_string(),
			None => format!("snapshot[{id}]"),
		};

		match self.releases.range(..id).next_back() {
			Some((_, span)) => {
				let lower = span.last.next_revision().to_string();
				if lower == upper { lower } else { format!("{lower}-{upper}") }
			}
			None if self.releases.is_empty() => upper,
			None => format!("<{upper}"),
		}
	}

	/// Converts the table into an owned lookup function.
	pub fn into_lookup(self) -> impl Fn(u32) -> String + Send + Sync + 'static {
		move |id| self.lookup(id)
	}
}
