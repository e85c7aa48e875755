//! Per-call trace identifiers.

// crates.io
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Random identifier attached to every outbound call for end-to-end correlation.
///
/// A replayed call keeps the identifier of the call it replays; the refresh exchange gets its
/// own.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);
impl TraceId {
	/// Mints a new random (v4 UUID) identifier.
	pub fn generate() -> Self {
		Self(Uuid::new_v4().to_string())
	}

	/// Returns the identifier as sent on the wire.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Debug for TraceId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TraceId({})", self.0)
	}
}
impl Display for TraceId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn generated_ids_are_unique_uuids() {
		let first = TraceId::generate();
		let second = TraceId::generate();

		assert_ne!(first, second);
		assert!(Uuid::parse_str(first.as_str()).is_ok());
		assert_eq!(first.to_string(), first.as_str());
	}
}
