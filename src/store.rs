//! Storage contracts and built-in credential store implementations.
//!
//! The client never touches ambient storage directly; it talks to an injected
//! [`CredentialStore`]. Every operation is atomic with respect to the pair: readers see
//! either a complete [`CredentialPair`] or nothing.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::CredentialPair};

/// Boxed future returned by [`CredentialStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract implemented by credential stores.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Fetches the stored pair, if present.
	fn load(&self) -> StoreFuture<'_, Option<CredentialPair>>;

	/// Persists or wholesale replaces the stored pair.
	fn save(&self, pair: CredentialPair) -> StoreFuture<'_, ()>;

	/// Removes both secrets. Clearing an empty store succeeds.
	fn clear(&self) -> StoreFuture<'_, ()>;

	/// Atomically replaces the pair if its refresh secret still matches `expected_refresh`.
	fn compare_and_swap<'a>(
		&'a self,
		expected_refresh: &'a str,
		replacement: CredentialPair,
	) -> StoreFuture<'a, CompareAndSwapOutcome>;
}

/// Result of a compare-and-swap attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompareAndSwapOutcome {
	/// The refresh secret matched the expected value and the pair was replaced.
	Updated,
	/// A pair exists but its refresh secret did not match.
	RefreshMismatch,
	/// The store is empty.
	Missing,
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

pub(crate) fn swap_outcome(
	current: Option<&CredentialPair>,
	expected_refresh: &str,
) -> CompareAndSwapOutcome {
	match current {
		Some(existing) if existing.refresh_token.matches(expected_refresh) =>
			CompareAndSwapOutcome::Updated,
		Some(_) => CompareAndSwapOutcome::RefreshMismatch,
		None => CompareAndSwapOutcome::Missing,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn store_error_converts_into_client_error_with_source() {
		let store_error = StoreError::Backend { message: "keychain locked".into() };
		let client_error: Error = store_error.clone().into();

		assert!(matches!(client_error, Error::Storage(_)));
		assert!(client_error.to_string().contains("keychain locked"));

		let source = StdError::source(&client_error)
			.expect("Client error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn swap_outcome_compares_refresh_secret() {
		let pair = CredentialPair::new("T1", "R1");

		assert_eq!(swap_outcome(Some(&pair), "R1"), CompareAndSwapOutcome::Updated);
		assert_eq!(swap_outcome(Some(&pair), "R0"), CompareAndSwapOutcome::RefreshMismatch);
		assert_eq!(swap_outcome(None, "R1"), CompareAndSwapOutcome::Missing);
	}

	#[test]
	fn compare_and_swap_outcome_can_be_serialized() {
		let payload = serde_json::to_string(&CompareAndSwapOutcome::Updated)
			.expect("CompareAndSwapOutcome should serialize to JSON.");

		assert_eq!(payload, "\"Updated\"");
	}
}
