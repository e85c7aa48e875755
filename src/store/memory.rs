//! Thread-safe in-memory [`CredentialStore`] implementation for tests and ephemeral sessions.

// self
use crate::{
	_prelude::*,
	auth::CredentialPair,
	store::{self, CompareAndSwapOutcome, CredentialStore, StoreFuture},
};

type Slot = Arc<RwLock<Option<CredentialPair>>>;

/// Thread-safe storage backend that keeps the pair in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl MemoryStore {
	/// Creates a store pre-seeded with `pair`.
	pub fn with_pair(pair: CredentialPair) -> Self {
		Self(Arc::new(RwLock::new(Some(pair))))
	}

	/// Returns a snapshot of the stored pair without going through the async contract.
	pub fn snapshot(&self) -> Option<CredentialPair> {
		self.0.read().clone()
	}

	fn cas_now(
		slot: Slot,
		expected_refresh: &str,
		replacement: CredentialPair,
	) -> CompareAndSwapOutcome {
		let mut guard = slot.write();
		let outcome = store::swap_outcome(guard.as_ref(), expected_refresh);

		if matches!(outcome, CompareAndSwapOutcome::Updated) {
			*guard = Some(replacement);
		}

		outcome
	}
}
impl CredentialStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<CredentialPair>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().clone()) })
	}

	fn save(&self, pair: CredentialPair) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(pair);

			Ok(())
		})
	}

	fn clear(&self) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			slot.write().take();

			Ok(())
		})
	}

	fn compare_and_swap<'a>(
		&'a self,
		expected_refresh: &'a str,
		replacement: CredentialPair,
	) -> StoreFuture<'a, CompareAndSwapOutcome> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(Self::cas_now(slot, expected_refresh, replacement)) })
	}
}
