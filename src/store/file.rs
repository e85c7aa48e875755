//! File-backed [`CredentialStore`] that survives process restarts.
//!
//! The snapshot is a JSON object keyed by the fixed names [`ACCESS_TOKEN_KEY`] and
//! [`REFRESH_TOKEN_KEY`]. Writes go through a temporary file and an atomic rename.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	auth::{CredentialPair, TokenSecret},
	store::{self, CompareAndSwapOutcome, CredentialStore, StoreError, StoreFuture},
};

/// Key holding the access token in the persisted snapshot.
pub const ACCESS_TOKEN_KEY: &str = "authToken";
/// Key holding the refresh token in the persisted snapshot.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[derive(Default, Serialize, Deserialize)]
struct Snapshot {
	#[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
	access_token: Option<TokenSecret>,
	#[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
	refresh_token: Option<TokenSecret>,
}
impl Snapshot {
	// A half-written snapshot is treated as empty.
	fn into_pair(self) -> Option<CredentialPair> {
		match (self.access_token, self.refresh_token) {
			(Some(access_token), Some(refresh_token)) =>
				Some(CredentialPair { access_token, refresh_token }),
			_ => None,
		}
	}
}

/// Persists the credential pair to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<Option<CredentialPair>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let pair = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(pair)) })
	}

	/// Location of the snapshot file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<Option<CredentialPair>, StoreError> {
		if !path.exists() {
			return Ok(None);
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		if bytes.iter().all(u8::is_ascii_whitespace) {
			return Ok(None);
		}

		let snapshot: Snapshot =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(snapshot.into_pair())
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}
		Ok(())
	}

	fn persist_locked(&self, contents: Option<&CredentialPair>) -> Result<(), StoreError> {
		let Some(pair) = contents else {
			return match fs::remove_file(&self.path) {
				Ok(()) => Ok(()),
				Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
				Err(e) => Err(StoreError::Backend {
					message: format!("Failed to remove {}: {e}", self.path.display()),
				}),
			};
		};

		Self::ensure_parent_exists(&self.path)?;

		let snapshot = Snapshot {
			access_token: Some(pair.access_token.clone()),
			refresh_token: Some(pair.refresh_token.clone()),
		};
		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize credential snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl CredentialStore for FileStore {
	fn load(&self) -> StoreFuture<'_, Option<CredentialPair>> {
		Box::pin(async move { Ok(self.inner.read().clone()) })
	}

	fn save(&self, pair: CredentialPair) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			self.persist_locked(Some(&pair))?;
			*guard = Some(pair);

			Ok(())
		})
	}

	fn clear(&self) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			self.persist_locked(None)?;
			guard.take();

			Ok(())
		})
	}

	fn compare_and_swap<'a>(
		&'a self,
		expected_refresh: &'a str,
		replacement: CredentialPair,
	) -> StoreFuture<'a, CompareAndSwapOutcome> {
		Box::pin(async move {
			let mut guard = self.inner.write();
			let outcome = store::swap_outcome(guard.as_ref(), expected_refresh);

			if matches!(outcome, CompareAndSwapOutcome::Updated) {
				self.persist_locked(Some(&replacement))?;
				*guard = Some(replacement);
			}

			Ok(outcome)
		})
	}
}
