//! Access/refresh credential pair persisted by credential stores.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Complete credential pair issued by login, registration, or refresh.
///
/// The type only exists as a whole: stores persist and clear both secrets together, so a
/// refresh token can never be observed without its access token (or vice versa).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPair {
	/// Short-lived bearer credential attached to API calls.
	pub access_token: TokenSecret,
	/// Longer-lived secret exchanged for a new access token.
	pub refresh_token: TokenSecret,
}
impl CredentialPair {
	/// Creates a pair from raw token strings.
	pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: TokenSecret::new(refresh_token),
		}
	}

	/// Returns a copy with the access token replaced and, when provided, the refresh token
	/// rotated as well.
	pub fn rotate(&self, access_token: TokenSecret, refresh_token: Option<TokenSecret>) -> Self {
		Self {
			access_token,
			refresh_token: refresh_token.unwrap_or_else(|| self.refresh_token.clone()),
		}
	}
}
impl Debug for CredentialPair {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialPair")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &"<redacted>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn rotate_keeps_refresh_token_unless_replaced() {
		let pair = CredentialPair::new("T1", "R1");
		let access_only = pair.rotate(TokenSecret::new("T2"), None);

		assert_eq!(access_only.access_token.expose(), "T2");
		assert_eq!(access_only.refresh_token.expose(), "R1");

		let both = pair.rotate(TokenSecret::new("T3"), Some(TokenSecret::new("R3")));

		assert_eq!(both.access_token.expose(), "T3");
		assert_eq!(both.refresh_token.expose(), "R3");
	}

	#[test]
	fn debug_redacts_both_tokens() {
		let rendered = format!("{:?}", CredentialPair::new("access-secret", "refresh-secret"));

		assert!(!rendered.contains("access-secret"));
		assert!(!rendered.contains("refresh-secret"));
	}
}
