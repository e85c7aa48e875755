//! Users and the authentication exchange payloads.

// self
use crate::{_prelude::*, auth::UserId};

/// Platform user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// User identifier.
	pub id: UserId,
	/// Display name.
	pub name: String,
	/// Login email.
	pub email: String,
	/// Avatar URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last profile update.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Response to login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
	/// Access token.
	pub token: String,
	/// Refresh token.
	pub refresh_token: String,
	/// Authenticated user.
	pub user: User,
	/// Access token lifetime in seconds.
	pub expires_in: i64,
}

/// Response to `auth/refresh`.
///
/// Only `token` is guaranteed; a rotated `refreshToken` replaces the stored one when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
	/// New access token.
	pub token: String,
	/// Rotated refresh token, when the backend issues one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Access token lifetime in seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<i64>,
	/// Authenticated user, when echoed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user: Option<User>,
}

/// Credentials submitted to `auth/login`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
	/// Login email.
	pub email: String,
	/// Plain-text password.
	pub password: String,
}
impl LoginRequest {
	/// Creates a login payload.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self { email: email.into(), password: password.into() }
	}
}
impl Debug for LoginRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginRequest")
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Account details submitted to `auth/register`.
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
	/// Display name.
	pub name: String,
	/// Login email.
	pub email: String,
	/// Plain-text password.
	pub password: String,
}
impl RegisterRequest {
	/// Creates a registration payload.
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self { name: name.into(), email: email.into(), password: password.into() }
	}
}
impl Debug for RegisterRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RegisterRequest")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Partial profile update for `PATCH auth/me`. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
	/// New display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// New login email.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	/// New avatar URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn refresh_response_tolerates_missing_rotation() {
		let payload: RefreshResponse =
			serde_json::from_str(r#"{"token":"T2"}"#).expect("Minimal refresh payload should parse.");

		assert_eq!(payload.token, "T2");
		assert!(payload.refresh_token.is_none());

		let payload: RefreshResponse =
			serde_json::from_str(r#"{"token":"T2","refreshToken":"R2","expiresIn":900}"#)
				.expect("Rotating refresh payload should parse.");

		assert_eq!(payload.refresh_token.as_deref(), Some("R2"));
		assert_eq!(payload.expires_in, Some(900));
	}

	#[test]
	fn credential_payload_debug_hides_passwords() {
		let login = format!("{:?}", LoginRequest::new("a@b.c", "hunter2"));
		let register = format!("{:?}", RegisterRequest::new("Ada", "a@b.c", "hunter2"));

		assert!(!login.contains("hunter2"));
		assert!(!register.contains("hunter2"));
	}

	#[test]
	fn profile_update_omits_unset_fields() {
		let update = ProfileUpdate { name: Some("Ada".into()), ..Default::default() };

		assert_eq!(
			serde_json::to_value(&update).expect("Profile update should serialize."),
			serde_json::json!({ "name": "Ada" }),
		);
	}
}
