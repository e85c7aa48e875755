//! Session lifecycle: registration, login, logout, refresh, and the current profile.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::CredentialPair,
	client::RequestDescriptor,
	http::ApiTransport,
	model::{AuthResponse, LoginRequest, ProfileUpdate, RefreshResponse, RegisterRequest, User},
};

def_group! { AuthApi, "Session operations under `auth/`." }
impl<T> AuthApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates an account and stores the issued credential pair.
	pub async fn register(self, request: &RegisterRequest) -> Result<AuthResponse> {
		let descriptor =
			RequestDescriptor::post(["auth", "register"]).json(request)?.without_refresh();

		self.establish(descriptor).await
	}

	/// Exchanges email and password for a session and stores the issued credential pair.
	///
	/// A 401 here means the credentials were rejected and surfaces as [`Error::Api`].
	pub async fn login(self, request: &LoginRequest) -> Result<AuthResponse> {
		let descriptor = RequestDescriptor::post(["auth", "login"]).json(request)?.without_refresh();

		self.establish(descriptor).await
	}

	/// Ends the session.
	///
	/// Without stored credentials this is a local no-op. Otherwise the backend is notified and
	/// the store is cleared whatever the outcome; a 401 from the backend is ignored since the
	/// session is already gone.
	pub async fn logout(self) -> Result<()> {
		if self.client.store().load().await?.is_none() {
			return Ok(());
		}

		let result = self
			.client
			.invoke_unit(RequestDescriptor::post(["auth", "logout"]).without_refresh())
			.await;

		self.client.store().clear().await?;

		match result {
			Err(Error::Api(err)) if err.status == 401 => Ok(()),
			other => other,
		}
	}

	/// Exchanges the stored refresh token for a new access token.
	///
	/// Shares the client's refresh guard with 401 recovery, so it never races an automatic
	/// refresh. Failure clears the store and yields [`Error::ReauthenticationRequired`].
	pub async fn refresh(self) -> Result<RefreshResponse> {
		self.client.refresh_session().await
	}

	/// Returns `true` while a credential pair is stored.
	pub async fn is_authenticated(self) -> Result<bool> {
		Ok(self.client.store().load().await?.is_some())
	}

	/// Fetches the current user's profile.
	pub async fn me(self) -> Result<User> {
		self.client.invoke_json(RequestDescriptor::get(["auth", "me"])).await
	}

	/// Updates the current user's profile.
	pub async fn update_profile(self, update: &ProfileUpdate) -> Result<User> {
		self.client.invoke_json(RequestDescriptor::patch(["auth", "me"]).json(update)?).await
	}

	async fn establish(self, descriptor: RequestDescriptor) -> Result<AuthResponse> {
		let response = self.client.invoke_json::<AuthResponse>(descriptor).await?;

		self.client
			.store()
			.save(CredentialPair::new(response.token.as_str(), response.refresh_token.as_str()))
			.await?;

		Ok(response)
	}
}
