//! External brokerage account linking and sync.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{AccountId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{ConnectAccountRequest, ExternalAccount, Holding, SyncStatus},
};

def_group! { AccountsApi, "External account operations under `accounts/`." }
impl<T> AccountsApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists the user's linked accounts.
	pub async fn list(self, user: &UserId) -> Result<Vec<ExternalAccount>> {
		self.client.invoke_json(RequestDescriptor::get(["accounts", user.as_str()])).await
	}

	/// Links a new external account.
	pub async fn connect(
		&self,
		user: &UserId,
		request: &ConnectAccountRequest,
	) -> Result<ExternalAccount> {
		self.client
			.invoke_json(RequestDescriptor::post(["accounts", user.as_str(), "connect"]).json(request)?)
			.await
	}

	/// Unlinks an account.
	pub async fn disconnect(self, account: &AccountId) -> Result<()> {
		self.client.invoke_unit(RequestDescriptor::delete(["accounts", account.as_str()])).await
	}

	/// Starts a sync and returns its initial status.
	pub async fn sync(self, account: &AccountId) -> Result<SyncStatus> {
		self.client
			.invoke_json(RequestDescriptor::post(["accounts", account.as_str(), "sync"]))
			.await
	}

	/// Fetches the status of the latest sync.
	pub async fn sync_status(self, account: &AccountId) -> Result<SyncStatus> {
		self.client
			.invoke_json(RequestDescriptor::get(["accounts", account.as_str(), "sync-status"]))
			.await
	}

	/// Lists holdings imported from the account.
	pub async fn holdings(self, account: &AccountId) -> Result<Vec<Holding>> {
		self.client
			.invoke_json(RequestDescriptor::get(["accounts", account.as_str(), "holdings"]))
			.await
	}
}
