//! Authenticated API client: credential attachment, trace identifiers, and 401 recovery.
//!
//! [`ApiClient`] owns the transport, the injected [`CredentialStore`], and the refresh guard
//! shared by every clone. Operation groups ([`ApiClient::portfolio`], [`ApiClient::auth`], ...)
//! are thin typed handles that describe a request and hand it to the client's invoke path.

pub mod descriptor;
pub mod refresh;
pub mod trace;

mod invoke;

pub use descriptor::*;
pub use refresh::*;
pub use trace::*;

// self
use crate::{
	_prelude::*,
	api::{
		AccountsApi, AnalyticsApi, AuthApi, HealthApi, JournalApi, MarketApi, NotificationsApi,
		OrdersApi, PortfolioApi, SocialApi, TransactionsApi,
	},
	config::ClientConfig,
	http::ApiTransport,
	store::CredentialStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// Entry point for every FinFlow API operation.
///
/// Each call reads the credential store, attaches the access token as a bearer credential
/// plus a fresh trace identifier, and dispatches through the transport. A 401 triggers at
/// most one refresh (coalesced across concurrent callers) and at most one replay of the
/// original request. When the session cannot be renewed, the store is cleared and the call
/// fails with [`Error::ReauthenticationRequired`].
pub struct ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	transport: Arc<T>,
	store: Arc<dyn CredentialStore>,
	config: ClientConfig,
	refresh_metrics: Arc<RefreshMetrics>,
	refresh_guard: Arc<AsyncMutex<()>>,
}
impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		config: ClientConfig,
		store: Arc<dyn CredentialStore>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			config,
			refresh_metrics: Default::default(),
			refresh_guard: Default::default(),
		}
	}

	/// Credential store backing this client.
	pub fn store(&self) -> &Arc<dyn CredentialStore> {
		&self.store
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Counters describing refresh activity across all clones of this client.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.refresh_metrics
	}

	/// Session operations (`auth/*`).
	pub fn auth(&self) -> AuthApi<'_, T> {
		AuthApi::new(self)
	}

	/// Portfolio and holdings operations (`portfolio/*`).
	pub fn portfolio(&self) -> PortfolioApi<'_, T> {
		PortfolioApi::new(self)
	}

	/// Transaction operations (`trading/transactions/*`).
	pub fn transactions(&self) -> TransactionsApi<'_, T> {
		TransactionsApi::new(self)
	}

	/// Order operations (`trading/orders/*`).
	pub fn orders(&self) -> OrdersApi<'_, T> {
		OrdersApi::new(self)
	}

	/// Trade journal operations (`journal/*`).
	pub fn journal(&self) -> JournalApi<'_, T> {
		JournalApi::new(self)
	}

	/// External account operations (`accounts/*`).
	pub fn accounts(&self) -> AccountsApi<'_, T> {
		AccountsApi::new(self)
	}

	/// Social operations (`social/*`).
	pub fn social(&self) -> SocialApi<'_, T> {
		SocialApi::new(self)
	}

	/// Analytics operations (`analytics/*`).
	pub fn analytics(&self) -> AnalyticsApi<'_, T> {
		AnalyticsApi::new(self)
	}

	/// Market data operations (`market/*`).
	pub fn market(&self) -> MarketApi<'_, T> {
		MarketApi::new(self)
	}

	/// Notification operations (`notifications/*`).
	pub fn notifications(&self) -> NotificationsApi<'_, T> {
		NotificationsApi::new(self)
	}

	/// Gateway probe (`/health`).
	pub fn health(&self) -> HealthApi<'_, T> {
		HealthApi::new(self)
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client backed by a reqwest transport that honors `config`'s timeout.
	pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
		let transport = ReqwestTransport::from_config(&config)?;

		Ok(Self::with_transport(config, store, transport))
	}
}
impl<T> Clone for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			store: self.store.clone(),
			config: self.config.clone(),
			refresh_metrics: self.refresh_metrics.clone(),
			refresh_guard: self.refresh_guard.clone(),
		}
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.config.base_url.as_str())
			.field("api_version", &self.config.api_version)
			.field("refresh_metrics", &self.refresh_metrics)
			.finish()
	}
}
