//! Typed operation groups layered over [`ApiClient::invoke`](crate::client::ApiClient::invoke).
//!
//! Each group is a borrowed handle obtained from the client (`client.portfolio()`,
//! `client.orders()`, ...). Groups only describe requests; credentials, tracing, refresh,
//! and error normalization all happen in the client. Handles are `Copy` and their methods
//! take `self`, so a returned future borrows the client rather than the handle.

pub mod accounts;
pub mod analytics;
pub mod auth;
pub mod health;
pub mod journal;
pub mod market;
pub mod notifications;
pub mod orders;
pub mod portfolio;
pub mod social;
pub mod transactions;

pub use accounts::AccountsApi;
pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use health::HealthApi;
pub use journal::JournalApi;
pub use market::MarketApi;
pub use notifications::NotificationsApi;
pub use orders::OrdersApi;
pub use portfolio::PortfolioApi;
pub use social::SocialApi;
pub use transactions::TransactionsApi;

macro_rules! def_group {
	($name:ident, $doc:literal) => {
		#[doc = $doc]
		pub struct $name<'a, T>
		where
			T: ?Sized + $crate::http::ApiTransport,
		{
			client: &'a $crate::client::ApiClient<T>,
		}
		impl<'a, T> $name<'a, T>
		where
			T: ?Sized + $crate::http::ApiTransport,
		{
			pub(crate) fn new(client: &'a $crate::client::ApiClient<T>) -> Self {
				Self { client }
			}
		}
		impl<T> ::std::clone::Clone for $name<'_, T>
		where
			T: ?Sized + $crate::http::ApiTransport,
		{
			fn clone(&self) -> Self {
				*self
			}
		}
		impl<T> ::std::marker::Copy for $name<'_, T> where T: ?Sized + $crate::http::ApiTransport {}
		impl<T> ::std::fmt::Debug for $name<'_, T>
		where
			T: ?Sized + $crate::http::ApiTransport,
		{
			fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
				f.debug_struct(stringify!($name)).field("client", self.client).finish()
			}
		}
	};
}
pub(crate) use def_group;
