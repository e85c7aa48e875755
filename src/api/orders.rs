//! Brokerage order listing and cancellation.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{OrderId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{Order, OrderFilter, Paginated},
};

def_group! { OrdersApi, "Order operations under `trading/orders/`." }
impl<T> OrdersApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists the user's orders, one page at a time.
	pub async fn list(self, user: &UserId, filter: &OrderFilter) -> Result<Paginated<Order>> {
		let descriptor =
			RequestDescriptor::get(["trading", "orders", user.as_str()]).query_params(filter);

		self.client.invoke_json(descriptor).await
	}

	/// Lists orders that can still fill.
	pub async fn active(self, user: &UserId) -> Result<Vec<Order>> {
		self.client
			.invoke_json(RequestDescriptor::get(["trading", "orders", user.as_str(), "active"]))
			.await
	}

	/// Fetches one order.
	pub async fn get(self, order: &OrderId) -> Result<Order> {
		self.client.invoke_json(RequestDescriptor::get(["trading", "orders", order.as_str()])).await
	}

	/// Cancels an open order and returns its final state.
	pub async fn cancel(self, order: &OrderId) -> Result<Order> {
		self.client
			.invoke_json(RequestDescriptor::post(["trading", "orders", order.as_str(), "cancel"]))
			.await
	}
}
