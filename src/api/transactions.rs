//! Executed and manually recorded transactions.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{TransactionId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{
		NewTransaction, Paginated, StatsQuery, Transaction, TransactionFilter, TransactionStats,
		TransactionUpdate,
	},
};

def_group! { TransactionsApi, "Transaction operations under `trading/transactions/`." }
impl<T> TransactionsApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists the user's transactions, one page at a time.
	pub async fn list(
		&self,
		user: &UserId,
		filter: &TransactionFilter,
	) -> Result<Paginated<Transaction>> {
		let descriptor =
			RequestDescriptor::get(["trading", "transactions", user.as_str()]).query_params(filter);

		self.client.invoke_json(descriptor).await
	}

	/// Fetches one transaction.
	pub async fn get(self, transaction: &TransactionId) -> Result<Transaction> {
		self.client
			.invoke_json(RequestDescriptor::get(["trading", "transactions", transaction.as_str()]))
			.await
	}

	/// Records a transaction manually.
	pub async fn create(self, user: &UserId, transaction: &NewTransaction) -> Result<Transaction> {
		let descriptor =
			RequestDescriptor::post(["trading", "transactions", user.as_str()]).json(transaction)?;

		self.client.invoke_json(descriptor).await
	}

	/// Applies a partial update to a transaction.
	pub async fn update(
		&self,
		transaction: &TransactionId,
		update: &TransactionUpdate,
	) -> Result<Transaction> {
		let descriptor =
			RequestDescriptor::patch(["trading", "transactions", transaction.as_str()]).json(update)?;

		self.client.invoke_json(descriptor).await
	}

	/// Deletes a transaction.
	pub async fn delete(self, transaction: &TransactionId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::delete(["trading", "transactions", transaction.as_str()]))
			.await
	}

	/// Aggregates the user's trading activity.
	pub async fn stats(self, user: &UserId, query: &StatsQuery) -> Result<TransactionStats> {
		let descriptor =
			RequestDescriptor::get(["trading", "transactions", user.as_str(), "stats"]).query_params(query);

		self.client.invoke_json(descriptor).await
	}
}
