//! Trade journal entries and per-trade analysis.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{JournalEntryId, TransactionId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{
		JournalEntry, JournalEntryUpdate, JournalFilter, NewJournalEntry, Paginated, TradeAnalysis,
	},
};

def_group! { JournalApi, "Trade journal operations under `journal/`." }
impl<T> JournalApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists the user's entries, one page at a time.
	pub async fn list(
		&self,
		user: &UserId,
		filter: &JournalFilter,
	) -> Result<Paginated<JournalEntry>> {
		self.client
			.invoke_json(RequestDescriptor::get(["journal", user.as_str()]).query_params(filter))
			.await
	}

	/// Fetches one entry.
	pub async fn get(self, entry: &JournalEntryId) -> Result<JournalEntry> {
		self.client
			.invoke_json(RequestDescriptor::get(["journal", "entries", entry.as_str()]))
			.await
	}

	/// Creates an entry.
	pub async fn create(self, user: &UserId, entry: &NewJournalEntry) -> Result<JournalEntry> {
		self.client
			.invoke_json(RequestDescriptor::post(["journal", user.as_str()]).json(entry)?)
			.await
	}

	/// Applies a partial update to an entry.
	pub async fn update(
		&self,
		entry: &JournalEntryId,
		update: &JournalEntryUpdate,
	) -> Result<JournalEntry> {
		let descriptor =
			RequestDescriptor::patch(["journal", "entries", entry.as_str()]).json(update)?;

		self.client.invoke_json(descriptor).await
	}

	/// Deletes an entry.
	pub async fn delete(self, entry: &JournalEntryId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::delete(["journal", "entries", entry.as_str()]))
			.await
	}

	/// Fetches the analysis attached to a transaction.
	pub async fn analysis(self, transaction: &TransactionId) -> Result<TradeAnalysis> {
		self.client
			.invoke_json(RequestDescriptor::get(["journal", "analysis", transaction.as_str()]))
			.await
	}

	/// Creates or replaces the analysis attached to a transaction.
	pub async fn save_analysis(
		&self,
		transaction: &TransactionId,
		analysis: &TradeAnalysis,
	) -> Result<TradeAnalysis> {
		let descriptor =
			RequestDescriptor::post(["journal", "analysis", transaction.as_str()]).json(analysis)?;

		self.client.invoke_json(descriptor).await
	}
}
