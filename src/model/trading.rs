//! Transactions, orders, and trade statistics.

// self
use crate::{
	_prelude::*,
	auth::{OrderId, Symbol, TransactionId, UserId},
	model::{PaginationParams, QueryParams, push_opt},
};

/// Buy or sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSide {
	/// Buy.
	Buy,
	/// Sell.
	Sell,
}
impl TransactionSide {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			TransactionSide::Buy => "buy",
			TransactionSide::Sell => "sell",
		}
	}
}
impl Display for TransactionSide {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Order type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
	/// Market order.
	Market,
	/// Limit order.
	Limit,
	/// Stop order.
	Stop,
	/// Stop-limit order.
	StopLimit,
}

/// Execution status shared by transactions and orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
	/// Accepted, not yet filled.
	Pending,
	/// Completely filled.
	Filled,
	/// Partially filled.
	Partial,
	/// Cancelled before completion.
	Cancelled,
	/// Rejected by the venue.
	Rejected,
}
impl TransactionStatus {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			TransactionStatus::Pending => "pending",
			TransactionStatus::Filled => "filled",
			TransactionStatus::Partial => "partial",
			TransactionStatus::Cancelled => "cancelled",
			TransactionStatus::Rejected => "rejected",
		}
	}
}
impl Display for TransactionStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Executed or manually recorded trade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Transaction identifier.
	pub id: TransactionId,
	/// Owner.
	pub user_id: UserId,
	/// Instrument ticker.
	pub symbol: Symbol,
	/// Buy or sell.
	pub side: TransactionSide,
	/// Order type.
	#[serde(rename = "type")]
	pub kind: TransactionType,
	/// Units traded.
	pub quantity: f64,
	/// Execution price per unit.
	pub price: f64,
	/// Quantity times price.
	pub total_value: f64,
	/// Fees charged.
	pub fees: f64,
	/// Execution status.
	pub status: TransactionStatus,
	/// Execution venue.
	pub exchange: String,
	/// Identifier on the external platform the trade was imported from.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	/// Free-form notes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// User tags.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Execution time.
	#[serde(with = "time::serde::rfc3339")]
	pub executed_at: OffsetDateTime,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Brokerage order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Order identifier.
	pub id: OrderId,
	/// Owner.
	pub user_id: UserId,
	/// Instrument ticker.
	pub symbol: Symbol,
	/// Buy or sell.
	pub side: TransactionSide,
	/// Order type.
	#[serde(rename = "type")]
	pub kind: TransactionType,
	/// Units ordered.
	pub quantity: f64,
	/// Units filled so far.
	pub filled_quantity: f64,
	/// Units still open.
	pub remaining_quantity: f64,
	/// Limit price for limit orders.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit_price: Option<f64>,
	/// Trigger price for stop orders.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stop_price: Option<f64>,
	/// Execution status.
	pub status: TransactionStatus,
	/// Routing venue.
	pub exchange: String,
	/// Identifier on the external platform.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_id: Option<String>,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
	/// Completion time.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub filled_at: Option<OffsetDateTime>,
	/// Cancellation time.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub cancelled_at: Option<OffsetDateTime>,
}
impl Order {
	/// Returns `true` while the order can still fill.
	pub fn is_open(&self) -> bool {
		matches!(self.status, TransactionStatus::Pending | TransactionStatus::Partial)
	}
}

/// Manually recorded transaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
	/// Instrument ticker.
	pub symbol: Symbol,
	/// Buy or sell.
	pub side: TransactionSide,
	/// Order type.
	#[serde(rename = "type")]
	pub kind: TransactionType,
	/// Units traded.
	pub quantity: f64,
	/// Execution price per unit.
	pub price: f64,
	/// Fees charged.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<f64>,
	/// Free-form notes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// User tags.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Execution time; the backend uses the current time when unset.
	#[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub executed_at: Option<OffsetDateTime>,
}

/// Partial transaction update. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
	/// New quantity.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity: Option<f64>,
	/// New price.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price: Option<f64>,
	/// New fees.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<f64>,
	/// New notes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// Replacement tag list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
}

/// Filters for `trading/transactions/{user}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
	/// Page selection and ordering.
	pub page: PaginationParams,
	/// Restrict to one instrument.
	pub symbol: Option<Symbol>,
	/// Restrict to buys or sells.
	pub side: Option<TransactionSide>,
	/// Inclusive start date (ISO-8601).
	pub start_date: Option<String>,
	/// Inclusive end date (ISO-8601).
	pub end_date: Option<String>,
	/// Restrict to one execution status.
	pub status: Option<TransactionStatus>,
}
impl QueryParams for TransactionFilter {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		self.page.append_to(out);
		push_opt(out, "symbol", self.symbol.as_ref());
		push_opt(out, "side", self.side);
		push_opt(out, "startDate", self.start_date.as_deref());
		push_opt(out, "endDate", self.end_date.as_deref());
		push_opt(out, "status", self.status);
	}
}

/// Filters for `trading/orders/{user}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderFilter {
	/// Page selection and ordering.
	pub page: PaginationParams,
	/// Restrict to one execution status.
	pub status: Option<TransactionStatus>,
	/// Restrict to one instrument.
	pub symbol: Option<Symbol>,
}
impl QueryParams for OrderFilter {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		self.page.append_to(out);
		push_opt(out, "status", self.status);
		push_opt(out, "symbol", self.symbol.as_ref());
	}
}

/// Aggregation window for transaction statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
	/// Trailing week.
	Week,
	/// Trailing month.
	Month,
	/// Trailing year.
	Year,
}
impl Display for StatsPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(match self {
			StatsPeriod::Week => "week",
			StatsPeriod::Month => "month",
			StatsPeriod::Year => "year",
		})
	}
}

/// Query for `trading/transactions/{user}/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
	/// Aggregation window.
	pub period: Option<StatsPeriod>,
	/// Restrict to one instrument.
	pub symbol: Option<Symbol>,
}
impl QueryParams for StatsQuery {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		push_opt(out, "period", self.period);
		push_opt(out, "symbol", self.symbol.as_ref());
	}
}

/// Aggregated transaction statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
	/// Traded notional.
	pub total_volume: f64,
	/// Number of trades.
	pub total_trades: u64,
	/// Number of buys.
	pub buy_count: u64,
	/// Number of sells.
	pub sell_count: u64,
	/// Mean notional per trade.
	pub avg_trade_size: f64,
	/// Fees paid.
	pub total_fees: f64,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn transaction_filter_chains_pagination_and_filters() {
		let filter = TransactionFilter {
			page: PaginationParams::page(1, 50),
			symbol: Some(Symbol::new("TSLA").expect("Fixture symbol should be valid.")),
			side: Some(TransactionSide::Sell),
			status: Some(TransactionStatus::Filled),
			..Default::default()
		};
		let mut out = Vec::new();

		filter.append_to(&mut out);

		let keys = out.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();

		assert_eq!(keys, ["page", "limit", "symbol", "side", "status"]);
		assert_eq!(out[3].1, "sell");
		assert_eq!(out[4].1, "filled");
	}

	#[test]
	fn order_reads_type_and_optional_timestamps() {
		let order: Order = serde_json::from_value(serde_json::json!({
			"id": "o1",
			"userId": "u1",
			"symbol": "MSFT",
			"side": "buy",
			"type": "stop_limit",
			"quantity": 5.0,
			"filledQuantity": 2.0,
			"remainingQuantity": 3.0,
			"limitPrice": 410.0,
			"stopPrice": 405.0,
			"status": "partial",
			"exchange": "NASDAQ",
			"createdAt": "2024-03-01T10:00:00Z",
			"updatedAt": "2024-03-01T10:05:00Z"
		}))
		.expect("Order payload should parse.");

		assert_eq!(order.kind, TransactionType::StopLimit);
		assert!(order.is_open());
		assert!(order.filled_at.is_none());
	}

	#[test]
	fn new_transaction_omits_unset_optionals() {
		let payload = NewTransaction {
			symbol: Symbol::new("BTC-USD").expect("Fixture symbol should be valid."),
			side: TransactionSide::Buy,
			kind: TransactionType::Market,
			quantity: 0.5,
			price: 64_000.0,
			fees: None,
			notes: None,
			tags: Vec::new(),
			executed_at: None,
		};

		assert_eq!(
			serde_json::to_value(&payload).expect("New transaction should serialize."),
			serde_json::json!({
				"symbol": "BTC-USD",
				"side": "buy",
				"type": "market",
				"quantity": 0.5,
				"price": 64000.0
			}),
		);
	}
}
