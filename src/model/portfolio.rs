//! Portfolio, holdings, and performance history.

// self
use crate::{
	_prelude::*,
	auth::{HoldingId, Symbol, UserId},
	model::{QueryParams, push_opt},
};

/// Asset class of a holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
	/// Listed equity.
	Stock,
	/// Crypto asset.
	Crypto,
	/// Currency pair.
	Forex,
	/// Option contract.
	Option,
	/// Futures contract.
	Future,
}

/// Position held in a portfolio or external account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
	/// Holding identifier.
	pub id: HoldingId,
	/// Owner.
	pub user_id: UserId,
	/// Instrument ticker.
	pub symbol: Symbol,
	/// Units held.
	pub quantity: f64,
	/// Average cost per unit.
	pub average_cost: f64,
	/// Last known price.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub current_price: Option<f64>,
	/// Quantity times current price.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub market_value: Option<f64>,
	/// Unrealized profit or loss.
	#[serde(default, rename = "unrealizedPnL", skip_serializing_if = "Option::is_none")]
	pub unrealized_pnl: Option<f64>,
	/// Unrealized profit or loss in percent.
	#[serde(default, rename = "unrealizedPnLPercent", skip_serializing_if = "Option::is_none")]
	pub unrealized_pnl_percent: Option<f64>,
	/// Asset class.
	pub asset_type: AssetType,
	/// Listing venue.
	pub exchange: String,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Portfolio valuation with its holdings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
	/// Portfolio identifier.
	pub id: String,
	/// Owner.
	pub user_id: UserId,
	/// Total market value including cash.
	pub total_value: f64,
	/// Uninvested cash.
	pub cash_balance: f64,
	/// Cash available for new orders.
	pub buying_power: f64,
	/// Value change today.
	pub daily_change: f64,
	/// Value change today in percent.
	pub daily_change_percent: f64,
	/// All-time gain or loss.
	pub total_gain_loss: f64,
	/// All-time gain or loss in percent.
	pub total_gain_loss_percent: f64,
	/// Positions in the portfolio.
	#[serde(default)]
	pub holdings: Vec<Holding>,
	/// Last valuation time.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Headline portfolio metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
	/// Total market value.
	pub total_value: f64,
	/// Profit or loss today.
	#[serde(rename = "dailyPnL")]
	pub daily_pnl: f64,
	/// Profit or loss today in percent.
	#[serde(rename = "dailyPnLPercent")]
	pub daily_pnl_percent: f64,
	/// Profit or loss this week.
	#[serde(rename = "weeklyPnL")]
	pub weekly_pnl: f64,
	/// Profit or loss this month.
	#[serde(rename = "monthlyPnL")]
	pub monthly_pnl: f64,
	/// All-time profit or loss.
	#[serde(rename = "allTimePnL")]
	pub all_time_pnl: f64,
	/// Share of winning trades.
	pub win_rate: f64,
	/// Number of trades.
	pub total_trades: u64,
	/// Number of open positions.
	pub active_positions: u64,
}

/// Manually added holding.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
	/// Instrument ticker.
	pub symbol: Symbol,
	/// Units held.
	pub quantity: f64,
	/// Average cost per unit.
	pub average_cost: f64,
	/// Asset class.
	pub asset_type: AssetType,
	/// Listing venue.
	pub exchange: String,
}

/// Partial holding update. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
	/// New quantity.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity: Option<f64>,
	/// New average cost.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub average_cost: Option<f64>,
	/// New asset class.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset_type: Option<AssetType>,
	/// New listing venue.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exchange: Option<String>,
}

/// Sampling interval of the performance history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
	/// Daily points.
	Day,
	/// Weekly points.
	Week,
	/// Monthly points.
	Month,
}
impl Interval {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Interval::Day => "day",
			Interval::Week => "week",
			Interval::Month => "month",
		}
	}
}
impl Display for Interval {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Query for `portfolio/{user}/performance`. Dates are ISO-8601 strings passed through as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformanceQuery {
	/// Inclusive start date.
	pub start_date: Option<String>,
	/// Inclusive end date.
	pub end_date: Option<String>,
	/// Sampling interval.
	pub interval: Option<Interval>,
}
impl QueryParams for PerformanceQuery {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		push_opt(out, "startDate", self.start_date.as_deref());
		push_opt(out, "endDate", self.end_date.as_deref());
		push_opt(out, "interval", self.interval);
	}
}

/// One point of the portfolio value history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
	/// Sample date as delivered by the backend.
	pub date: String,
	/// Portfolio value at `date`.
	pub value: f64,
}
