//! Quotes, price history, and symbol search.

// self
use crate::{
	_prelude::*,
	auth::Symbol,
	model::{QueryParams, push_opt},
};

/// Real-time quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
	/// Instrument.
	pub symbol: Symbol,
	/// Last price.
	pub price: f64,
	/// Absolute change since previous close.
	pub change: f64,
	/// Change in percent.
	pub change_percent: f64,
	/// Session volume.
	pub volume: f64,
	/// Session high.
	pub high: f64,
	/// Session low.
	pub low: f64,
	/// Session open.
	pub open: f64,
	/// Previous session close.
	pub previous_close: f64,
	/// Quote time.
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
}

#[derive(Serialize)]
pub(crate) struct QuotesRequest<'a> {
	pub(crate) symbols: &'a [Symbol],
}

/// Candle resolution for price history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
	/// One minute.
	#[serde(rename = "1min")]
	OneMinute,
	/// Five minutes.
	#[serde(rename = "5min")]
	FiveMinutes,
	/// Fifteen minutes.
	#[serde(rename = "15min")]
	FifteenMinutes,
	/// One hour.
	#[serde(rename = "1hour")]
	OneHour,
	/// One day.
	#[serde(rename = "1day")]
	OneDay,
}
impl CandleInterval {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			CandleInterval::OneMinute => "1min",
			CandleInterval::FiveMinutes => "5min",
			CandleInterval::FifteenMinutes => "15min",
			CandleInterval::OneHour => "1hour",
			CandleInterval::OneDay => "1day",
		}
	}
}
impl Display for CandleInterval {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Query for `market/history/{symbol}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryQuery {
	/// Inclusive start date (ISO-8601).
	pub start_date: Option<String>,
	/// Inclusive end date (ISO-8601).
	pub end_date: Option<String>,
	/// Candle resolution.
	pub interval: Option<CandleInterval>,
}
impl QueryParams for HistoryQuery {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		push_opt(out, "startDate", self.start_date.as_deref());
		push_opt(out, "endDate", self.end_date.as_deref());
		push_opt(out, "interval", self.interval);
	}
}

/// OHLCV candle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
	/// Candle start as delivered by the backend.
	pub date: String,
	/// Open.
	pub open: f64,
	/// High.
	pub high: f64,
	/// Low.
	pub low: f64,
	/// Close.
	pub close: f64,
	/// Volume.
	pub volume: f64,
}

/// Symbol search hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
	/// Instrument.
	pub symbol: Symbol,
	/// Instrument name.
	pub name: String,
	/// Instrument type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Listing venue.
	pub exchange: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn history_query_uses_interval_labels() {
		let mut out = Vec::new();

		HistoryQuery { interval: Some(CandleInterval::FifteenMinutes), ..Default::default() }
			.append_to(&mut out);

		assert_eq!(out, vec![("interval".to_owned(), "15min".to_owned())]);
	}
}
