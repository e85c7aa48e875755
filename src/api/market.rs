//! Quotes, price history, and symbol search.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::Symbol,
	client::RequestDescriptor,
	http::ApiTransport,
	model::{Candle, HistoryQuery, MarketData, QuotesRequest, SymbolMatch},
};

def_group! { MarketApi, "Market data operations under `market/`." }
impl<T> MarketApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Fetches a real-time quote.
	pub async fn quote(self, symbol: &Symbol) -> Result<MarketData> {
		self.client.invoke_json(RequestDescriptor::get(["market", "quote", symbol.as_str()])).await
	}

	/// Fetches quotes for several instruments in one call.
	pub async fn quotes(self, symbols: &[Symbol]) -> Result<Vec<MarketData>> {
		let descriptor =
			RequestDescriptor::post(["market", "quotes"]).json(&QuotesRequest { symbols })?;

		self.client.invoke_json(descriptor).await
	}

	/// Fetches OHLCV candles.
	pub async fn history(self, symbol: &Symbol, query: &HistoryQuery) -> Result<Vec<Candle>> {
		let descriptor =
			RequestDescriptor::get(["market", "history", symbol.as_str()]).query_params(query);

		self.client.invoke_json(descriptor).await
	}

	/// Searches instruments by ticker or name.
	pub async fn search(self, query: &str) -> Result<Vec<SymbolMatch>> {
		self.client.invoke_json(RequestDescriptor::get(["market", "search"]).query("q", query)).await
	}
}
