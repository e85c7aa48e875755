//! Performance metrics and AI-assisted analysis.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{Symbol, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{
		AiInsight, MarketQueryRequest, MarketQueryResponse, MetricsPeriod, PerformanceMetrics,
		PortfolioAnalysis, PortfolioAnalysisRequest, RiskAnalysis, SymbolAnalysis,
	},
};

def_group! { AnalyticsApi, "Analytics operations under `analytics/`." }
impl<T> AnalyticsApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Fetches trading performance over `period`.
	pub async fn performance(
		&self,
		user: &UserId,
		period: MetricsPeriod,
	) -> Result<PerformanceMetrics> {
		let descriptor = RequestDescriptor::get(["analytics", user.as_str(), "performance"])
			.query("period", period);

		self.client.invoke_json(descriptor).await
	}

	/// Lists generated insights for the user.
	pub async fn insights(self, user: &UserId) -> Result<Vec<AiInsight>> {
		self.client
			.invoke_json(RequestDescriptor::get(["analytics", user.as_str(), "insights"]))
			.await
	}

	/// Runs a portfolio-level analysis.
	pub async fn analyze_portfolio(
		&self,
		user: &UserId,
		include_recommendations: bool,
	) -> Result<PortfolioAnalysis> {
		let descriptor = RequestDescriptor::post(["analytics", "portfolio"])
			.json(&PortfolioAnalysisRequest { user_id: user, include_recommendations })?;

		self.client.invoke_json(descriptor).await
	}

	/// Asks a natural-language question, optionally scoped to `symbols`.
	pub async fn query_market(self, query: &str, symbols: &[Symbol]) -> Result<MarketQueryResponse> {
		let descriptor = RequestDescriptor::post(["analytics", "query"])
			.json(&MarketQueryRequest { query, symbols })?;

		self.client.invoke_json(descriptor).await
	}

	/// Fetches the technical and sentiment summary of one instrument.
	pub async fn symbol_analysis(self, symbol: &Symbol) -> Result<SymbolAnalysis> {
		self.client
			.invoke_json(RequestDescriptor::get(["analytics", "symbols", symbol.as_str()]))
			.await
	}

	/// Fetches the risk breakdown of the user's portfolio.
	pub async fn risk(self, user: &UserId) -> Result<RiskAnalysis> {
		self.client.invoke_json(RequestDescriptor::get(["analytics", user.as_str(), "risk"])).await
	}
}
