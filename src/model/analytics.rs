//! Performance metrics and AI-assisted analysis.

// self
use crate::{
	_prelude::*,
	auth::{Symbol, UserId},
};

/// Aggregation window for performance metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsPeriod {
	/// Today.
	Daily,
	/// This week.
	Weekly,
	/// This month.
	Monthly,
	/// This year.
	Yearly,
	/// Since sign-up.
	#[default]
	AllTime,
}
impl MetricsPeriod {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			MetricsPeriod::Daily => "daily",
			MetricsPeriod::Weekly => "weekly",
			MetricsPeriod::Monthly => "monthly",
			MetricsPeriod::Yearly => "yearly",
			MetricsPeriod::AllTime => "all_time",
		}
	}
}
impl Display for MetricsPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Trading performance over a period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
	/// Measured user.
	pub user_id: UserId,
	/// Aggregation window.
	pub period: MetricsPeriod,
	/// Profit or loss.
	#[serde(rename = "totalPnL")]
	pub total_pnl: f64,
	/// Profit or loss in percent.
	#[serde(rename = "totalPnLPercent")]
	pub total_pnl_percent: f64,
	/// Number of trades.
	pub total_trades: u64,
	/// Number of winning trades.
	pub winning_trades: u64,
	/// Number of losing trades.
	pub losing_trades: u64,
	/// Share of winning trades.
	pub win_rate: f64,
	/// Mean winning trade.
	pub avg_win: f64,
	/// Mean losing trade.
	pub avg_loss: f64,
	/// Best trade.
	pub largest_win: f64,
	/// Worst trade.
	pub largest_loss: f64,
	/// Gross profit divided by gross loss.
	pub profit_factor: f64,
	/// Sharpe ratio, when enough history exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sharpe_ratio: Option<f64>,
	/// Largest peak-to-trough decline.
	pub max_drawdown: f64,
	/// Mean holding period.
	pub avg_holding_period: f64,
	/// Most profitable instrument.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub best_symbol: Option<Symbol>,
	/// Least profitable instrument.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub worst_symbol: Option<Symbol>,
}

/// Category of an [`AiInsight`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
	/// Potential opportunity.
	Opportunity,
	/// Risk warning.
	Risk,
	/// Detected behavioral pattern.
	Pattern,
	/// Suggested action.
	Recommendation,
}

/// Priority of an [`AiInsight`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
	/// Low.
	Low,
	/// Medium.
	Medium,
	/// High.
	High,
}

/// Generated insight about a user's trading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
	/// Insight identifier.
	pub id: String,
	/// Category.
	#[serde(rename = "type")]
	pub kind: InsightType,
	/// Headline.
	pub title: String,
	/// Explanation.
	pub description: String,
	/// Model confidence in `[0, 1]`.
	pub confidence: f64,
	/// Instruments the insight refers to.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub symbols: Vec<Symbol>,
	/// Whether the insight suggests a concrete action.
	pub actionable: bool,
	/// Priority.
	pub priority: InsightPriority,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Expiry time.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub expires_at: Option<OffsetDateTime>,
}

// The analytics service expects snake_case here.
#[derive(Serialize)]
pub(crate) struct PortfolioAnalysisRequest<'a> {
	pub(crate) user_id: &'a UserId,
	pub(crate) include_recommendations: bool,
}

/// Portfolio-level analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalysis {
	/// Total market value.
	pub total_value: f64,
	/// Overall risk score.
	pub risk_score: f64,
	/// Diversification score.
	pub diversification_score: f64,
	/// Suggested actions.
	#[serde(default)]
	pub recommendations: Vec<String>,
	/// Analysis time.
	#[serde(with = "time::serde::rfc3339")]
	pub analyzed_at: OffsetDateTime,
}

#[derive(Serialize)]
pub(crate) struct MarketQueryRequest<'a> {
	pub(crate) query: &'a str,
	#[serde(skip_serializing_if = "<[Symbol]>::is_empty")]
	pub(crate) symbols: &'a [Symbol],
}

/// Answer to a natural-language market query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketQueryResponse {
	/// Echoed query.
	pub query: String,
	/// Per-instrument findings.
	#[serde(default)]
	pub insights: Vec<SymbolInsight>,
	/// Documents the answer was grounded on.
	#[serde(default)]
	pub sources: Vec<String>,
}

/// One finding of a [`MarketQueryResponse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolInsight {
	/// Instrument.
	pub symbol: Symbol,
	/// Finding.
	pub insight: String,
	/// Model confidence in `[0, 1]`.
	pub confidence: f64,
}

/// Technical and sentiment summary of one instrument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAnalysis {
	/// Instrument.
	pub symbol: Symbol,
	/// Last price.
	pub price: f64,
	/// Absolute change.
	pub change: f64,
	/// Change in percent.
	pub change_percent: f64,
	/// Sentiment label.
	pub sentiment: String,
	/// Technical rating label.
	pub technical_rating: String,
	/// Narrative summary.
	pub summary: String,
}

/// Risk breakdown of a user's portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
	/// Overall risk score.
	pub overall_risk: f64,
	/// Concentration risk score.
	pub concentration_risk: f64,
	/// Volatility risk score.
	pub volatility_risk: f64,
	/// Suggested actions.
	#[serde(default)]
	pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn portfolio_analysis_request_uses_snake_case() {
		let user = UserId::new("u1").expect("Fixture user should be valid.");
		let body = serde_json::to_value(PortfolioAnalysisRequest {
			user_id: &user,
			include_recommendations: true,
		})
		.expect("Analysis request should serialize.");

		assert_eq!(body, serde_json::json!({ "user_id": "u1", "include_recommendations": true }));
	}

	#[test]
	fn market_query_omits_empty_symbols() {
		let body = serde_json::to_value(MarketQueryRequest { query: "chip stocks?", symbols: &[] })
			.expect("Market query should serialize.");

		assert_eq!(body, serde_json::json!({ "query": "chip stocks?" }));
	}
}
