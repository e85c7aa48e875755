//! Portfolio valuation, holdings, and performance history.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{HoldingId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{
		Holding, HoldingUpdate, NewHolding, PerformancePoint, PerformanceQuery, Portfolio,
		PortfolioSummary,
	},
};

def_group! { PortfolioApi, "Portfolio operations under `portfolio/`." }
impl<T> PortfolioApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Fetches the user's portfolio with its holdings.
	pub async fn get(self, user: &UserId) -> Result<Portfolio> {
		self.client.invoke_json(RequestDescriptor::get(["portfolio", user.as_str()])).await
	}

	/// Fetches headline portfolio metrics.
	pub async fn summary(self, user: &UserId) -> Result<PortfolioSummary> {
		self.client
			.invoke_json(RequestDescriptor::get(["portfolio", user.as_str(), "summary"]))
			.await
	}

	/// Lists the user's holdings.
	pub async fn holdings(self, user: &UserId) -> Result<Vec<Holding>> {
		self.client
			.invoke_json(RequestDescriptor::get(["portfolio", user.as_str(), "holdings"]))
			.await
	}

	/// Adds a holding manually.
	pub async fn add_holding(self, user: &UserId, holding: &NewHolding) -> Result<Holding> {
		let descriptor =
			RequestDescriptor::post(["portfolio", user.as_str(), "holdings"]).json(holding)?;

		self.client.invoke_json(descriptor).await
	}

	/// Applies a partial update to a holding.
	pub async fn update_holding(
		&self,
		user: &UserId,
		holding: &HoldingId,
		update: &HoldingUpdate,
	) -> Result<Holding> {
		let descriptor =
			RequestDescriptor::patch(["portfolio", user.as_str(), "holdings", holding.as_str()])
				.json(update)?;

		self.client.invoke_json(descriptor).await
	}

	/// Removes a holding.
	pub async fn delete_holding(self, user: &UserId, holding: &HoldingId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::delete([
				"portfolio",
				user.as_str(),
				"holdings",
				holding.as_str(),
			]))
			.await
	}

	/// Fetches the portfolio value history.
	pub async fn performance(
		&self,
		user: &UserId,
		query: &PerformanceQuery,
	) -> Result<Vec<PerformancePoint>> {
		let descriptor = RequestDescriptor::get(["portfolio", user.as_str(), "performance"])
			.query_params(query);

		self.client.invoke_json(descriptor).await
	}
}
