#![cfg(feature = "reqwest")]

// std
use std::time::Duration as StdDuration;
// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
// self
use finflow_client::{
	_preludet::*,
	auth::{CredentialPair, UserId},
	store::CredentialStore,
};

fn user() -> UserId {
	UserId::new("u1").expect("Fixture user identifier should be valid.")
}

fn summary_body() -> Value {
	json!({
		"totalValue": 12500.0,
		"dailyPnL": 120.5,
		"dailyPnLPercent": 0.97,
		"weeklyPnL": 310.0,
		"monthlyPnL": 845.25,
		"allTimePnL": 2500.0,
		"winRate": 0.61,
		"totalTrades": 88,
		"activePositions": 7
	})
}

fn portfolio_body() -> Value {
	json!({
		"id": "p1",
		"userId": "u1",
		"totalValue": 12500.0,
		"cashBalance": 1500.0,
		"buyingPower": 3000.0,
		"dailyChange": 120.5,
		"dailyChangePercent": 0.97,
		"totalGainLoss": 2500.0,
		"totalGainLossPercent": 25.0,
		"holdings": [],
		"updatedAt": "2024-03-01T10:00:00Z"
	})
}

#[tokio::test]
async fn requests_carry_bearer_and_trace_headers() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/portfolio/u1/summary")
				.header("authorization", "Bearer T1")
				.header_exists("x-request-id");
			then.status(200).json_body(summary_body());
		})
		.await;
	let summary = client
		.portfolio()
		.summary(&user())
		.await
		.expect("Authenticated summary call should succeed.");

	mock.assert_async().await;

	assert_eq!(summary.total_trades, 88);
	assert_eq!(summary.daily_pnl, 120.5);
}

#[tokio::test]
async fn unauthorized_call_refreshes_once_and_replays_with_new_token() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1").header("authorization", "Bearer T1");
			then.status(401).json_body(json!({ "status": 401, "message": "Token expired" }));
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/auth/refresh")
				.header_exists("x-request-id")
				.json_body(json!({ "refreshToken": "R1" }));
			then.status(200).json_body(json!({ "token": "T2" }));
		})
		.await;
	let renewed = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1").header("authorization", "Bearer T2");
			then.status(200).json_body(portfolio_body());
		})
		.await;
	let portfolio =
		client.portfolio().get(&user()).await.expect("Call should succeed after refreshing.");

	expired.assert_calls_async(1).await;
	refresh.assert_calls_async(1).await;
	renewed.assert_calls_async(1).await;

	assert_eq!(portfolio.total_value, 12500.0);
	assert_eq!(store.snapshot(), Some(CredentialPair::new("T2", "R1")));
	assert_eq!(client.refresh_metrics().attempts(), 1);
	assert_eq!(client.refresh_metrics().successes(), 1);
}

#[tokio::test]
async fn failed_refresh_clears_store_and_requires_reauthentication() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1/summary");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(401).json_body(json!({ "message": "Refresh token revoked" }));
		})
		.await;
	let err = client
		.portfolio()
		.summary(&user())
		.await
		.expect_err("A rejected refresh should end the session.");

	expired.assert_calls_async(1).await;
	refresh.assert_calls_async(1).await;

	assert!(err.is_reauthentication_required());
	assert_eq!(err.status(), Some(401));
	assert!(store.snapshot().is_none(), "Both tokens must be cleared after a failed refresh.");
	assert_eq!(client.refresh_metrics().failures(), 1);
}

#[tokio::test]
async fn unauthorized_without_session_skips_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());
	let protected = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1/summary");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(200).json_body(json!({ "token": "unused" }));
		})
		.await;
	let err = client
		.portfolio()
		.summary(&user())
		.await
		.expect_err("A 401 without a stored session should require login.");

	protected.assert_calls_async(1).await;
	refresh.assert_calls_async(0).await;

	assert!(err.is_reauthentication_required());
	assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn concurrent_unauthorized_calls_share_one_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let _expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1/summary").header("authorization", "Bearer T1");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh").json_body(json!({ "refreshToken": "R1" }));
			then.status(200)
				.delay(StdDuration::from_millis(150))
				.json_body(json!({ "token": "T2", "refreshToken": "R2" }));
		})
		.await;
	let renewed = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1/summary").header("authorization", "Bearer T2");
			then.status(200).json_body(summary_body());
		})
		.await;
	let user = user();
	let (first, second, third) = tokio::join!(
		client.portfolio().summary(&user),
		client.portfolio().summary(&user),
		client.portfolio().summary(&user),
	);

	first.expect("First concurrent call should recover.");
	second.expect("Second concurrent call should recover.");
	third.expect("Third concurrent call should recover.");
	refresh.assert_calls_async(1).await;
	renewed.assert_calls_async(3).await;

	assert_eq!(store.snapshot(), Some(CredentialPair::new("T2", "R2")));
	assert_eq!(client.refresh_metrics().attempts(), 1);
}

#[tokio::test]
async fn concurrent_unauthorized_calls_share_one_failed_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let expired = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/portfolio/u1/summary");
			then.status(401);
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(500).delay(StdDuration::from_millis(150));
		})
		.await;
	let user = user();
	let portfolio = client.portfolio();
	let results = tokio::join!(
		portfolio.summary(&user),
		client.portfolio().summary(&user),
		client.portfolio().summary(&user),
	);

	for result in [results.0, results.1, results.2] {
		let err = result.expect_err("Every caller should observe the failed refresh.");

		assert!(err.is_reauthentication_required());
	}

	expired.assert_calls_async(3).await;
	refresh.assert_calls_async(1).await;

	assert!(store.snapshot().is_none());
	assert_eq!(client.refresh_metrics().attempts(), 1);
}

#[tokio::test]
async fn domain_errors_surface_payload_without_refresh() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let missing = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/trading/orders/o-404");
			then.status(404).json_body(json!({
				"status": 404,
				"error": "Not Found",
				"message": "Order not found",
				"path": "/api/v1/trading/orders/o-404"
			}));
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(200).json_body(json!({ "token": "unused" }));
		})
		.await;
	let order = finflow_client::auth::OrderId::new("o-404")
		.expect("Fixture order identifier should be valid.");
	let err = client.orders().get(&order).await.expect_err("Unknown orders should fail.");

	missing.assert_async().await;
	refresh.assert_calls_async(0).await;

	let Error::Api(api) = err else {
		panic!("Non-2xx responses should surface as Error::Api.");
	};

	assert_eq!(api.status, 404);
	assert_eq!(api.message, "Order not found");
	assert!(api.trace_id.is_some());
	assert_eq!(store.snapshot(), Some(CredentialPair::new("T1", "R1")));
}

#[tokio::test]
async fn query_filters_are_encoded() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/journal/u1")
				.query_param("page", "2")
				.query_param("limit", "10")
				.query_param("tags", "breakout,earnings");
			then.status(200).json_body(json!({
				"data": [],
				"pagination": { "page": 2, "limit": 10, "total": 10, "totalPages": 1 }
			}));
		})
		.await;
	let filter = finflow_client::model::JournalFilter {
		page: finflow_client::model::PaginationParams::page(2, 10),
		tags: vec!["breakout".into(), "earnings".into()],
	};
	let page = client.journal().list(&user(), &filter).await.expect("Journal listing should succeed.");

	mock.assert_async().await;

	assert!(page.data.is_empty());
	assert!(!page.pagination.has_next());
}
