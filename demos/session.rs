//! Demonstrates a full session against a mock gateway: login, an expired access token that
//! is transparently refreshed, and logout.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;
// self
use finflow_client::{
	auth::UserId,
	client::ApiClient,
	config::ClientConfig,
	model::LoginRequest,
	store::{CredentialStore, MemoryStore},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/login");
			then.status(200).json_body(json!({
				"token": "access-1",
				"refreshToken": "refresh-1",
				"user": {
					"id": "u1",
					"name": "Demo Trader",
					"email": "demo@finflow.dev",
					"createdAt": "2024-01-01T00:00:00Z",
					"updatedAt": "2024-01-01T00:00:00Z"
				},
				"expiresIn": 1
			}));
		})
		.await;
	let expired_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/trading/orders/u1/active")
				.header("authorization", "Bearer access-1");
			then.status(401);
		})
		.await;
	let refresh_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(200).json_body(json!({ "token": "access-2" }));
		})
		.await;
	let orders_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/trading/orders/u1/active")
				.header("authorization", "Bearer access-2");
			then.status(200).json_body(json!([]));
		})
		.await;
	let logout_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/logout");
			then.status(204);
		})
		.await;
	let store: Arc<dyn CredentialStore> = Arc::new(MemoryStore::default());
	let config = ClientConfig::builder()
		.base_url(Url::parse(&server.base_url())?)
		.user_agent("finflow-client-demo")
		.build()?;
	let client = ApiClient::new(config, Arc::clone(&store))?;
	let session = client.auth().login(&LoginRequest::new("demo@finflow.dev", "demo")).await?;

	println!("Logged in as {}.", session.user.name);

	let orders = client.orders().active(&UserId::new("u1")?).await?;

	println!(
		"Active orders: {} (refreshes performed: {}).",
		orders.len(),
		client.refresh_metrics().attempts()
	);

	client.auth().logout().await?;

	println!("Logged out; session stored: {}.", store.load().await?.is_some());

	login_mock.assert_async().await;
	expired_mock.assert_async().await;
	refresh_mock.assert_async().await;
	orders_mock.assert_async().await;
	logout_mock.assert_async().await;

	Ok(())
}
