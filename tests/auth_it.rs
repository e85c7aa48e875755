#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use finflow_client::{
	_preludet::*,
	auth::CredentialPair,
	model::LoginRequest,
	store::CredentialStore,
};

fn auth_body(token: &str, refresh_token: &str) -> serde_json::Value {
	json!({
		"token": token,
		"refreshToken": refresh_token,
		"user": {
			"id": "u1",
			"name": "Ada",
			"email": "a@b.com",
			"createdAt": "2024-01-01T00:00:00Z",
			"updatedAt": "2024-01-02T00:00:00Z"
		},
		"expiresIn": 3600
	})
}

#[tokio::test]
async fn login_stores_issued_pair() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/auth/login")
				.header_exists("x-request-id")
				.json_body(json!({ "email": "a@b.com", "password": "x" }));
			then.status(200).json_body(auth_body("T1", "R1"));
		})
		.await;
	let response = client
		.auth()
		.login(&LoginRequest::new("a@b.com", "x"))
		.await
		.expect("Login should succeed.");

	mock.assert_async().await;

	assert_eq!(response.expires_in, 3600);
	assert_eq!(response.user.email, "a@b.com");

	let stored = store.snapshot().expect("Login should persist the issued pair.");

	assert_eq!(stored.access_token.expose(), "T1");
	assert_eq!(stored.refresh_token.expose(), "R1");
	assert!(client.auth().is_authenticated().await.expect("Store reads should succeed."));
}

#[tokio::test]
async fn rejected_login_is_a_domain_error() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	// A stale session must not turn bad credentials into a refresh attempt.
	store.save(CredentialPair::new("T0", "R0")).await.expect("Seeding the store should succeed.");

	let login = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/login");
			then.status(401).json_body(json!({ "status": 401, "message": "Invalid credentials" }));
		})
		.await;
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(200).json_body(json!({ "token": "unused" }));
		})
		.await;
	let err = client
		.auth()
		.login(&LoginRequest::new("a@b.com", "wrong"))
		.await
		.expect_err("Bad credentials should be rejected.");

	login.assert_async().await;
	refresh.assert_calls_async(0).await;

	assert!(!err.is_reauthentication_required());
	assert_eq!(err.status(), Some(401));
	assert_eq!(err.message(), "Invalid credentials");
	assert_eq!(store.snapshot(), Some(CredentialPair::new("T0", "R0")));
}

#[tokio::test]
async fn logout_without_session_is_a_local_noop() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());
	let logout = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/logout");
			then.status(204);
		})
		.await;

	client.auth().logout().await.expect("Logging out without a session should succeed.");
	client.auth().logout().await.expect("Logging out twice should still succeed.");
	logout.assert_calls_async(0).await;

	assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn logout_clears_store_even_when_backend_rejects() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let logout = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/logout").header("authorization", "Bearer T1");
			then.status(401);
		})
		.await;

	client.auth().logout().await.expect("A 401 from logout should be ignored.");
	logout.assert_async().await;

	assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn logout_reports_server_errors_after_clearing() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let _logout = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/logout");
			then.status(503);
		})
		.await;
	let err = client.auth().logout().await.expect_err("A 503 from logout should surface.");

	assert_eq!(err.status(), Some(503));
	assert_eq!(err.message(), "Request failed with status code 503");
	assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn explicit_refresh_rotates_both_tokens_when_issued() {
	let server = MockServer::start_async().await;
	let (client, store) = build_reqwest_test_client(&server.base_url());

	store.save(CredentialPair::new("T1", "R1")).await.expect("Seeding the store should succeed.");

	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh").json_body(json!({ "refreshToken": "R1" }));
			then.status(200).json_body(json!({ "token": "T2", "refreshToken": "R2", "expiresIn": 900 }));
		})
		.await;
	let response = client.auth().refresh().await.expect("Explicit refresh should succeed.");

	refresh.assert_async().await;

	assert_eq!(response.token, "T2");
	assert_eq!(store.snapshot(), Some(CredentialPair::new("T2", "R2")));
}

#[tokio::test]
async fn explicit_refresh_without_session_requires_login() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.base_url());
	let refresh = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/refresh");
			then.status(200).json_body(json!({ "token": "unused" }));
		})
		.await;
	let err = client.auth().refresh().await.expect_err("Refreshing without a session should fail.");

	refresh.assert_calls_async(0).await;

	assert!(err.is_reauthentication_required());
}

#[tokio::test]
async fn health_probe_uses_unversioned_path() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_reqwest_test_client(&server.base_url());
	let health = server
		.mock_async(|when, then| {
			when.method(GET).path("/health");
			then.status(200).body("OK");
		})
		.await;

	client.health().check().await.expect("Healthy gateway should pass the probe.");
	health.assert_async().await;
}
