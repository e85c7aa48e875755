#![cfg(feature = "reqwest")]

// std
use std::time::Duration as StdDuration;
// crates.io
use httpmock::prelude::*;
// self
use finflow_client::{
	_preludet::*,
	error::TransportError,
	http::{ApiRequest, ApiTransport, Method, ReqwestTransport},
};

#[tokio::test]
async fn wrapped_client_without_timeout_is_still_bounded() {
	let server = MockServer::start_async().await;
	let slow = server
		.mock_async(|when, then| {
			when.method(GET).path("/health");
			then.status(200).delay(StdDuration::from_secs(2));
		})
		.await;
	let transport = ReqwestTransport::with_client(ReqwestClient::new(), StdDuration::from_millis(100));
	let url = Url::parse(&server.url("/health")).expect("Mock server URL should parse.");
	let err = transport
		.send(ApiRequest::new(Method::Get, url))
		.await
		.expect_err("A response slower than the timeout should fail.");

	slow.assert_calls_async(1).await;

	assert!(
		matches!(err, TransportError::Timeout { timeout } if timeout == StdDuration::from_millis(100)),
		"Unexpected transport error: {err:?}.",
	);
}

#[tokio::test]
async fn non_success_statuses_are_delivered_as_responses() {
	let server = MockServer::start_async().await;
	let _limited = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/market/search");
			then.status(429).header("Retry-After", "7").body("{}");
		})
		.await;
	let transport = ReqwestTransport::from_config(&test_config(&server.base_url()))
		.expect("Transport should build from the test configuration.");
	let url = Url::parse(&server.url("/api/v1/market/search")).expect("Mock server URL should parse.");
	let response = transport
		.send(ApiRequest::new(Method::Get, url))
		.await
		.expect("HTTP error statuses are not transport failures.");

	assert_eq!(response.status, 429);
	assert_eq!(response.retry_after, Some(Duration::seconds(7)));
}
