//! Transport primitives for API calls.
//!
//! The module exposes [`ApiTransport`] alongside the crate-owned [`ApiRequest`] and
//! [`ApiResponse`] types so downstream crates can plug in custom HTTP stacks (or test
//! fakes) without the client depending on any particular HTTP library. The transport only
//! moves bytes: bearer attachment, trace identifiers, and 401 recovery live in
//! [`ApiClient`](crate::client::ApiClient).

// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{HeaderMap, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, error::ConfigError};

/// Boxed future returned by [`ApiTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing API calls.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared behind an `Arc`
/// across clones of the client, and the returned future must own whatever state it needs.
/// Transports enforce their own request timeout and report it as
/// [`TransportError::Timeout`]; any HTTP response (including 4xx/5xx) is a successful send.
pub trait ApiTransport
where
	Self: 'static + Send + Sync,
{
	/// Dispatches a fully prepared request.
	fn send(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// HTTP methods used by the API surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `PATCH`
	Patch,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Returns the canonical upper-case method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outbound request handed to an [`ApiTransport`].
#[derive(Clone)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute URL including the query string.
	pub url: Url,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(String, String)>,
	/// JSON body, if any.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Creates a request without headers or body.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: Vec::new(), body: None }
	}

	/// Appends a header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Attaches a JSON body.
	pub fn with_body(mut self, body: Vec<u8>) -> Self {
		self.body = Some(body);

		self
	}

	/// Returns the first header value matching `name` (case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for ApiRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				if name.eq_ignore_ascii_case("authorization") {
					(name.as_str(), "<redacted>")
				} else {
					(name.as_str(), value.as_str())
				}
			})
			.collect::<Vec<_>>();

		f.debug_struct("ApiRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.finish()
	}
}

/// Response returned by an [`ApiTransport`].
#[derive(Clone, Debug, Default)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}
impl ApiResponse {
	/// Creates a response with the provided status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into(), retry_after: None }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns `true` when the backend rejected the bearer credential.
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Every request carries the transport's timeout; [`ReqwestTransport::from_config`] takes it
/// from [`ClientConfig::timeout`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
	client: ReqwestClient,
	timeout: std::time::Duration,
}
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport honoring the timeout and user agent of `config`.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().timeout(config.timeout);

		if let Some(agent) = config.user_agent.as_deref() {
			builder = builder.user_agent(agent);
		}

		Ok(Self { client: builder.build()?, timeout: config.timeout })
	}

	/// Wraps an existing reqwest [`ReqwestClient`]. `timeout` bounds every request sent
	/// through this transport, whatever the wrapped client was configured with.
	pub fn with_client(client: ReqwestClient, timeout: std::time::Duration) -> Self {
		Self { client, timeout }
	}

	fn map_error(&self, err: ReqwestError) -> TransportError {
		if err.is_timeout() {
			TransportError::Timeout { timeout: self.timeout }
		} else {
			TransportError::network(err)
		}
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Put => reqwest::Method::PUT,
				Method::Patch => reqwest::Method::PATCH,
				Method::Delete => reqwest::Method::DELETE,
			};
			let mut builder = self.client.request(method, request.url).timeout(self.timeout);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json").body(body);
			}

			let response = builder.send().await.map_err(|e| self.map_error(e))?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.bytes().await.map_err(|e| self.map_error(e))?.to_vec();

			Ok(ApiResponse { status, body, retry_after })
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<i64>() {
		return (secs >= 0).then(|| Duration::seconds(secs));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_debug_redacts_bearer() {
		let request = ApiRequest::new(
			Method::Get,
			Url::parse("http://localhost:8080/api/v1/auth/me").expect("Fixture URL should parse."),
		)
		.with_header("Authorization", "Bearer super-secret")
		.with_header("X-Request-ID", "trace-1");
		let rendered = format!("{request:?}");

		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("trace-1"));
		assert_eq!(request.header("authorization"), Some("Bearer super-secret"));
	}

	#[test]
	fn response_status_helpers() {
		assert!(ApiResponse::new(204, Vec::new()).is_success());
		assert!(!ApiResponse::new(302, Vec::new()).is_success());
		assert!(ApiResponse::new(401, Vec::new()).is_unauthorized());
		assert!(!ApiResponse::new(403, Vec::new()).is_unauthorized());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn retry_after_accepts_seconds_and_rejects_garbage() {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, "12".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(12)));

		headers.insert(RETRY_AFTER, "soon".parse().expect("Header value should parse."));

		assert_eq!(parse_retry_after(&headers), None);
	}
}
