//! Normalized error types shared by the client, transports, and stores.
//!
//! Every public operation returns [`Error`]. Its `Display` output is the normalized message
//! and [`StdError::source`] exposes the underlying cause, so callers can render a message
//! without matching on transport-specific failures.

// self
use crate::{_prelude::*, client::TraceId, http::ApiResponse};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Backend answered with a non-success status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Stored credentials are unusable; the caller must route the user to a login surface.
	#[error("Re-authentication required: {reason}.")]
	ReauthenticationRequired {
		/// Client-supplied reason string.
		reason: String,
		/// Failure that made the credentials unusable, if any.
		#[source]
		cause: Option<Box<Error>>,
	},
	/// Request or response payload could not be (de)serialized.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Credential storage failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Builds a [`Error::ReauthenticationRequired`] without an underlying cause.
	pub fn reauthentication(reason: impl Into<String>) -> Self {
		Self::ReauthenticationRequired { reason: reason.into(), cause: None }
	}

	/// Builds a [`Error::ReauthenticationRequired`] caused by `cause`.
	pub fn reauthentication_caused_by(reason: impl Into<String>, cause: Error) -> Self {
		Self::ReauthenticationRequired { reason: reason.into(), cause: Some(Box::new(cause)) }
	}

	/// Returns `true` when the caller must re-authenticate before issuing further calls.
	pub fn is_reauthentication_required(&self) -> bool {
		matches!(self, Self::ReauthenticationRequired { .. })
	}

	/// Normalized human-readable message for this failure.
	pub fn message(&self) -> String {
		match self {
			Self::Api(err) => err.message.clone(),
			other => other.to_string(),
		}
	}

	/// HTTP status attached to the failure, when the backend produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(err) => Some(err.status),
			Self::ReauthenticationRequired { cause: Some(cause), .. } => cause.status(),
			_ => None,
		}
	}
}

/// Domain failure reported by the backend through a non-2xx response.
#[derive(Clone, Debug, ThisError)]
#[error("{message}")]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Payload `message` field, or a generic status message when absent.
	pub message: String,
	/// Short error label (e.g. `Not Found`) when the payload carries one.
	pub error: Option<String>,
	/// Machine-readable error code when the payload carries one.
	pub code: Option<String>,
	/// Request path echoed by the backend.
	pub path: Option<String>,
	/// Field-level validation failures.
	pub field_errors: Vec<FieldError>,
	/// Free-form details attached by the backend.
	pub details: Option<serde_json::Value>,
	/// Retry-After hint from upstream, if supplied.
	pub retry_after: Option<Duration>,
	/// Trace identifier of the failing call.
	pub trace_id: Option<TraceId>,
}
impl ApiError {
	/// Builds an error from a non-success response, reading the structured payload when the
	/// body is JSON.
	pub fn from_response(response: &ApiResponse, trace_id: Option<&TraceId>) -> Self {
		let payload = serde_json::from_slice::<ErrorPayload>(&response.body).unwrap_or_default();
		let message = payload
			.message
			.filter(|message| !message.trim().is_empty())
			.unwrap_or_else(|| format!("Request failed with status code {}", response.status));

		Self {
			status: response.status,
			message,
			error: payload.error,
			code: payload.code,
			path: payload.path,
			field_errors: payload.field_errors.unwrap_or_default(),
			details: payload.details,
			retry_after: response.retry_after,
			trace_id: trace_id.cloned(),
		}
	}
}

/// Field-level validation failure reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
	/// Offending field.
	pub field: String,
	/// Validation message.
	pub message: String,
	/// Value the backend rejected.
	#[serde(default)]
	pub rejected_value: Option<serde_json::Value>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorPayload {
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	error: Option<String>,
	#[serde(default)]
	code: Option<String>,
	#[serde(default)]
	path: Option<String>,
	#[serde(default)]
	field_errors: Option<Vec<FieldError>>,
	#[serde(default)]
	details: Option<serde_json::Value>,
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot carry API paths.
	#[error("Base URL `{url}` cannot carry API paths.")]
	InvalidBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Base URL uses an unsupported scheme.
	#[error("Base URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Offending URL.
		url: String,
	},
	/// Base URL carries a query string or fragment.
	#[error("Base URL must not carry a query or fragment: {url}.")]
	UnexpectedUrlComponents {
		/// Offending URL.
		url: String,
	},
	/// API version segment is empty or contains a slash.
	#[error("API version `{version}` must be a single non-empty path segment.")]
	InvalidApiVersion {
		/// Offending version label.
		version: String,
	},
	/// Request timeout must be positive.
	#[error("Request timeout must be greater than zero.")]
	NonPositiveTimeout,
	/// Header name cannot be used on the wire.
	#[error("Header name `{name}` is invalid.")]
	InvalidHeaderName {
		/// Offending header name.
		name: String,
	},
	/// Environment variable holds an unusable value.
	#[error("Environment variable {key} holds an invalid value: {value}.")]
	InvalidEnv {
		/// Variable name.
		key: &'static str,
		/// Raw value read from the environment.
		value: String,
	},
	/// URL could not be parsed.
	#[error("URL is invalid.")]
	InvalidUrl(#[from] url::ParseError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Payload (de)serialization failures.
#[derive(Debug, ThisError)]
pub enum CodecError {
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Encode(#[source] serde_json::Error),
	/// Response body did not match the expected shape.
	#[error("Response body from {path} could not be decoded.")]
	Decode {
		/// API path of the call.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The request exceeded the configured timeout.
	#[error("Request timed out after {timeout:?}.")]
	Timeout {
		/// Timeout applied to the request.
		timeout: std::time::Duration,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response(status: u16, body: &str) -> ApiResponse {
		ApiResponse::new(status, body.as_bytes().to_vec())
	}

	#[test]
	fn api_error_prefers_payload_message() {
		let body = r#"{"status":404,"error":"Not Found","message":"Portfolio not found","path":"/api/v1/portfolio/u1"}"#;
		let err = ApiError::from_response(&response(404, body), None);

		assert_eq!(err.status, 404);
		assert_eq!(err.message, "Portfolio not found");
		assert_eq!(err.error.as_deref(), Some("Not Found"));
		assert_eq!(err.path.as_deref(), Some("/api/v1/portfolio/u1"));
		assert_eq!(err.to_string(), "Portfolio not found");
	}

	#[test]
	fn api_error_falls_back_to_status_message() {
		let err = ApiError::from_response(&response(502, "<html>bad gateway</html>"), None);

		assert_eq!(err.message, "Request failed with status code 502");

		let err = ApiError::from_response(&response(400, r#"{"message":"  "}"#), None);

		assert_eq!(err.message, "Request failed with status code 400");
	}

	#[test]
	fn api_error_collects_field_errors() {
		let body = r#"{"message":"Validation failed","fieldErrors":[{"field":"quantity","message":"must be positive","rejectedValue":-1}]}"#;
		let err = ApiError::from_response(&response(400, body), None);

		assert_eq!(err.field_errors.len(), 1);
		assert_eq!(err.field_errors[0].field, "quantity");
		assert_eq!(err.field_errors[0].rejected_value, Some(serde_json::json!(-1)));
	}

	#[test]
	fn reauthentication_exposes_cause_and_status() {
		let cause = Error::from(ApiError::from_response(&response(401, "{}"), None));
		let err = Error::reauthentication_caused_by("refresh rejected", cause);

		assert!(err.is_reauthentication_required());
		assert_eq!(err.status(), Some(401));
		assert_eq!(err.message(), "Re-authentication required: refresh rejected.");

		let source = StdError::source(&err).expect("Re-authentication error should expose a cause.");

		assert_eq!(source.to_string(), "Request failed with status code 401");
	}
}
