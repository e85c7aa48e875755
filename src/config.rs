//! Client configuration and its validating builder.

// std
use std::{env, time::Duration as StdDuration};
// self
use crate::{_prelude::*, error::ConfigError};

/// Validated client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Gateway base URL (scheme + host + optional path prefix).
	pub base_url: Url,
	/// API version segment inserted after `/api`.
	pub api_version: String,
	/// Upper bound applied to every request by the transport.
	pub timeout: StdDuration,
	/// Header carrying the per-request trace identifier.
	pub trace_header: String,
	/// Optional `User-Agent` override.
	pub user_agent: Option<String>,
}
impl ClientConfig {
	/// Default gateway URL used by local development stacks.
	pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";
	/// Default API version segment.
	pub const DEFAULT_API_VERSION: &'static str = "v1";
	/// Default request timeout.
	pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);
	/// Default trace identifier header.
	pub const DEFAULT_TRACE_HEADER: &'static str = "X-Request-ID";
	/// Environment variable overriding [`ClientConfig::base_url`].
	pub const ENV_BASE_URL: &'static str = "FINFLOW_API_URL";
	/// Environment variable overriding [`ClientConfig::api_version`].
	pub const ENV_API_VERSION: &'static str = "FINFLOW_API_VERSION";
	/// Environment variable overriding [`ClientConfig::timeout`] (whole seconds).
	pub const ENV_TIMEOUT_SECS: &'static str = "FINFLOW_API_TIMEOUT_SECS";

	/// Creates a builder seeded with defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Builds a configuration from `FINFLOW_API_*` environment variables, falling back to
	/// defaults for anything unset or empty.
	pub fn from_env() -> Result<Self, ConfigError> {
		let mut builder = Self::builder();

		if let Some(raw) = read_env(Self::ENV_BASE_URL) {
			builder = builder.base_url(Url::parse(&raw)?);
		}
		if let Some(raw) = read_env(Self::ENV_API_VERSION) {
			builder = builder.api_version(raw);
		}
		if let Some(raw) = read_env(Self::ENV_TIMEOUT_SECS) {
			let secs = raw
				.parse::<u64>()
				.map_err(|_| ConfigError::InvalidEnv { key: Self::ENV_TIMEOUT_SECS, value: raw })?;

			builder = builder.timeout(StdDuration::from_secs(secs));
		}

		builder.build()
	}

	/// Resolves a versioned API URL for the provided path segments.
	///
	/// Segments are percent-encoded individually, so identifiers can never escape their
	/// position in the path.
	pub fn endpoint<I, S>(&self, segments: I) -> Url
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.join(["api", self.api_version.as_str()].into_iter().map(str::to_owned).chain(
			segments.into_iter().map(|segment| segment.as_ref().to_owned()),
		))
	}

	/// Resolves an URL outside the versioned API prefix (e.g. gateway probes).
	pub fn unversioned_endpoint<I, S>(&self, segments: I) -> Url
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.join(segments.into_iter().map(|segment| segment.as_ref().to_owned()))
	}

	fn join(&self, segments: impl Iterator<Item = String>) -> Url {
		let mut url = self.base_url.clone();

		// `validate` guarantees the base URL can carry path segments.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty();

			for segment in segments {
				path.push(&segment);
			}
		}

		url
	}

	fn validate(&self) -> Result<(), ConfigError> {
		let url = &self.base_url;

		if url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { url: url.to_string() });
		}
		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: url.to_string() });
		}
		if url.query().is_some() || url.fragment().is_some() {
			return Err(ConfigError::UnexpectedUrlComponents { url: url.to_string() });
		}
		if self.api_version.is_empty() || self.api_version.contains('/') {
			return Err(ConfigError::InvalidApiVersion { version: self.api_version.clone() });
		}
		if self.timeout.is_zero() {
			return Err(ConfigError::NonPositiveTimeout);
		}

		validate_header_name(&self.trace_header)
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	base_url: Option<Url>,
	api_version: String,
	timeout: StdDuration,
	trace_header: String,
	user_agent: Option<String>,
}
impl ClientConfigBuilder {
	/// Sets the gateway base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the API version segment.
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = version.into();

		self
	}

	/// Sets the request timeout enforced by the transport.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Overrides the trace identifier header name.
	pub fn trace_header(mut self, name: impl Into<String>) -> Self {
		self.trace_header = name.into();

		self
	}

	/// Sets a `User-Agent` for the default transport.
	pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
		self.user_agent = Some(agent.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(ClientConfig::DEFAULT_BASE_URL)?,
		};
		let config = ClientConfig {
			base_url,
			api_version: self.api_version,
			timeout: self.timeout,
			trace_header: self.trace_header,
			user_agent: self.user_agent,
		};

		config.validate()?;

		Ok(config)
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			base_url: None,
			api_version: ClientConfig::DEFAULT_API_VERSION.into(),
			timeout: ClientConfig::DEFAULT_TIMEOUT,
			trace_header: ClientConfig::DEFAULT_TRACE_HEADER.into(),
			user_agent: None,
		}
	}
}

fn read_env(key: &str) -> Option<String> {
	env::var(key).ok().map(|value| value.trim().to_owned()).filter(|value| !value.is_empty())
}

fn validate_header_name(name: &str) -> Result<(), ConfigError> {
	let is_token = |c: char| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c);

	if name.is_empty() || !name.chars().all(is_token) {
		Err(ConfigError::InvalidHeaderName { name: name.to_owned() })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse.")
	}

	#[test]
	fn defaults_match_local_gateway() {
		let config = ClientConfig::builder().build().expect("Default configuration should be valid.");

		assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
		assert_eq!(config.api_version, "v1");
		assert_eq!(config.timeout, StdDuration::from_secs(30));
		assert_eq!(config.trace_header, "X-Request-ID");
	}

	#[test]
	fn endpoint_prefixes_version_and_encodes_segments() {
		let config = ClientConfig::builder()
			.base_url(url("https://gateway.example.com/edge/"))
			.build()
			.expect("Configuration with a path prefix should be valid.");

		assert_eq!(
			config.endpoint(["portfolio", "u1", "summary"]).as_str(),
			"https://gateway.example.com/edge/api/v1/portfolio/u1/summary",
		);
		assert_eq!(
			config.endpoint(["market", "quote", "BRK/B"]).as_str(),
			"https://gateway.example.com/edge/api/v1/market/quote/BRK%2FB",
		);
		assert_eq!(
			config.unversioned_endpoint(["health"]).as_str(),
			"https://gateway.example.com/edge/health",
		);
	}

	#[test]
	fn builder_rejects_invalid_settings() {
		let err = ClientConfig::builder()
			.base_url(url("ftp://example.com"))
			.build()
			.expect_err("Non-HTTP schemes should be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));

		let err = ClientConfig::builder()
			.base_url(url("https://example.com/?debug=1"))
			.build()
			.expect_err("Query strings on the base URL should be rejected.");

		assert!(matches!(err, ConfigError::UnexpectedUrlComponents { .. }));

		let err = ClientConfig::builder()
			.api_version("v1/beta")
			.build()
			.expect_err("Multi-segment versions should be rejected.");

		assert!(matches!(err, ConfigError::InvalidApiVersion { .. }));

		let err = ClientConfig::builder()
			.timeout(StdDuration::ZERO)
			.build()
			.expect_err("Zero timeouts should be rejected.");

		assert!(matches!(err, ConfigError::NonPositiveTimeout));

		let err = ClientConfig::builder()
			.trace_header("X Request Id")
			.build()
			.expect_err("Header names with spaces should be rejected.");

		assert!(matches!(err, ConfigError::InvalidHeaderName { .. }));
	}
}
