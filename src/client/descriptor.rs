//! Declarative description of one API call.

// self
use crate::{
	_prelude::*, config::ClientConfig, error::CodecError, http::Method, model::QueryParams,
};

/// Method, path, query, and body of a call, independent of credentials and tracing.
///
/// Path segments are kept unencoded and joined by [`ClientConfig::endpoint`], which
/// percent-encodes each one.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: Method,
	/// Path segments below the API prefix.
	pub segments: Vec<String>,
	/// Query pairs in insertion order.
	pub query: Vec<(String, String)>,
	/// Serialized JSON body.
	pub body: Option<Vec<u8>>,
	/// Whether a 401 may be answered with a refresh and replay.
	pub recover_unauthorized: bool,
	/// Whether the path lives under `/api/<version>`.
	pub versioned: bool,
}
impl RequestDescriptor {
	/// Creates a descriptor for `method` on the given path segments.
	pub fn new<I, S>(method: Method, segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			method,
			segments: segments.into_iter().map(|segment| segment.as_ref().to_owned()).collect(),
			query: Vec::new(),
			body: None,
			recover_unauthorized: true,
			versioned: true,
		}
	}

	/// `GET` descriptor.
	pub fn get<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(Method::Get, segments)
	}

	/// `POST` descriptor.
	pub fn post<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(Method::Post, segments)
	}

	/// `PATCH` descriptor.
	pub fn patch<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(Method::Patch, segments)
	}

	/// `DELETE` descriptor.
	pub fn delete<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(Method::Delete, segments)
	}

	/// Appends a query pair.
	pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.query.push((key.into(), value.to_string()));

		self
	}

	/// Appends every populated filter of `params`.
	pub fn query_params(mut self, params: &impl QueryParams) -> Self {
		params.append_to(&mut self.query);

		self
	}

	/// Serializes `body` as the JSON payload.
	pub fn json<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_vec(body).map_err(CodecError::Encode)?);

		Ok(self)
	}

	/// Treats a 401 as an ordinary failure instead of a refresh trigger.
	///
	/// Used by credential exchanges (login, register, logout) where a 401 means the submitted
	/// credentials were wrong, not that the session expired.
	pub fn without_refresh(mut self) -> Self {
		self.recover_unauthorized = false;

		self
	}

	/// Resolves the path outside the versioned API prefix.
	pub fn unversioned(mut self) -> Self {
		self.versioned = false;

		self
	}

	/// Slash-joined path used in logs and decode errors.
	pub fn path(&self) -> String {
		self.segments.join("/")
	}

	/// Resolves the absolute URL, query string included.
	pub fn url(&self, config: &ClientConfig) -> Url {
		let mut url = if self.versioned {
			config.endpoint(&self.segments)
		} else {
			config.unversioned_endpoint(&self.segments)
		};

		if !self.query.is_empty() {
			url.query_pairs_mut().extend_pairs(&self.query);
		}

		url
	}
}
