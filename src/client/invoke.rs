//! Request dispatch with bearer attachment, trace headers, and single-retry 401 recovery.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	client::{ApiClient, RequestDescriptor, TraceId},
	error::{ApiError, CodecError},
	http::{ApiRequest, ApiResponse, ApiTransport},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Executes `descriptor` and returns the raw successful response.
	///
	/// Non-2xx responses become [`Error::Api`]; an unrecoverable 401 becomes
	/// [`Error::ReauthenticationRequired`].
	pub async fn invoke(&self, descriptor: RequestDescriptor) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Request;

		let trace_id = TraceId::generate();
		let path = descriptor.path();
		let span = CallSpan::new(KIND, &path, &trace_id);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.invoke_traced(&descriptor, &trace_id)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Executes `descriptor` and decodes the JSON response body.
	pub async fn invoke_json<R>(&self, descriptor: RequestDescriptor) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let path = descriptor.path();
		let response = self.invoke(descriptor).await?;

		decode(&path, &response.body)
	}

	/// Executes `descriptor`, discarding any response body.
	pub async fn invoke_unit(&self, descriptor: RequestDescriptor) -> Result<()> {
		self.invoke(descriptor).await.map(|_| ())
	}

	async fn invoke_traced(
		&self,
		descriptor: &RequestDescriptor,
		trace_id: &TraceId,
	) -> Result<ApiResponse> {
		let url = descriptor.url(&self.config);
		let credentials = self.store.load().await?;
		let bearer = credentials.as_ref().map(|pair| &pair.access_token);
		let response = self.dispatch(descriptor, &url, trace_id, bearer).await?;

		if !response.is_unauthorized() || !descriptor.recover_unauthorized {
			return accept(response, trace_id);
		}

		let Some(rejected) = credentials else {
			return Err(Error::reauthentication_caused_by(
				"no stored session to refresh",
				ApiError::from_response(&response, Some(trace_id)).into(),
			));
		};

		obs::note_unauthorized(&descriptor.path());

		let renewed = self.recover_session(&rejected).await?;
		let retried =
			self.dispatch(descriptor, &url, trace_id, Some(&renewed.access_token)).await?;

		if retried.is_unauthorized() {
			return Err(Error::reauthentication_caused_by(
				"renewed access token was rejected",
				ApiError::from_response(&retried, Some(trace_id)).into(),
			));
		}

		obs::record_call_outcome(CallKind::Request, CallOutcome::Recovered);

		accept(retried, trace_id)
	}

	async fn dispatch(
		&self,
		descriptor: &RequestDescriptor,
		url: &Url,
		trace_id: &TraceId,
		bearer: Option<&TokenSecret>,
	) -> Result<ApiResponse> {
		let mut request = ApiRequest::new(descriptor.method, url.clone())
			.with_header(self.config.trace_header.as_str(), trace_id.as_str());

		if let Some(token) = bearer {
			request = request.with_header("Authorization", token.bearer());
		}
		if let Some(body) = &descriptor.body {
			request = request.with_body(body.clone());
		}

		Ok(self.transport.send(request).await?)
	}
}

fn accept(response: ApiResponse, trace_id: &TraceId) -> Result<ApiResponse> {
	if response.is_success() {
		Ok(response)
	} else {
		Err(ApiError::from_response(&response, Some(trace_id)).into())
	}
}

pub(crate) fn decode<R>(path: &str, body: &[u8]) -> Result<R>
where
	R: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| CodecError::Decode { path: path.to_owned(), source }.into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::model::PortfolioSummary;

	#[test]
	fn decode_reports_failing_field_path() {
		let err = decode::<PortfolioSummary>("portfolio/u1/summary", br#"{"totalValue":"n/a"}"#)
			.expect_err("A string total value should fail to decode.");
		let Error::Codec(CodecError::Decode { path, source }) = err else {
			panic!("Decode failures should map to CodecError::Decode.");
		};

		assert_eq!(path, "portfolio/u1/summary");
		assert_eq!(source.path().to_string(), "totalValue");
	}

	#[test]
	fn accept_maps_non_success_to_api_error() {
		let trace_id = TraceId::generate();
		let err = accept(ApiResponse::new(404, r#"{"message":"Order not found"}"#), &trace_id)
			.expect_err("404 should not be accepted.");
		let Error::Api(api) = err else {
			panic!("Non-2xx responses should map to Error::Api.");
		};

		assert_eq!(api.message, "Order not found");
		assert_eq!(api.trace_id.as_ref(), Some(&trace_id));
	}
}
