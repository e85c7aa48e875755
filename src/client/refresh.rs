//! Session refresh with a singleflight guard, CAS rotation, and metrics.
//!
//! Every 401 recovery and every explicit [`AuthApi::refresh`](crate::api::AuthApi::refresh)
//! funnels through one [`AsyncMutex`] per client. A caller that acquires the guard after
//! another caller already rotated the access token reuses the rotated pair instead of
//! spending the refresh token again. Successful exchanges are written with
//! [`CredentialStore::compare_and_swap`](crate::store::CredentialStore::compare_and_swap) on
//! the refresh token that was spent, so a logout or a new login that lands mid-refresh is
//! never overwritten. A failed exchange clears the store.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	auth::{CredentialPair, TokenSecret},
	client::{ApiClient, TraceId, invoke},
	error::{ApiError, CodecError},
	http::{ApiRequest, ApiTransport, Method},
	model::RefreshResponse,
	obs::{self, CallKind, CallOutcome, CallSpan},
	store::CompareAndSwapOutcome,
};

const REFRESH_SEGMENTS: [&str; 2] = ["auth", "refresh"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
	refresh_token: &'a str,
}

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// Renews the session after `rejected` drew a 401, returning the pair to replay with.
	pub(crate) async fn recover_session(
		&self,
		rejected: &CredentialPair,
	) -> Result<CredentialPair> {
		let _singleflight = self.refresh_guard.lock().await;

		match self.store.load().await? {
			None => Err(Error::reauthentication("stored session was cleared")),
			Some(current) if current.access_token != rejected.access_token => {
				self.refresh_metrics.record_coalesced();

				Ok(current)
			},
			Some(current) => self.refresh_locked(&current).await.map(|(_, pair)| pair),
		}
	}

	/// Unconditionally exchanges the stored refresh token.
	pub(crate) async fn refresh_session(&self) -> Result<RefreshResponse> {
		let _singleflight = self.refresh_guard.lock().await;
		let current = self
			.store
			.load()
			.await?
			.ok_or_else(|| Error::reauthentication("no stored session to refresh"))?;

		self.refresh_locked(&current).await.map(|(response, _)| response)
	}

	// Must be called with `refresh_guard` held.
	async fn refresh_locked(
		&self,
		current: &CredentialPair,
	) -> Result<(RefreshResponse, CredentialPair)> {
		const KIND: CallKind = CallKind::Refresh;

		let trace_id = TraceId::generate();
		let span = CallSpan::new(KIND, "auth/refresh", &trace_id);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		self.refresh_metrics.record_attempt();

		let result = span
			.instrument(async {
				let response = match self.exchange(current, &trace_id).await {
					Ok(response) => response,
					Err(err) => {
						obs::warn_session_cleared(&err);
						self.store.clear().await?;

						return Err(Error::reauthentication_caused_by("session refresh failed", err));
					},
				};
				let rotated = current.rotate(
					TokenSecret::new(response.token.as_str()),
					response.refresh_token.as_deref().map(TokenSecret::new),
				);
				let outcome = self
					.store
					.compare_and_swap(current.refresh_token.expose(), rotated.clone())
					.await?;
				let pair = match outcome {
					CompareAndSwapOutcome::Updated => rotated,
					CompareAndSwapOutcome::Missing => return Err(cleared_during_refresh()),
					CompareAndSwapOutcome::RefreshMismatch =>
						self.store.load().await?.ok_or_else(cleared_during_refresh)?,
				};

				Ok::<_, Error>((response, pair))
			})
			.await;

		match &result {
			Ok(_) => {
				self.refresh_metrics.record_success();
				obs::record_call_outcome(KIND, CallOutcome::Success);
			},
			Err(_) => {
				self.refresh_metrics.record_failure();
				obs::record_call_outcome(KIND, CallOutcome::Failure);
			},
		}

		result
	}

	// Sent without a bearer header; the refresh token is the only credential.
	async fn exchange(
		&self,
		current: &CredentialPair,
		trace_id: &TraceId,
	) -> Result<RefreshResponse> {
		let request = RefreshRequest { refresh_token: current.refresh_token.expose() };
		let body = serde_json::to_vec(&request).map_err(CodecError::Encode)?;
		let request = ApiRequest::new(Method::Post, self.config.endpoint(REFRESH_SEGMENTS))
			.with_header(self.config.trace_header.as_str(), trace_id.as_str())
			.with_body(body);
		let response = self.transport.send(request).await?;

		if !response.is_success() {
			return Err(ApiError::from_response(&response, Some(trace_id)).into());
		}

		invoke::decode(&REFRESH_SEGMENTS.join("/"), &response.body)
	}
}

fn cleared_during_refresh() -> Error {
	Error::reauthentication("stored session was cleared during refresh")
}
