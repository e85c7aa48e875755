// self
use crate::{_prelude::*, client::TraceId, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around API calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the call kind, stage, and trace identifier.
	pub fn new(kind: CallKind, stage: &str, trace_id: &TraceId) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"finflow_client.call",
				call = kind.as_str(),
				stage,
				trace_id = trace_id.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage, trace_id);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a warning when the stored session is discarded after a failed refresh.
pub fn warn_session_cleared(reason: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(error = %reason, "Session refresh failed; stored credentials were cleared.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = reason;
	}
}

/// Emits a debug event when a 401 is about to be answered with a refresh.
pub fn note_unauthorized(path: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(path, "Backend rejected the bearer token; attempting refresh.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = path;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn call_span_noop_without_tracing() {
		let trace_id = TraceId::generate();
		let span = CallSpan::new(CallKind::Request, "test", &trace_id);
		let _ = span.instrument(async {});

		warn_session_cleared(&crate::error::TransportError::Io(std::io::Error::other("boom")));
		note_unauthorized("portfolio/u1");
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let trace_id = TraceId::generate();
		let span = CallSpan::new(CallKind::Refresh, "instrument_wraps_future", &trace_id);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
