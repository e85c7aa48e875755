//! Gateway health probe.

// self
use crate::{_prelude::*, api::def_group, client::RequestDescriptor, http::ApiTransport};

def_group! { HealthApi, "Gateway liveness probe outside the versioned API." }
impl<T> HealthApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Succeeds when the gateway answers `GET /health` with a 2xx status.
	pub async fn check(self) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::get(["health"]).unversioned().without_refresh())
			.await
	}
}
