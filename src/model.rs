//! Typed request and response payloads exchanged with the FinFlow API.
//!
//! Field names follow the backend's camelCase JSON; timestamps are RFC 3339 and money
//! amounts are plain `f64` values as delivered by the backend.

pub mod account;
pub mod analytics;
pub mod journal;
pub mod market;
pub mod notification;
pub mod page;
pub mod portfolio;
pub mod social;
pub mod trading;
pub mod user;

pub use account::*;
pub use analytics::*;
pub use journal::*;
pub use market::*;
pub use notification::*;
pub use page::*;
pub use portfolio::*;
pub use social::*;
pub use trading::*;
pub use user::*;

/// Collects `key=value` pairs for operations that accept optional query filters.
pub trait QueryParams {
	/// Appends every populated filter to `out`, skipping unset values.
	fn append_to(&self, out: &mut Vec<(String, String)>);
}

pub(crate) fn push_opt<V>(out: &mut Vec<(String, String)>, key: &str, value: Option<V>)
where
	V: std::fmt::Display,
{
	if let Some(value) = value {
		out.push((key.to_owned(), value.to_string()));
	}
}
