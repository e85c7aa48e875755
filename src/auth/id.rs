//! Strongly typed identifiers used as API path parameters.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}

			/// Returns the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when a value cannot be used as a path parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The value was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (user, order, symbol, ...).
		kind: &'static str,
	},
	/// The value contains whitespace or a control character.
	#[error("{kind} identifier contains the forbidden character {character:?}.")]
	ForbiddenCharacter {
		/// Kind of identifier (user, order, symbol, ...).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The value is `.` or `..`, which URL resolution would collapse into a parent path.
	#[error("{kind} identifier cannot be a dot segment.")]
	DotSegment {
		/// Kind of identifier (user, order, symbol, ...).
		kind: &'static str,
	},
	/// The value exceeded the allowed byte length.
	#[error("{kind} identifier exceeds {max} bytes.")]
	TooLong {
		/// Kind of identifier (user, order, symbol, ...).
		kind: &'static str,
		/// Maximum permitted length in bytes.
		max: usize,
	},
}

def_id! { UserId, "Unique identifier for a platform user.", "User" }
def_id! { HoldingId, "Identifier for a portfolio holding.", "Holding" }
def_id! { TransactionId, "Identifier for an executed or manual transaction.", "Transaction" }
def_id! { OrderId, "Identifier for a brokerage order.", "Order" }
def_id! { JournalEntryId, "Identifier for a trade journal entry.", "JournalEntry" }
def_id! { AccountId, "Identifier for a connected external account.", "Account" }
def_id! { ActivityId, "Identifier for a social feed activity.", "Activity" }
def_id! { NotificationId, "Identifier for a user notification.", "Notification" }
def_id! { Symbol, "Ticker symbol of a tradable instrument.", "Symbol" }

// Identifiers become single URL path segments. Reserved characters such as `/` or `?` are
// percent-encoded by `ClientConfig::endpoint`; dot segments cannot be encoded away.
fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if let Some(character) = view.chars().find(|c| c.is_whitespace() || c.is_control()) {
		return Err(IdentifierError::ForbiddenCharacter { kind, character });
	}
	if matches!(view, "." | "..") {
		return Err(IdentifierError::DotSegment { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}
