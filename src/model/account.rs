//! Connected external brokerage accounts.

// self
use crate::{
	_prelude::*,
	auth::{AccountId, UserId},
	model::Holding,
};

/// Supported external platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalPlatform {
	/// Alpaca.
	Alpaca,
	/// Robinhood.
	Robinhood,
	/// Coinbase.
	Coinbase,
	/// Binance.
	Binance,
	/// Interactive Brokers.
	InteractiveBrokers,
	/// TD Ameritrade.
	TdAmeritrade,
}

/// Connection state of an external account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
	/// Linked and healthy.
	Connected,
	/// Link removed or expired.
	Disconnected,
	/// Last sync failed.
	Error,
	/// Sync in progress.
	Syncing,
}

/// Linked external account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAccount {
	/// Account identifier.
	pub id: AccountId,
	/// Owner.
	pub user_id: UserId,
	/// Platform the account lives on.
	pub platform: ExternalPlatform,
	/// Display name.
	pub account_name: String,
	/// Masked account number.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account_number: Option<String>,
	/// Connection state.
	pub status: ConnectionStatus,
	/// Last successful sync.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub last_sync_at: Option<OffsetDateTime>,
	/// Periodic sync enabled.
	pub sync_enabled: bool,
	/// Holdings imported from the account, when embedded.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub holdings: Vec<Holding>,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Progress of an account sync.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
	/// Synced account.
	pub account_id: AccountId,
	/// Connection state.
	pub status: ConnectionStatus,
	/// Last sync time.
	#[serde(with = "time::serde::rfc3339")]
	pub last_sync: OffsetDateTime,
	/// Next scheduled sync.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub next_sync: Option<OffsetDateTime>,
	/// Records imported by the last sync.
	pub items_synced: u64,
	/// Errors reported by the last sync.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
}

/// Request linking a new external account. Platform credentials are forwarded verbatim.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectAccountRequest {
	/// Platform to link.
	pub platform: ExternalPlatform,
	/// Platform-specific credential fields (API key, secret, ...).
	pub credentials: HashMap<String, String>,
	/// Display name.
	pub account_name: String,
}
impl Debug for ConnectAccountRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut keys = self.credentials.keys().collect::<Vec<_>>();

		keys.sort();

		f.debug_struct("ConnectAccountRequest")
			.field("platform", &self.platform)
			.field("credential_keys", &keys)
			.field("account_name", &self.account_name)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn connect_request_debug_lists_keys_only() {
		let request = ConnectAccountRequest {
			platform: ExternalPlatform::InteractiveBrokers,
			credentials: HashMap::from([("apiSecret".to_owned(), "s3cr3t".to_owned())]),
			account_name: "Main".into(),
		};
		let rendered = format!("{request:?}");

		assert!(rendered.contains("apiSecret"));
		assert!(!rendered.contains("s3cr3t"));
		assert_eq!(
			serde_json::to_value(&request).expect("Connect request should serialize.")["platform"],
			"interactive_brokers",
		);
	}
}
