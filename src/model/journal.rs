//! Trade journal entries and per-trade analysis.

// self
use crate::{
	_prelude::*,
	auth::{JournalEntryId, TransactionId, UserId},
	model::{PaginationParams, QueryParams},
};

/// Trader's mood recorded with an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
	/// Confident.
	Confident,
	/// Neutral.
	Neutral,
	/// Uncertain.
	Uncertain,
	/// Regret.
	Regret,
}

/// Journal entry, optionally linked to a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
	/// Entry identifier.
	pub id: JournalEntryId,
	/// Author.
	pub user_id: UserId,
	/// Linked transaction.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub transaction_id: Option<TransactionId>,
	/// Title.
	pub title: String,
	/// Body text.
	pub content: String,
	/// Recorded mood.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mood: Option<Mood>,
	/// User tags.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Attached image URLs.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub images: Vec<String>,
	/// Visible to friends.
	pub is_public: bool,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Last update.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// New journal entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntry {
	/// Title.
	pub title: String,
	/// Body text.
	pub content: String,
	/// Linked transaction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_id: Option<TransactionId>,
	/// Recorded mood.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mood: Option<Mood>,
	/// User tags.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Visible to friends.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_public: Option<bool>,
}
impl NewJournalEntry {
	/// Creates a private, untagged entry.
	pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			content: content.into(),
			transaction_id: None,
			mood: None,
			tags: Vec::new(),
			is_public: None,
		}
	}
}

/// Partial entry update. Unset fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryUpdate {
	/// New title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// New body text.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	/// New mood.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mood: Option<Mood>,
	/// Replacement tag list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	/// New visibility.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_public: Option<bool>,
}

/// Filters for `journal/{user}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JournalFilter {
	/// Page selection and ordering.
	pub page: PaginationParams,
	/// Entries carrying any of these tags; sent comma-separated.
	pub tags: Vec<String>,
}
impl QueryParams for JournalFilter {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		self.page.append_to(out);

		if !self.tags.is_empty() {
			out.push(("tags".to_owned(), self.tags.join(",")));
		}
	}
}

/// Structured post-trade analysis. Also used as the upsert payload, so every field but the
/// transaction link is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAnalysis {
	/// Analyzed transaction; filled in by the backend on upsert.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub transaction_id: Option<TransactionId>,
	/// Why the position was opened.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entry_reason: Option<String>,
	/// Why the position was closed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exit_reason: Option<String>,
	/// Setup label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub setup_type: Option<String>,
	/// Chart timeframe.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timeframe: Option<String>,
	/// Planned reward divided by planned risk.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub risk_reward_ratio: Option<f64>,
	/// Initial stop price.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub initial_stop: Option<f64>,
	/// Target price.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_price: Option<f64>,
	/// Realized profit or loss.
	#[serde(default, rename = "actualPnL", skip_serializing_if = "Option::is_none")]
	pub actual_pnl: Option<f64>,
	/// Takeaways.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lessons_learned: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn journal_filter_joins_tags() {
		let filter = JournalFilter {
			page: PaginationParams::default(),
			tags: vec!["breakout".into(), "earnings".into()],
		};
		let mut out = Vec::new();

		filter.append_to(&mut out);

		assert_eq!(out, vec![("tags".to_owned(), "breakout,earnings".to_owned())]);
	}

	#[test]
	fn trade_analysis_upsert_serializes_only_set_fields() {
		let analysis = TradeAnalysis {
			entry_reason: Some("Breakout above resistance".into()),
			actual_pnl: Some(125.0),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_value(&analysis).expect("Trade analysis should serialize."),
			serde_json::json!({ "entryReason": "Breakout above resistance", "actualPnL": 125.0 }),
		);
	}
}
