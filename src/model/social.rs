//! Friends, activity feed, and leaderboards.

// self
use crate::{
	_prelude::*,
	auth::{ActivityId, Symbol, UserId},
	model::{PerformanceMetrics, User},
};

/// State of a friendship.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendStatus {
	/// Request sent, not yet accepted.
	Pending,
	/// Mutual friendship.
	Accepted,
	/// Blocked.
	Blocked,
}

/// Friend list entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
	/// Friendship identifier.
	pub id: String,
	/// The friend's user identifier.
	pub user_id: UserId,
	/// The friend's display name.
	pub name: String,
	/// The friend's avatar URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// Friendship state.
	pub status: FriendStatus,
	/// When the friendship was established.
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub followed_at: Option<OffsetDateTime>,
}

/// Kind of feed activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
	/// Shared trade.
	Trade,
	/// Text post.
	Post,
	/// Unlocked achievement.
	Achievement,
}

/// Entry of the friends' activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendActivity {
	/// Activity identifier.
	pub id: ActivityId,
	/// Author.
	pub user_id: UserId,
	/// Author's display name.
	pub user_name: String,
	/// Author's avatar URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_avatar: Option<String>,
	/// Kind of activity.
	pub activity_type: ActivityType,
	/// Headline.
	pub title: String,
	/// Body text.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Profit or loss of a shared trade.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub profit_loss: Option<f64>,
	/// Instrument of a shared trade.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub symbol: Option<Symbol>,
	/// Visible beyond friends.
	pub is_public: bool,
	/// Number of likes.
	pub likes_count: u64,
	/// Number of comments.
	pub comments_count: u64,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Leaderboard ranking window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardPeriod {
	/// Today.
	Daily,
	/// This week.
	#[default]
	Weekly,
	/// This month.
	Monthly,
	/// Since sign-up.
	AllTime,
}
impl LeaderboardPeriod {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			LeaderboardPeriod::Daily => "daily",
			LeaderboardPeriod::Weekly => "weekly",
			LeaderboardPeriod::Monthly => "monthly",
			LeaderboardPeriod::AllTime => "all_time",
		}
	}
}
impl Display for LeaderboardPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Ranked traders for one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
	/// Ranking window.
	pub period: LeaderboardPeriod,
	/// Ranked entries, best first.
	pub users: Vec<LeaderboardEntry>,
	/// Ranking time.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// One row of a [`Leaderboard`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
	/// 1-based rank.
	pub rank: u32,
	/// Ranked user.
	pub user_id: UserId,
	/// Display name.
	pub user_name: String,
	/// Avatar URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	/// Profit or loss in the window.
	#[serde(rename = "totalPnL")]
	pub total_pnl: f64,
	/// Profit or loss in the window, in percent.
	#[serde(rename = "totalPnLPercent")]
	pub total_pnl_percent: f64,
	/// Share of winning trades.
	pub win_rate: f64,
	/// Number of trades.
	pub total_trades: u64,
	/// Earned badges.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub badges: Vec<String>,
}

/// A friend's profile with their performance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FriendProfile {
	/// Profile.
	pub user: User,
	/// All-time performance.
	pub stats: PerformanceMetrics,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FriendRequest<'a> {
	pub(crate) friend_id: &'a UserId,
}

#[derive(Serialize)]
pub(crate) struct CommentRequest<'a> {
	pub(crate) comment: &'a str,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn leaderboard_period_defaults_to_weekly() {
		assert_eq!(LeaderboardPeriod::default().to_string(), "weekly");
		assert_eq!(
			serde_json::to_value(LeaderboardPeriod::AllTime).expect("Period should serialize."),
			"all_time",
		);
	}
}
