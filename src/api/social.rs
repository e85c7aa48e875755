//! Friends, activity feed, and leaderboards.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{ActivityId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{
		CommentRequest, Friend, FriendActivity, FriendProfile, FriendRequest, Leaderboard,
		LeaderboardPeriod, Paginated, PaginationParams, User,
	},
};

def_group! { SocialApi, "Social operations under `social/`." }
impl<T> SocialApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Lists the user's friends.
	pub async fn friends(self, user: &UserId) -> Result<Vec<Friend>> {
		self.client.invoke_json(RequestDescriptor::get(["social", user.as_str(), "friends"])).await
	}

	/// Searches users by name or email.
	pub async fn search_users(self, query: &str) -> Result<Vec<User>> {
		self.client.invoke_json(RequestDescriptor::get(["social", "search"]).query("q", query)).await
	}

	/// Sends a friend request from `user` to `friend`.
	pub async fn send_friend_request(self, user: &UserId, friend: &UserId) -> Result<Friend> {
		let descriptor = RequestDescriptor::post(["social", user.as_str(), "friends"])
			.json(&FriendRequest { friend_id: friend })?;

		self.client.invoke_json(descriptor).await
	}

	/// Accepts a pending request from `friend`.
	pub async fn accept_friend_request(self, user: &UserId, friend: &UserId) -> Result<Friend> {
		self.client
			.invoke_json(RequestDescriptor::post([
				"social",
				user.as_str(),
				"friends",
				friend.as_str(),
				"accept",
			]))
			.await
	}

	/// Rejects a pending request from `friend`, or removes an existing friend.
	pub async fn reject_friend_request(self, user: &UserId, friend: &UserId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::delete([
				"social",
				user.as_str(),
				"friends",
				friend.as_str(),
			]))
			.await
	}

	/// Pages through the friends' activity feed.
	pub async fn feed(
		&self,
		user: &UserId,
		page: &PaginationParams,
	) -> Result<Paginated<FriendActivity>> {
		self.client
			.invoke_json(RequestDescriptor::get(["social", user.as_str(), "feed"]).query_params(page))
			.await
	}

	/// Fetches a friend's profile with their all-time performance.
	pub async fn friend_profile(self, friend: &UserId) -> Result<FriendProfile> {
		self.client
			.invoke_json(RequestDescriptor::get(["social", "users", friend.as_str(), "profile"]))
			.await
	}

	/// Fetches the leaderboard for `period`.
	pub async fn leaderboard(self, period: LeaderboardPeriod) -> Result<Leaderboard> {
		self.client
			.invoke_json(RequestDescriptor::get(["social", "leaderboard"]).query("period", period))
			.await
	}

	/// Likes a feed activity.
	pub async fn like_activity(self, activity: &ActivityId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::post(["social", "activities", activity.as_str(), "like"]))
			.await
	}

	/// Comments on a feed activity.
	pub async fn comment_on_activity(self, activity: &ActivityId, comment: &str) -> Result<()> {
		let descriptor = RequestDescriptor::post(["social", "activities", activity.as_str(), "comments"])
			.json(&CommentRequest { comment })?;

		self.client.invoke_unit(descriptor).await
	}
}
