//! In-app notifications and push subscriptions.

// self
use crate::{
	_prelude::*,
	api::def_group,
	auth::{NotificationId, UserId},
	client::RequestDescriptor,
	http::ApiTransport,
	model::{Notification, NotificationFilter, Paginated, PushSubscription, UnreadCount},
};

def_group! { NotificationsApi, "Notification operations under `notifications/`." }
impl<T> NotificationsApi<'_, T>
where
	T: ?Sized + ApiTransport,
{
	/// Pages through the user's notifications.
	pub async fn list(
		&self,
		user: &UserId,
		filter: &NotificationFilter,
	) -> Result<Paginated<Notification>> {
		self.client
			.invoke_json(RequestDescriptor::get(["notifications", user.as_str()]).query_params(filter))
			.await
	}

	/// Marks one notification as read.
	pub async fn mark_read(self, notification: &NotificationId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::patch(["notifications", notification.as_str(), "read"]))
			.await
	}

	/// Marks every notification of the user as read.
	pub async fn mark_all_read(self, user: &UserId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::post(["notifications", user.as_str(), "read-all"]))
			.await
	}

	/// Deletes one notification.
	pub async fn delete(self, notification: &NotificationId) -> Result<()> {
		self.client
			.invoke_unit(RequestDescriptor::delete(["notifications", notification.as_str()]))
			.await
	}

	/// Returns the number of unread notifications.
	pub async fn unread_count(self, user: &UserId) -> Result<u64> {
		let count = self
			.client
			.invoke_json::<UnreadCount>(RequestDescriptor::get([
				"notifications",
				user.as_str(),
				"unread-count",
			]))
			.await?;

		Ok(count.count)
	}

	/// Registers a web push subscription.
	pub async fn subscribe(self, user: &UserId, subscription: &PushSubscription) -> Result<()> {
		let descriptor = RequestDescriptor::post(["notifications", user.as_str(), "subscribe"])
			.json(subscription)?;

		self.client.invoke_unit(descriptor).await
	}
}
