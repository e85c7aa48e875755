//! User notifications and push subscriptions.

// self
use crate::{
	_prelude::*,
	auth::{NotificationId, UserId},
	model::{PaginationParams, QueryParams, push_opt},
};

/// Notification category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
	/// Trade execution.
	Trade,
	/// Price alert.
	PriceAlert,
	/// Friend activity.
	Friend,
	/// Achievement.
	Achievement,
	/// Platform message.
	System,
}

/// Notification urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
	/// Low.
	Low,
	/// Medium.
	Medium,
	/// High.
	High,
	/// Urgent.
	Urgent,
}

/// In-app notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
	/// Notification identifier.
	pub id: NotificationId,
	/// Recipient.
	pub user_id: UserId,
	/// Category.
	#[serde(rename = "type")]
	pub kind: NotificationType,
	/// Urgency.
	pub priority: NotificationPriority,
	/// Headline.
	pub title: String,
	/// Body text.
	pub message: String,
	/// Category-specific payload.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Map<String, serde_json::Value>>,
	/// Read flag.
	pub is_read: bool,
	/// Deep link.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub action_url: Option<String>,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Filters for `notifications/{user}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationFilter {
	/// Page selection and ordering.
	pub page: PaginationParams,
	/// Only unread notifications.
	pub unread_only: Option<bool>,
}
impl QueryParams for NotificationFilter {
	fn append_to(&self, out: &mut Vec<(String, String)>) {
		self.page.append_to(out);
		push_opt(out, "unreadOnly", self.unread_only);
	}
}

#[derive(Deserialize)]
pub(crate) struct UnreadCount {
	pub(crate) count: u64,
}

/// Web push subscription registered for a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
	/// Push service endpoint.
	pub endpoint: String,
	/// Expiry as epoch milliseconds.
	#[serde(default)]
	pub expiration_time: Option<i64>,
	/// Encryption keys.
	pub keys: PushKeys,
}

/// Encryption keys of a [`PushSubscription`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushKeys {
	/// Client public key.
	pub p256dh: String,
	/// Authentication secret.
	pub auth: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn notification_keeps_free_form_data() {
		let notification: Notification = serde_json::from_value(serde_json::json!({
			"id": "n1",
			"userId": "u1",
			"type": "price_alert",
			"priority": "urgent",
			"title": "AAPL crossed 200",
			"message": "AAPL is now 201.10",
			"data": { "symbol": "AAPL", "price": 201.1 },
			"isRead": false,
			"createdAt": "2024-03-01T10:00:00Z"
		}))
		.expect("Notification payload should parse.");

		assert_eq!(notification.kind, NotificationType::PriceAlert);
		assert_eq!(
			notification.data.as_ref().and_then(|data| data.get("symbol")),
			Some(&serde_json::json!("AAPL")),
		);
	}

	#[test]
	fn push_subscription_round_trips_expiration() {
		let subscription: PushSubscription = serde_json::from_str(
			r#"{"endpoint":"https://push.example/abc","expirationTime":null,"keys":{"p256dh":"k","auth":"a"}}"#,
		)
		.expect("Push subscription should parse.");

		assert!(subscription.expiration_time.is_none());
		assert_eq!(subscription.keys.auth, "a");
	}
}
