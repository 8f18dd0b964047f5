use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::subscription::{Category, Currency, Frequency, SubscriptionStatus};

/// A validated subscription whose renewal date and status are already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionSaveRequest {
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub frequency: Option<Frequency>,
    pub category: Category,
    pub payment_method: String,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub renewal_date: DateTime<Utc>,
    pub user_id: Uuid,
}
