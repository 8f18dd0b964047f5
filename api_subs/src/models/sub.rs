use chrono::{DateTime, Utc};
use common::validation::ValidationErrors;
use db::{
    dtos::subscription::SubscriptionSaveRequest,
    models::subscription::{Category, Currency, Frequency, SubscriptionStatus},
};
use uuid::Uuid;

/// A subscription that passed validation but may still lack its renewal date.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub frequency: Option<Frequency>,
    pub category: Category,
    pub payment_method: String,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    pub renewal_date: Option<DateTime<Utc>>,
    pub user_id: Uuid,
}

impl SubscriptionDraft {
    /// Fails when the renewal date was neither given nor derived.
    pub fn into_save_request(self) -> Result<SubscriptionSaveRequest, ValidationErrors> {
        let Some(renewal_date) = self.renewal_date else {
            let mut errors = ValidationErrors::new();
            errors.push("renewalDate", "Renewal date is required");
            return Err(errors);
        };

        Ok(SubscriptionSaveRequest {
            name: self.name,
            price: self.price,
            currency: self.currency,
            frequency: self.frequency,
            category: self.category,
            payment_method: self.payment_method,
            status: self.status,
            start_date: self.start_date,
            renewal_date,
            user_id: self.user_id,
        })
    }
}
