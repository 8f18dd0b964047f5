use chrono::{DateTime, Utc};
use common::validation::{ValidationErrors, non_blank};
use db::models::subscription::{
    Category, Choice, Currency, Frequency, Subscription, SubscriptionStatus,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sub::SubscriptionDraft;

/// Client-supplied subscription fields, used for both creates and patches.
///
/// Every field is optional so that all problems can be reported together
/// instead of failing on the first one during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInput {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub frequency: Option<String>,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub renewal_date: Option<DateTime<Utc>>,
    pub user: Option<Uuid>,
}

impl From<&Subscription> for SubscriptionInput {
    fn from(sub: &Subscription) -> Self {
        SubscriptionInput {
            name: Some(sub.name.clone()),
            price: Some(sub.price),
            currency: Some(sub.currency.as_str().to_string()),
            frequency: sub.frequency.map(|f| f.as_str().to_string()),
            category: Some(sub.category.as_str().to_string()),
            payment_method: Some(sub.payment_method.clone()),
            status: Some(sub.status.as_str().to_string()),
            start_date: Some(sub.start_date),
            renewal_date: Some(sub.renewal_date),
            user: Some(sub.user_id),
        }
    }
}

impl SubscriptionInput {
    /// Overlays every field present in `patch` on top of `self`.
    pub fn merge(self, patch: SubscriptionInput) -> Self {
        SubscriptionInput {
            name: patch.name.or(self.name),
            price: patch.price.or(self.price),
            currency: patch.currency.or(self.currency),
            frequency: patch.frequency.or(self.frequency),
            category: patch.category.or(self.category),
            payment_method: patch.payment_method.or(self.payment_method),
            status: patch.status.or(self.status),
            start_date: patch.start_date.or(self.start_date),
            renewal_date: patch.renewal_date.or(self.renewal_date),
            user: patch.user.or(self.user),
        }
    }

    /// Checks every field rule against `now` and returns the typed draft.
    pub fn validate(self, now: DateTime<Utc>) -> Result<SubscriptionDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required("name", "Name", self.name.filter(|n| !n.is_empty()));
        if let Some(name) = &name {
            errors.length("name", "Name", name, 6, 255);
        }

        let price = errors.required("price", "Price", self.price);
        if price.is_some_and(|p| p < 0.0) {
            errors.push("price", "Price must be greater than 0");
        }

        let currency: Currency =
            choice(&mut errors, "currency", "Currency", self.currency.as_deref()).unwrap_or_default();
        let frequency: Option<Frequency> =
            choice(&mut errors, "frequency", "Frequency", self.frequency.as_deref());
        let category: Option<Category> = errors
            .required("category", "Category", self.category.as_deref())
            .and_then(|c| choice(&mut errors, "category", "Category", Some(c)));
        let status: SubscriptionStatus =
            choice(&mut errors, "status", "Status", self.status.as_deref()).unwrap_or_default();

        let payment_method = errors.required(
            "paymentMethod",
            "Payment method",
            non_blank(self.payment_method),
        );

        let start_date = errors.required("startDate", "Start date", self.start_date);
        if start_date.is_some_and(|start| start > now) {
            errors.push("startDate", "Start date must be in the past");
        }

        match (self.renewal_date, start_date) {
            (Some(renewal), Some(start)) if renewal <= start => {
                errors.push("renewalDate", "Renewal date must be after the start date");
            }
            // nothing to derive the renewal date from later on
            (None, _) if self.frequency.is_none() => {
                errors.push("renewalDate", "Renewal date is required");
            }
            _ => {}
        }

        let user_id = errors.required("user", "User", self.user);

        match (name, price, category, payment_method, start_date, user_id) {
            (
                Some(name),
                Some(price),
                Some(category),
                Some(payment_method),
                Some(start_date),
                Some(user_id),
            ) if errors.is_empty() => Ok(SubscriptionDraft {
                name,
                price,
                currency,
                frequency,
                category,
                payment_method,
                status,
                start_date,
                renewal_date: self.renewal_date,
                user_id,
            }),
            _ => Err(errors),
        }
    }
}

fn choice<T: Choice>(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: Option<&str>,
) -> Option<T> {
    let value = value?;
    let parsed = T::parse(value);
    if parsed.is_none() {
        errors.push(field, format!("{label} must be one of {}", T::allowed()));
    }
    parsed
}
