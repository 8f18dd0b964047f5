use chrono::{DateTime, Utc};
use common::error::Res;
use db::dtos::subscription::SubscriptionSaveRequest;
use db::models::subscription::Subscription;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::sub::SubscriptionInput;
use crate::services::lifecycle;

pub async fn get_subscription_by_id(pool: &PgPool, subscription_id: Uuid) -> Res<Subscription> {
    db::subscription::get_subscription_by_id(pool, subscription_id).await
}

pub async fn get_user_subscriptions(pool: &PgPool, user_id: Uuid) -> Res<Vec<Subscription>> {
    db::subscription::get_subscriptions_by_user_id(pool, user_id).await
}

/// Validates the input and resolves derived fields, producing the exact row
/// that will be written. Nothing here touches the database.
pub fn prepare_subscription(
    input: SubscriptionInput,
    now: DateTime<Utc>,
) -> Res<SubscriptionSaveRequest> {
    let mut draft = input.validate(now)?;
    lifecycle::derive(&mut draft, now);
    Ok(draft.into_save_request()?)
}

pub async fn create_subscription(pool: &PgPool, input: SubscriptionInput) -> Res<Subscription> {
    let data = prepare_subscription(input, Utc::now())?;
    let subscription = db::subscription::insert_subscription(pool, data).await?;
    log::info!(
        "Created subscription {} for user {}",
        subscription.id,
        subscription.user_id
    );
    Ok(subscription)
}

/// Applies `patch` on top of the stored subscription and re-runs validation
/// and derivation on the merged record before writing it back.
pub async fn update_subscription(
    pool: &PgPool,
    subscription_id: Uuid,
    patch: SubscriptionInput,
) -> Res<Subscription> {
    let existing = db::subscription::get_subscription_by_id(pool, subscription_id).await?;
    let merged = SubscriptionInput::from(&existing).merge(patch);
    let data = prepare_subscription(merged, Utc::now())?;
    db::subscription::update_subscription(pool, subscription_id, data).await
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use common::error::AppError;
    use db::models::subscription::{Category, Currency, Frequency, SubscriptionStatus};

    use super::*;

    fn netflix(start: DateTime<Utc>) -> SubscriptionInput {
        SubscriptionInput {
            name: Some("Netflix Plan".into()),
            price: Some(15.0),
            frequency: Some("monthly".into()),
            category: Some("other".into()),
            payment_method: Some("card".into()),
            start_date: Some(start),
            user: Some(Uuid::new_v4()),
            ..Default::default()
        }
    }

    #[test]
    fn monthly_plan_started_a_month_ago_is_expired() {
        let now = Utc::now();
        let start = now - TimeDelta::days(30) - TimeDelta::seconds(1);

        let data = prepare_subscription(netflix(start), now).unwrap();

        assert_eq!(data.renewal_date, start + TimeDelta::days(30));
        assert!(data.renewal_date < now);
        assert_eq!(data.status, SubscriptionStatus::Expired);
        assert_eq!(data.currency, Currency::Usd);
        assert_eq!(data.category, Category::Other);
        assert_eq!(data.frequency, Some(Frequency::Monthly));
    }

    #[test]
    fn recent_plan_stays_active() {
        let now = Utc::now();
        let start = now - TimeDelta::days(2);

        let data = prepare_subscription(netflix(start), now).unwrap();

        assert_eq!(data.renewal_date, start + TimeDelta::days(30));
        assert_eq!(data.status, SubscriptionStatus::Active);
    }

    #[test]
    fn invalid_input_never_reaches_derivation() {
        let now = Utc::now();
        let input = SubscriptionInput {
            price: Some(-3.0),
            ..netflix(now + TimeDelta::days(1))
        };

        let err = prepare_subscription(input, now).unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(
                errors.to_string(),
                "Price must be greater than 0, Start date must be in the past"
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn patched_record_is_rederived() {
        let now = Utc::now();
        let start = now - TimeDelta::days(3);
        let stored = prepare_subscription(netflix(start), now).unwrap();
        assert_eq!(stored.status, SubscriptionStatus::Active);

        // an update that pulls the renewal date into the past
        let base = SubscriptionInput {
            renewal_date: Some(stored.renewal_date),
            ..netflix(start)
        };
        let patch = SubscriptionInput {
            renewal_date: Some(now - TimeDelta::hours(1)),
            ..Default::default()
        };

        let updated = prepare_subscription(base.merge(patch), now).unwrap();
        assert_eq!(updated.status, SubscriptionStatus::Expired);
    }
}
