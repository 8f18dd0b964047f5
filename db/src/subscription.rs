use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::subscription::SubscriptionSaveRequest, models::subscription::Subscription};

pub async fn get_subscription_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    subscription_id: Uuid,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
        .bind(subscription_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_subscriptions_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY renewal_date",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: SubscriptionSaveRequest,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions
            (name, price, currency, frequency, category, payment_method, status, start_date, renewal_date, user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.price)
    .bind(data.currency)
    .bind(data.frequency)
    .bind(data.category)
    .bind(data.payment_method)
    .bind(data.status)
    .bind(data.start_date)
    .bind(data.renewal_date)
    .bind(data.user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_subscription<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    subscription_id: Uuid,
    data: SubscriptionSaveRequest,
) -> Res<Subscription> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET name = $1, price = $2, currency = $3, frequency = $4, category = $5,
            payment_method = $6, status = $7, start_date = $8, renewal_date = $9,
            user_id = $10, updated_at = NOW()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.price)
    .bind(data.currency)
    .bind(data.frequency)
    .bind(data.category)
    .bind(data.payment_method)
    .bind(data.status)
    .bind(data.start_date)
    .bind(data.renewal_date)
    .bind(data.user_id)
    .bind(subscription_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
