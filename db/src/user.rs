use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{dtos::user::UserSaveRequest, models::user::User};

pub async fn get_users<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_user_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts a user. A taken email surfaces as `AppError::DuplicateKey` through
/// the unique index.
pub async fn insert_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: UserSaveRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.password)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn update_user<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    data: UserSaveRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = $1, email = $2, password = $3, updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.password)
    .bind(user_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
