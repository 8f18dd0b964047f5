use common::error::Res;
use db::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::user::UserInput;

pub async fn get_users(pool: &PgPool) -> Res<Vec<User>> {
    db::user::get_users(pool).await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: Uuid) -> Res<User> {
    db::user::get_user_by_id(pool, user_id).await
}

/// Validates and inserts a user. Email uniqueness is left to the unique
/// index, so a taken address comes back as `AppError::DuplicateKey`.
pub async fn create_user(pool: &PgPool, input: UserInput) -> Res<User> {
    let data = input.validate()?;
    let user = db::user::insert_user(pool, data).await?;
    log::info!("Created user {}", user.id);
    Ok(user)
}

pub async fn update_user(pool: &PgPool, user_id: Uuid, patch: UserInput) -> Res<User> {
    let existing = db::user::get_user_by_id(pool, user_id).await?;
    let data = UserInput::from(&existing).merge(patch).validate()?;
    db::user::update_user(pool, user_id, data).await
}
