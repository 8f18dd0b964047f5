use actix_web::{Responder, delete, get, post, put, web};
use common::http::Success;
use serde_json::json;
use uuid::Uuid;

// These handlers are placeholders: they answer with a fixed title and do not
// read or write users yet. `{id}` must still be a well-formed uuid.

#[get("")]
pub async fn get_users() -> impl Responder {
    Success::ok(json!({ "title": "Get all users" }))
}

#[get("/{id}")]
pub async fn get_user(_id: web::Path<Uuid>) -> impl Responder {
    Success::ok(json!({ "title": "Get user details" }))
}

/// Placeholder for user creation.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/v1/users', {
///   method: 'POST',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({ name: 'Alice Smith', email: 'alice@x.com', password: 'secret1' })
/// });
/// // { title: "Create a new user" }
/// ```
#[post("")]
pub async fn post_user() -> impl Responder {
    Success::ok(json!({ "title": "Create a new user" }))
}

#[put("/{id}")]
pub async fn put_user(_id: web::Path<Uuid>) -> impl Responder {
    Success::ok(json!({ "title": "Update a user" }))
}

#[delete("/{id}")]
pub async fn delete_user(_id: web::Path<Uuid>) -> impl Responder {
    Success::ok(json!({ "title": "Delete a user" }))
}
