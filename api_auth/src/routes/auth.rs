use actix_web::{Responder, get};
use common::http::Success;
use serde_json::json;

/// Placeholder for the sign-up flow.
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/v1/auth/sign-up');
/// const data = await response.json();
/// // { title: "Sign Up" }
/// ```
#[get("/sign-up")]
pub async fn get_sign_up() -> impl Responder {
    Success::ok(json!({ "title": "Sign Up" }))
}

/// Placeholder for the sign-in flow.
#[get("/sign-in")]
pub async fn get_sign_in() -> impl Responder {
    Success::ok(json!({ "title": "Sign in" }))
}

/// Placeholder for the sign-out flow.
#[get("/sign-out")]
pub async fn get_sign_out() -> impl Responder {
    Success::ok(json!({ "title": "Sign out" }))
}
