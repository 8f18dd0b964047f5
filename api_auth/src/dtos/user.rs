use std::sync::LazyLock;

use common::validation::{ValidationErrors, non_blank};
use db::{dtos::user::UserSaveRequest, models::user::User};
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        UserInput {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            password: Some(user.password.clone()),
        }
    }
}

impl UserInput {
    pub fn merge(self, patch: UserInput) -> Self {
        UserInput {
            name: patch.name.or(self.name),
            email: patch.email.or(self.email),
            password: patch.password.or(self.password),
        }
    }

    /// Trims name and email, lowercases the email and checks every field.
    pub fn validate(self) -> Result<UserSaveRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required("name", "Name", non_blank(self.name));
        if let Some(name) = &name {
            errors.length("name", "Name", name, 5, 50);
        }

        let email = errors.required(
            "email",
            "Email",
            non_blank(self.email).map(|e| e.to_lowercase()),
        );
        if email.as_deref().is_some_and(|e| !EMAIL_SHAPE.is_match(e)) {
            errors.push("email", "Please enter a valid email address");
        }

        let password = errors.required(
            "password",
            "Password",
            self.password.filter(|p| !p.is_empty()),
        );
        if password.as_deref().is_some_and(|p| p.chars().count() < 6) {
            errors.push("password", "Password must be at least 6 characters long");
        }

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(UserSaveRequest {
                name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }
}
