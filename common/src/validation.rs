use std::fmt;

use serde::Serialize;

/// A single rejected field together with the message shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field failures collected while validating one record.
///
/// Validation never stops at the first failure, so a client fixing a request
/// sees every problem at once. The display form joins the messages with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Returns `value` when nothing was rejected, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Records "`<label>` is required" when `value` is missing.
    pub fn required<T>(&mut self, field: &'static str, label: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(field, format!("{label} is required"));
        }
        value
    }

    /// Checks the character count of `value` against an inclusive range.
    pub fn length(&mut self, field: &'static str, label: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.push(
                field,
                format!("{label} must be at least {min} characters long"),
            );
        } else if len > max {
            self.push(
                field,
                format!("{label} must be at most {max} characters long"),
            );
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Trims `value` and drops it when nothing is left, the way a required text
/// field treats blank input.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
