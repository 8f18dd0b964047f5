use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

pub type Res<T> = std::result::Result<T, AppError>;

pub const RESOURCE_NOT_FOUND: &str = "Resource not found.";
pub const DUPLICATED_FIELD: &str = "Duplicated field value entered.";
pub const SERVER_ERROR: &str = "server error";

// PostgreSQL SQLSTATE for a value that cannot be parsed into the column type,
// e.g. a malformed uuid literal.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

#[derive(Error, Debug)]
pub enum AppError {
    // === STORAGE ERRORS ===
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Malformed identifier: {0}")]
    MalformedId(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    // === APPLICATION ERRORS ===
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// The only error shape clients ever see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        ErrorEnvelope {
            success: false,
            error: if message.is_empty() {
                SERVER_ERROR.to_string()
            } else {
                message
            },
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => return AppError::NotFound(RESOURCE_NOT_FOUND.to_string()),
            sqlx::Error::Database(db_error) => {
                if db_error.is_unique_violation() {
                    return AppError::DuplicateKey(db_error.message().to_string());
                }
                // a reference to a row that does not exist is as unusable as a malformed one
                if db_error.is_foreign_key_violation()
                    || db_error.code().as_deref() == Some(INVALID_TEXT_REPRESENTATION)
                {
                    return AppError::MalformedId(db_error.message().to_string());
                }
            }
            _ => {}
        }
        AppError::Database(error)
    }
}

impl AppError {
    /// Maps the error to its HTTP status and client-facing envelope.
    pub fn normalize(&self) -> (StatusCode, ErrorEnvelope) {
        let is_dev = cfg!(debug_assertions);

        let (status, message) = match self {
            AppError::MalformedId(_) => (StatusCode::NOT_FOUND, RESOURCE_NOT_FOUND.to_string()),
            AppError::DuplicateKey(_) => (StatusCode::BAD_REQUEST, DUPLICATED_FIELD.to_string()),
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
            AppError::Database(error) => {
                let message = if is_dev { error.to_string() } else { String::new() };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, ErrorEnvelope::new(message))
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let (status, envelope) = self.normalize();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        HttpResponse::build(status).json(envelope)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.normalize().0
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use actix_web::{App, get, test};
    use serde_json::{Value, json};
    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct FakeDbError {
        kind: ErrorKind,
        code: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("fake database failure")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database failure"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.kind {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn storage_error(kind: ErrorKind, code: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { kind, code }))
    }

    #[::std::prelude::v1::test]
    fn duplicate_key_maps_to_400() {
        let error = AppError::from(storage_error(ErrorKind::UniqueViolation, Some("23505")));
        assert!(matches!(error, AppError::DuplicateKey(_)));

        let (status, envelope) = error.normalize();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope, ErrorEnvelope::new(DUPLICATED_FIELD));
    }

    #[::std::prelude::v1::test]
    fn malformed_identifier_maps_to_404() {
        let error = AppError::from(storage_error(ErrorKind::Other, Some("22P02")));
        let (status, envelope) = error.normalize();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error, RESOURCE_NOT_FOUND);
        assert!(!envelope.success);
    }

    #[::std::prelude::v1::test]
    fn dangling_reference_maps_to_404() {
        let error = AppError::from(storage_error(ErrorKind::ForeignKeyViolation, Some("23503")));
        assert_eq!(error.normalize().0, StatusCode::NOT_FOUND);
    }

    #[::std::prelude::v1::test]
    fn missing_row_maps_to_404() {
        let (status, envelope) = AppError::from(sqlx::Error::RowNotFound).normalize();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(envelope.error, RESOURCE_NOT_FOUND);
    }

    #[::std::prelude::v1::test]
    fn unclassified_storage_error_maps_to_500() {
        let error = AppError::from(storage_error(ErrorKind::Other, Some("XX000")));
        assert!(matches!(error, AppError::Database(_)));
        assert_eq!(error.normalize().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[::std::prelude::v1::test]
    fn validation_messages_are_joined() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("startDate", "Start date must be in the past");

        let (status, envelope) = AppError::from(errors).normalize();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            envelope.error,
            "Name is required, Start date must be in the past"
        );
    }

    #[::std::prelude::v1::test]
    fn empty_message_falls_back_to_server_error() {
        let (status, envelope) = AppError::Internal(String::new()).normalize();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope.error, SERVER_ERROR);

        let (_, envelope) = AppError::Internal("queue is closed".into()).normalize();
        assert_eq!(envelope.error, "queue is closed");
    }

    #[get("/boom")]
    async fn boom() -> Res<HttpResponse> {
        Err(AppError::DuplicateKey("users_email_key".into()))
    }

    #[actix_web::test]
    async fn handler_errors_render_the_envelope() {
        let app = test::init_service(App::new().service(boom)).await;
        let req = test::TestRequest::get().uri("/boom").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "error": "Duplicated field value entered." })
        );
    }
}
