use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::domain::ValidationError;
use crate::utils::error_chain_fmt;

#[derive(serde::Serialize)]
pub struct ErrorBody<'a> {
    error: &'a str,
}

impl<'a> ErrorBody<'a> {
    pub fn new(error: &'a str) -> Self {
        Self { error }
    }
}

/// Everything that can go wrong with a form submission.
///
/// `Display` is exactly what the caller sees; details stay in the logs.
#[derive(thiserror::Error)]
pub enum FormError {
    #[error("Missing required fields")]
    MissingFields(String),
    #[error("Invalid email address")]
    InvalidEmail(String),
    #[error("Failed to send email. Please try again.")]
    Delivery(#[source] anyhow::Error),
}

impl std::fmt::Debug for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingFields(detail) | FormError::InvalidEmail(detail) => {
                write!(f, "{}: {}", self, detail)
            }
            FormError::Delivery(_) => error_chain_fmt(self, f),
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingField(_) => FormError::MissingFields(e.to_string()),
            ValidationError::InvalidEmail(_) => FormError::InvalidEmail(e.to_string()),
        }
    }
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        match self {
            FormError::MissingFields(_) | FormError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            FormError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(&self.to_string()))
    }
}

/// A body that is not JSON, or does not have the expected shape, counts as
/// missing fields.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    FormError::MissingFields(err.to_string()).into()
}
