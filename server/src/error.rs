//! Request failures the handlers report themselves.
//!
//! Anything else (malformed JSON, unparsable path ids) is left to axum's
//! built-in rejections.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

pub const VALIDATION_PROBLEM_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";
pub const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("todo not found")]
    NotFound,

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),
}

/// RFC 9457 body for a rejected creation request.
#[derive(Debug, Serialize)]
pub struct ValidationProblem {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub errors: ValidationErrors,
}

impl ValidationProblem {
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            type_: VALIDATION_PROBLEM_TYPE,
            title: VALIDATION_PROBLEM_TITLE,
            status: StatusCode::BAD_REQUEST.as_u16(),
            errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, PROBLEM_JSON)],
                Json(ValidationProblem::new(errors)),
            )
                .into_response(),
        }
    }
}
