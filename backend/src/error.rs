use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::constants::{CATEGORY_NOT_FOUND_ERROR, NO_FOOD_ITEMS_ERROR};
use shared::ErrorResponse;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug)]
pub enum ApiError {
    NoFoodItems,
    CategoryNotFound(String),
    Validation(String),
    NoThemes,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFoodItems => write!(f, "{}", NO_FOOD_ITEMS_ERROR),
            Self::CategoryNotFound(_) => write!(f, "{}", CATEGORY_NOT_FOUND_ERROR),
            Self::Validation(message) => write!(f, "{}", message),
            Self::NoThemes => write!(f, "No themes configured"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoFoodItems | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            Self::NoThemes => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Fields are checked in this order so the reported message is stable
const VALIDATED_FIELDS: [&str; 2] = ["items", "name"];

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.errors();
        let message = VALIDATED_FIELDS
            .iter()
            .filter_map(|field| fields.get(field))
            .chain(fields.iter().filter(|(k, _)| !VALIDATED_FIELDS.contains(*k)).map(|(_, v)| v))
            .find_map(|kind| match kind {
                ValidationErrorsKind::Field(errs) => {
                    errs.iter().find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                }
                _ => None,
            })
            .unwrap_or_else(|| "Invalid request".to_string());
        ApiError::Validation(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
