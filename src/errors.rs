use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::DISH_NOT_FOUND_MSG;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    #[error("{}", DISH_NOT_FOUND_MSG)]
    DishNotFound(i64),
    #[error("Quantity out of range")]
    QuantityOverflow(i64),
    #[error("Selection store is unavailable")]
    StoreUnavailable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::DishNotFound(_) => StatusCode::NOT_FOUND,
            AppError::QuantityOverflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
