use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::aggregator::MoversError;

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalServerError(),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError() => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InternalServerError() => "INTERNAL_SERVER_ERROR",
        }
        .to_string()
    }
}

impl From<MoversError> for AppError {
    fn from(err: MoversError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}
