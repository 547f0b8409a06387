use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Body of every error response: the error itself plus its message
/// repeated at the top level.
#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: ErrorDetail<'a>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorDetail<'a> {
    pub code: &'a str,
    pub status: u16,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    DbError(#[from] DbErr),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DbError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            log::error!("{} {}: {}", status.as_u16(), self.code(), message);
        } else {
            log::warn!("{} {}: {}", status.as_u16(), self.code(), message);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                status: status.as_u16(),
                message: message.clone(),
            },
            message,
        };
        HttpResponse::build(status).json(body)
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DbError(_) => "DB_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
        }
    }
}
