use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("No recipient address found in payment data")]
    MissingRecipient,

    #[error("Failed to parse payment data: {0}")]
    ParseFailure(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unsupported token: {0}")]
    UnsupportedToken(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(u64),

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("A submission is already in flight for this session")]
    SubmitInFlight,

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    fn http_code(&self) -> StatusCode {
        match self {
            AppError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            AppError::MissingRecipient => StatusCode::BAD_REQUEST,
            AppError::ParseFailure(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedToken(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedChain(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SubmitInFlight => StatusCode::CONFLICT,
            AppError::SigningFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.http_code()
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.http_code();
        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: code.as_u16(),
            result: None::<()>,
            error: Some(ApiError {
                code: code.as_u16(),
                message: self.to_string(),
            }),
        };
        HttpResponse::build(code).json(response)
    }
}
