//! HTTP error handling and status mapping.

use crate::error::RepositoryError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// How use-case errors are translated into HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    /// Every use-case error is a 500, missing entities included.
    #[default]
    Collapsed,
    /// Missing entities are 404, store failures 500.
    Distinct,
}

impl ErrorStatusPolicy {
    /// Status code for a use-case error under this policy.
    pub fn status_for(self, err: &RepositoryError) -> StatusCode {
        match (self, err) {
            (ErrorStatusPolicy::Distinct, RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body or identifier could not be decoded
    InvalidInput(String),
    /// Body could not be read, e.g. it exceeds the configured cap
    Body(BytesRejection),
    /// The service layer failed; `status` is already resolved by policy
    UseCase {
        source: RepositoryError,
        status: StatusCode,
    },
    /// Method outside GET/POST/PUT/DELETE
    MethodNotAllowed,
}

impl AppError {
    /// Wrap a service error, resolving its status with `policy`.
    pub fn use_case(source: RepositoryError, policy: ErrorStatusPolicy) -> Self {
        let status = policy.status_for(&source);
        AppError::UseCase { source, status }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Body(rejection) => rejection.status(),
            AppError::UseCase { status, .. } => *status,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InvalidInput(msg) => {
                warn!(error = %msg, "Rejected request input");
                msg
            }
            AppError::Body(rejection) => {
                warn!(error = %rejection, "Rejected request body");
                rejection.body_text()
            }
            AppError::UseCase { source, .. } => {
                error!(error = %source, status = status.as_u16(), "Use case failed");
                source.to_string()
            }
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
        };

        (status, message).into_response()
    }
}
