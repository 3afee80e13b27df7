use axum::{
    Json,
    response::{
        IntoResponse,
        Response,
    },
};
use fleetac::error::Error as ACError;
use fleetcore::error::ValueError;
use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,
    #[error("403 Forbidden")]
    Forbidden,
    #[error("404 Not Found")]
    NotFound,
    #[error("500 Internal Server Error")]
    InternalServerError,
    #[error("503 Service Unavailable")]
    ServiceUnavailable,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::SERVICE_UNAVAILABLE => AppError::ServiceUnavailable,
            _ => AppError::InternalServerError,
        }
    }
}

impl From<ACError> for AppError {
    fn from(e: ACError) -> Self {
        match e {
            ACError::UnknownPrincipal(_) => AppError::NotFound,
            ACError::Value(ValueError::Unsupported(_)) => AppError::BadRequest,
            ACError::Value(ValueError::EntryNotFound(_)) => AppError::NotFound,
            e => {
                log::error!("{e}");
                AppError::InternalServerError
            }
        }
    }
}

impl From<ValueError> for AppError {
    fn from(e: ValueError) -> Self {
        ACError::from(e).into()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // the body never carries details of the underlying failure
        let body = ErrorBody { error: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}
