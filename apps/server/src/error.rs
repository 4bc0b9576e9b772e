use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use octant_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, e.to_string()),
                CoreError::InvalidConfigValue(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::ServiceUnavailable(reason) => {
                (StatusCode::SERVICE_UNAVAILABLE, reason.clone())
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{} {}", status, msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
