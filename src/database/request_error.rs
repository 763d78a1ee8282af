use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::{json::Json, Serialize};
use rocket::Request;
use thiserror::Error;

use super::StoreError;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid data")]
    InvalidData,
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RequestError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::InvalidInput(_) => Self::InvalidData,
            error => Self::Store(error),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorBody {
    error: &'static str,
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, error) = match &self {
            Self::InvalidData => (Status::BadRequest, "Invalid data"),
            Self::Store(error) => {
                tracing::error!("request to {} failed: {}", request.uri(), error);
                (Status::InternalServerError, "Internal server error")
            }
        };

        (status, Json(ErrorBody { error })).respond_to(request)
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
