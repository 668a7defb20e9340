use crate::routes::error_chain_fmt;
use crate::store::StoreError;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::response::Responder;
use rocket::serde::json::{json, Json};
use rocket::Request;

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Subscription not found")]
    NotFound,
    #[error("{0}")]
    Rejected(#[source] StoreError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) | ApiError::Rejected(_) => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::UnexpectedError(_) => Status::InternalServerError,
        }
    }

    /// For list and delete: a missing subscription is still a 404, any other
    /// store failure is a 500.
    pub fn unexpected(e: StoreError, context: String) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            e => ApiError::UnexpectedError(anyhow::Error::new(e).context(context)),
        }
    }
}

/// Create and update report every failure other than a missing subscription
/// as a bad request.
impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Validation(message) => ApiError::Validation(message),
            e @ StoreError::Database(_) => ApiError::Rejected(e),
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            tracing::error!("ApiError: {:?}", self);
        } else {
            tracing::warn!("ApiError: {:?}", self);
        }
        Custom(status, Json(json!({ "error": self.to_string() }))).respond_to(request)
    }
}
