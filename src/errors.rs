use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the row store or the transport in front of it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Sync engine command failures.
///
/// `Load` means no usable state exists at all; `Remote` means a later mutation
/// failed after any optimistic local change was already rolled back (toggle)
/// or before any local change was made (add/update/delete).
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("initial load failed: {0}")]
    Load(#[source] StoreError),
    #[error("{0}")]
    Validation(String),
    #[error("task {0} not found")]
    TaskNotFound(String),
    #[error("remote call failed: {0}")]
    Remote(#[source] StoreError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        let status = match err {
            SyncError::Validation(_) => StatusCode::BAD_REQUEST,
            SyncError::TaskNotFound(_) => StatusCode::NOT_FOUND,
            SyncError::Load(_) | SyncError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
