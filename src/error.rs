use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum BlogError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] SqlxError),

    #[error("Database error: {0}")]
    Storage(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for BlogError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        let (status, error_body) = match self {
            BlogError::StorageUnavailable(_)
            | BlogError::Storage(_)
            | BlogError::Config(_)
            | BlogError::Io(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn storage_errors_become_opaque_500() {
        let resp = BlogError::Storage(SqlxError::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body_str = std::str::from_utf8(&body).expect("response body was not utf-8");
        assert!(body_str.contains(r#""code":"INTERNAL_ERROR""#));
        assert!(!body_str.contains("RowNotFound"));
    }
}
