use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use catalog_core::catalog::ProductError;
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<ProductError>().is_some() {
            StatusCode::BAD_REQUEST
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.status()
        } else if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            rejection.status()
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Returns true if the request itself was at fault.
    fn is_client_fault(&self) -> bool {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => repo_error.is_client_fault(),
            None => self.status_code().is_client_error(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if self.is_client_fault() {
            tracing::warn!(status = %status, message = %message, "API error");
        } else {
            tracing::error!(status = %status, error = %message, "API error");
        }

        let body = ErrorBody {
            message,
            timestamp: Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let error = AppError::from(RepositoryError::NotFound {
            entity_type: "Product",
            id: "3".to_string(),
        });

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product not found: 3");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_product_error_maps_to_400() {
        let response = AppError::from(ProductError::EmptyName).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Product name cannot be empty");
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_503() {
        let error = AppError::from(RepositoryError::ConnectionFailed("db down".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_client_fault_classification() {
        assert!(AppError::from(RepositoryError::InvalidData("x".to_string())).is_client_fault());
        assert!(AppError::from(ProductError::InvalidId(0)).is_client_fault());
        assert!(!AppError::from(RepositoryError::QueryFailed("x".to_string())).is_client_fault());
        assert!(!AppError(anyhow::anyhow!("boom")).is_client_fault());
    }

    #[tokio::test]
    async fn test_unknown_error_maps_to_500() {
        let error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
