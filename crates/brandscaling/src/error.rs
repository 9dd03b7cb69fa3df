use crate::assessment::AssessmentServiceError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::warn;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Input(String),
    Assessment(AssessmentServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input(reason) => write!(f, "invalid input: {}", reason),
            AppError::Assessment(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input(_) => None,
            AppError::Assessment(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Assessment(err) => match err {
                AssessmentServiceError::InvalidAnswerCount { .. }
                | AssessmentServiceError::UnknownQuestion(_)
                | AssessmentServiceError::DuplicateAnswer(_) => StatusCode::BAD_REQUEST,
                AssessmentServiceError::RetakeCooldown { .. } => StatusCode::TOO_MANY_REQUESTS,
                AssessmentServiceError::ResultNotFound(_) => StatusCode::NOT_FOUND,
                AssessmentServiceError::Repository(_) => {
                    warn!(error = %err, "quiz storage unavailable");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            AppError::Input(reason) => json!({ "error": reason }),
            AppError::Assessment(AssessmentServiceError::RetakeCooldown { next_retake_date }) => {
                json!({
                    "error": self.to_string(),
                    "canRetake": false,
                    "nextRetakeDate": next_retake_date,
                })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<AssessmentServiceError> for AppError {
    fn from(value: AssessmentServiceError) -> Self {
        Self::Assessment(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{RepositoryError, StudentId};

    #[test]
    fn maps_assessment_errors_to_statuses() {
        let missing = AppError::from(AssessmentServiceError::ResultNotFound(StudentId(
            "s-1".to_string(),
        )));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let count = AppError::from(AssessmentServiceError::InvalidAnswerCount {
            expected: 22,
            actual: 3,
        });
        assert_eq!(count.into_response().status(), StatusCode::BAD_REQUEST);

        let input = AppError::Input("bad answers".to_string());
        assert_eq!(input.into_response().status(), StatusCode::BAD_REQUEST);

        let storage = AppError::from(AssessmentServiceError::Repository(
            RepositoryError::Unavailable("offline".to_string()),
        ));
        assert_eq!(
            storage.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn cooldown_body_carries_next_retake_date() {
        let next_retake_date = chrono::Utc::now();
        let response =
            AppError::from(AssessmentServiceError::RetakeCooldown { next_retake_date })
                .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["canRetake"], false);
        assert!(payload["nextRetakeDate"].is_string());
    }
}
