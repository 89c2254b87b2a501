use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::guidance::GuidanceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Guidance(GuidanceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Guidance(err) => write!(f, "guidance error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Guidance(err) => Some(err),
        }
    }
}

impl AppError {
    /// HTTP status for errors that reach a handler. Only guidance failures carry a
    /// client-facing meaning; the rest are startup errors.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Guidance(GuidanceError::UnknownReport(_)) => StatusCode::NOT_FOUND,
            AppError::Guidance(GuidanceError::Repository(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Guidance(GuidanceError::Report(_) | GuidanceError::Worker(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        }

        // The body carries the workflow message only; the variant prefix is for logs.
        let message = match &self {
            AppError::Guidance(err) => err.to_string(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<GuidanceError> for AppError {
    fn from(value: GuidanceError) -> Self {
        Self::Guidance(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::guidance::{ReportError, RepositoryError};

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn unknown_report_is_not_found() {
        let response =
            AppError::from(GuidanceError::UnknownReport("abc.pdf".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await["error"], "report abc.pdf not found");
    }

    #[test]
    fn guidance_failures_map_to_server_statuses() {
        let outage = AppError::from(GuidanceError::Repository(RepositoryError::Unavailable(
            "locked".to_string(),
        )));
        assert_eq!(outage.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let render = AppError::from(GuidanceError::Report(ReportError::Render(
            "bad font".to_string(),
        )));
        assert_eq!(render.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let worker = AppError::from(GuidanceError::Worker("cancelled".to_string()));
        assert_eq!(worker.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_names_the_failing_layer() {
        let err = AppError::from(ConfigError::InvalidPort);
        assert_eq!(err.to_string(), "configuration error: APP_PORT must be a valid u16");
        assert!(std::error::Error::source(&err).is_some());
    }
}
