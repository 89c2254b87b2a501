use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::repository::{SessionId, SessionRepository};
use super::service::{Conversation, GuidanceError, GuidanceService};
use crate::error::AppError;

pub const SESSION_COOKIE: &str = "careerbot_session";

/// A single chat turn submitted by the UI.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub message: String,
}

/// Router builder exposing the chat endpoints and report downloads under `reports_path`.
pub fn guidance_router<R>(service: Arc<GuidanceService<R>>, reports_path: &str) -> Router
where
    R: SessionRepository + 'static,
{
    let download_route = format!("{}/:file_name", reports_path.trim_end_matches('/'));

    Router::new()
        .route(
            "/api/v1/chat",
            get(chat_handler::<R>).post(message_handler::<R>),
        )
        .route("/api/v1/chat/restart", post(restart_handler::<R>))
        .route(&download_route, get(report_handler::<R>))
        .with_state(service)
}

pub(crate) async fn chat_handler<R>(
    State(service): State<Arc<GuidanceService<R>>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let id = session_from_headers(&headers);
    let conversation = run_blocking(service, move |service| service.open(id.as_ref())).await?;
    Ok(conversation_response(conversation))
}

pub(crate) async fn message_handler<R>(
    State(service): State<Arc<GuidanceService<R>>>,
    headers: HeaderMap,
    Json(payload): Json<ChatMessage>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let id = session_from_headers(&headers);
    let conversation = run_blocking(service, move |service| {
        service.respond(id.as_ref(), &payload.message)
    })
    .await?;
    Ok(conversation_response(conversation))
}

pub(crate) async fn restart_handler<R>(
    State(service): State<Arc<GuidanceService<R>>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let id = session_from_headers(&headers);
    let conversation = run_blocking(service, move |service| service.restart(id.as_ref())).await?;
    Ok(conversation_response(conversation))
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<GuidanceService<R>>>,
    Path(file_name): Path<String>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let disposition = format!("attachment; filename=\"{file_name}\"");
    let bytes = run_blocking(service, move |service| service.report(&file_name)).await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Advisor calls and file writes block, so each turn runs off the async workers.
async fn run_blocking<R, T, F>(
    service: Arc<GuidanceService<R>>,
    work: F,
) -> Result<T, GuidanceError>
where
    R: SessionRepository + 'static,
    T: Send + 'static,
    F: FnOnce(&GuidanceService<R>) -> Result<T, GuidanceError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || work(&service))
        .await
        .map_err(|err| GuidanceError::Worker(err.to_string()))?
}

pub(crate) fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value))
}

fn session_cookie(id: &SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

fn conversation_response(Conversation { id, session }: Conversation) -> Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(&id))],
        Json(session.view()),
    )
        .into_response()
}
