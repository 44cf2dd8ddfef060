//! Axum route handlers for the notes HTTP API.

use crate::error::ApiError;
use crate::extract::{parse_note_id, JsonBody};
use crate::logging::log_request;
use crate::store::NoteStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::{middleware, Router};
use notes_types::*;
use std::sync::Arc;

pub struct AppState {
    pub store: NoteStore,
}

impl AppState {
    pub fn new(store: NoteStore) -> Arc<Self> {
        Arc::new(Self { store })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/notes",
            get(list_notes).post(create_note).fallback(unknown_endpoint),
        )
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).fallback(unknown_endpoint),
        )
        .route("/api/info", get(info).fallback(unknown_endpoint))
        .fallback(unknown_endpoint)
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}

// GET /api/notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Json<Vec<Note>> {
    Json(state.store.list())
}

// GET /api/notes/:id
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.store.get(id)?))
}

// POST /api/notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = state.store.create(req)?;
    Ok((StatusCode::CREATED, Json(note)))
}

// PUT /api/notes/:id
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.store.update(id, req)?))
}

// GET /api/info
pub async fn info(State(state): State<Arc<AppState>>) -> Html<String> {
    let now = chrono::Local::now().format("%a %b %d %Y %H:%M:%S GMT%z");
    Html(format!(
        "<p>Notes service has info for {} notes</p><p>{}</p>",
        state.store.len(),
        now
    ))
}

pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
