//! Note CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use noteloft_core::error::AppError;

use crate::dto::request::NoteRequest;
use crate::dto::response::{ApiResponse, NoteResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, AppError> {
    let notes = state.note_service.list_notes(&auth).await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NoteResponse>>), AppError> {
    let note = state
        .note_service
        .create_note(&auth, &req.title, &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(NoteResponse::from(note))),
    ))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NoteResponse>>, AppError> {
    let note = state.note_service.get_note(&auth, id).await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// PUT /notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, AppError> {
    let note = state
        .note_service
        .update_note(&auth, id, &req.title, &req.content)
        .await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.note_service.delete_note(&auth, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
