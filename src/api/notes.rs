use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::validation;
use crate::domain::NotePayload;

#[utoipa::path(
    post,
    path = "/users/{email}/notes",
    params(("email" = String, Path, description = "Email address of the note's owner")),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note created"),
        (status = 400, description = "Malformed email"),
        (status = 404, description = "No user with that email"),
        (status = 409, description = "Owner already has a note with that title")
    )
)]
pub async fn create_note(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<StatusCode, ApiError> {
    validation::require_email(&email)?;
    state
        .notes
        .create_note(&email, &payload.title, &payload.content)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn edit_note(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<StatusCode, ApiError> {
    validation::require_email(&email)?;
    state
        .notes
        .edit_note(&email, &payload.title, &payload.content)
        .await?;
    Ok(StatusCode::OK)
}

// Only the owner's email is format-checked; the grantee is resolved by the service
pub async fn grant_edit(
    State(state): State<AppState>,
    Path((owner_email, allowed_user_email, title)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    validation::require_email(&owner_email)?;
    state
        .notes
        .grant_edit(&owner_email, &allowed_user_email, &title)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path((email, title)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    validation::require_email(&email)?;
    state.notes.delete_note(&email, &title).await?;
    Ok(StatusCode::OK)
}
