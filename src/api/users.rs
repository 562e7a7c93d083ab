use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::validation;
use crate::domain::{NoteSummary, UserPayload, UserSummary};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state.notes.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Email address of the user")),
    responses(
        (status = 200, description = "User found", body = UserSummary),
        (status = 400, description = "Malformed email"),
        (status = 404, description = "No user with that email")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserSummary>, ApiError> {
    validation::require_email(&email)?;
    let user = state.notes.get_user(&email).await?;
    Ok(Json(user))
}

pub async fn get_owned_notes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    validation::require_email(&email)?;
    let notes = state.notes.owned_notes(&email).await?;
    Ok(Json(notes))
}

pub async fn get_allowed_edit_notes(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    validation::require_email(&email)?;
    let notes = state.notes.allowed_edit_notes(&email).await?;
    Ok(Json(notes))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<StatusCode, ApiError> {
    validation::require_email(&payload.email)?;
    state.notes.create_user(payload).await?;
    Ok(StatusCode::OK)
}

/// Diagnostic endpoint: checks the payload constraints and nothing else
pub async fn validate_body(
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, &'static str), ApiError> {
    validation::validate_user_payload(&payload)?;
    Ok((StatusCode::OK, "valid"))
}
