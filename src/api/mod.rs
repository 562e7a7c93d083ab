pub mod error;
pub mod health;
pub mod notes;
pub mod state;
pub mod users;
pub mod validation;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub use state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:email", get(users::get_user))
        .route("/users/:email/ownedNotes", get(users::get_owned_notes))
        .route(
            "/users/:email/allowedEditNotes",
            get(users::get_allowed_edit_notes),
        )
        // Notes
        .route(
            "/users/:email/notes",
            post(notes::create_note).put(notes::edit_note),
        )
        .route(
            "/users/:email/allowed/:allowed_user_email/:title",
            put(notes::grant_edit),
        )
        .route("/users/:email/notes/:title", delete(notes::delete_note))
        // Diagnostics
        .route("/validateBody", post(users::validate_body))
        .with_state(state)
}
