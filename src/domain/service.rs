//! Notes service contract
//!
//! The trait defines every operation the HTTP layer delegates to.
//! The production implementation lives in the services layer; tests
//! may substitute any other implementor.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// User fields exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub email: String,
    pub name: String,
}

/// Note fields exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteSummary {
    pub title: String,
    pub content: String,
}

/// Body of POST /users and POST /validateBody
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    pub email: String,
    pub name: String,
}

/// Body of POST/PUT /users/{email}/notes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

#[async_trait]
pub trait NotesService: Send + Sync {
    /// List all registered users
    async fn list_users(&self) -> Result<Vec<UserSummary>, DomainError>;

    /// Fetch a single user by email
    async fn get_user(&self, email: &str) -> Result<UserSummary, DomainError>;

    /// Notes owned by the given user
    async fn owned_notes(&self, email: &str) -> Result<Vec<NoteSummary>, DomainError>;

    /// Notes the user may edit but does not own
    async fn allowed_edit_notes(&self, email: &str) -> Result<Vec<NoteSummary>, DomainError>;

    /// Create a note owned by `email`; title must be unique per owner
    async fn create_note(
        &self,
        email: &str,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError>;

    /// Replace the content of a note the user owns or may edit
    async fn edit_note(&self, email: &str, title: &str, content: &str)
        -> Result<(), DomainError>;

    /// Register a new user; email must be unique
    async fn create_user(&self, payload: UserPayload) -> Result<(), DomainError>;

    /// Grant `allowed_email` edit permission on the note (`owner_email`, `title`)
    async fn grant_edit(
        &self,
        owner_email: &str,
        allowed_email: &str,
        title: &str,
    ) -> Result<(), DomainError>;

    /// Delete a note; owner only
    async fn delete_note(&self, email: &str, title: &str) -> Result<(), DomainError>;
}
