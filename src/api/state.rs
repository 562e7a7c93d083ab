//! Application state shared across all handlers

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::NotesService;
use crate::services::SeaOrmNotesService;

#[derive(Clone)]
pub struct AppState {
    /// Notes service behind the domain trait so tests can substitute a double
    pub notes: Arc<dyn NotesService>,
}

impl AppState {
    /// Production state backed by the SeaORM service
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            notes: Arc::new(SeaOrmNotesService::new(db)),
        }
    }

    /// Build state around any NotesService implementation
    pub fn from_service(notes: Arc<dyn NotesService>) -> Self {
        Self { notes }
    }
}
