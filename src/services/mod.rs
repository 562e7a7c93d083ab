//! Services Layer
//!
//! Business logic behind the NotesService trait, kept out of the HTTP handlers.

pub mod notes_service;

pub use notes_service::SeaOrmNotesService;
