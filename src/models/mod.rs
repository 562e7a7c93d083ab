pub mod note;
pub mod note_editor;
pub mod user;
