//! Note aggregate
//!
//! A note belongs to exactly one user and owns transcriptions.

mod entity;
mod ids;
mod name;
mod ports;
mod service;

pub use entity::Note;
pub use ids::NoteId;
pub use name::{NoteName, MAX_NOTE_NAME_LENGTH};
pub use ports::NoteServicePort;
pub use service::NoteService;
