//! Storage adapters

mod note_repository;
mod store;
mod transcription_repository;
mod user_repository;

pub use note_repository::MemoryNoteRepository;
pub use store::MemoryStore;
pub use transcription_repository::MemoryTranscriptionRepository;
pub use user_repository::MemoryUserRepository;
