//! Transcription aggregate
//!
//! A transcription belongs to exactly one note. The service checks that the
//! note exists before touching transcriptions, in place of a foreign key.

mod content;
mod entity;
mod ids;
mod ports;
mod service;

pub use content::{TranscriptionContent, MAX_TRANSCRIPTION_CONTENT_LENGTH};
pub use entity::Transcription;
pub use ids::TranscriptionId;
pub use ports::TranscriptionServicePort;
pub use service::TranscriptionService;
