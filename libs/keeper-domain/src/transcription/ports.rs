//! Port trait for the Transcription Service

use std::future::Future;

use super::{Transcription, TranscriptionId};
use crate::error::ServiceError;
use crate::note::NoteId;

/// Port trait for transcription operations
pub trait TranscriptionServicePort: Send + Sync {
    /// Attach a transcription to an existing note
    ///
    /// # Errors
    ///
    /// - `ServiceError::NoteNotFound` if the note does not exist (checked first)
    /// - `ServiceError::InvalidArgument` if the content is blank or too long
    /// - `ServiceError::Unexpected` if the store fails
    fn create(
        &self,
        note_id: NoteId,
        content: &str,
    ) -> impl Future<Output = Result<TranscriptionId, ServiceError>> + Send;

    /// List one page of a note's transcriptions
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoteNotFound` if the note does not exist
    fn list_by_note_id(
        &self,
        note_id: NoteId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Transcription>, ServiceError>> + Send;
}
