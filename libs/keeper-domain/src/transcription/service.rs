//! Transcription service - Business logic orchestration
//!
//! Referential integrity between notes and transcriptions is emulated here:
//! every operation first asks the note repository whether the note exists
//! and fails with `ServiceError::NoteNotFound` before doing anything else.

use std::future::Future;

use tracing::{debug, instrument, warn};

use super::{Transcription, TranscriptionContent, TranscriptionId, TranscriptionServicePort};
use crate::error::ServiceError;
use crate::note::NoteId;
use crate::storage::{NoteRepository, TranscriptionRepository};

/// Service for managing the transcriptions of a note
pub struct TranscriptionService<T, N> {
    transcriptions: T,
    notes: N,
}

impl<T, N> TranscriptionService<T, N>
where
    T: TranscriptionRepository,
    N: NoteRepository,
{
    /// Create a new TranscriptionService
    ///
    /// # Arguments
    ///
    /// * `transcriptions` - Repository the transcriptions are written to
    /// * `notes` - Repository consulted for note existence
    pub fn new(transcriptions: T, notes: N) -> Self {
        Self {
            transcriptions,
            notes,
        }
    }

    /// Attach a transcription to a note
    ///
    /// Order matters: existence check, then content validation, then the
    /// insert. A missing note therefore wins over invalid content.
    #[instrument(skip(self, content), fields(content_chars = content.chars().count()))]
    pub async fn create(
        &self,
        note_id: NoteId,
        content: &str,
    ) -> Result<TranscriptionId, ServiceError> {
        self.ensure_note_exists(note_id).await?;

        let content = TranscriptionContent::new(content)?;

        let transcription_id = self
            .transcriptions
            .create(note_id, &content)
            .await
            .map_err(|err| ServiceError::unexpected("create transcription", err))?;

        debug!(
            transcription_id = %transcription_id,
            note_id = %note_id,
            "Transcription created"
        );
        Ok(transcription_id)
    }

    /// List one page of a note's transcriptions, newest first
    #[instrument(skip(self))]
    pub async fn list_by_note_id(
        &self,
        note_id: NoteId,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Transcription>, ServiceError> {
        self.ensure_note_exists(note_id).await?;

        self.transcriptions
            .list_by_note_id(note_id, limit, offset)
            .await
            .map_err(|err| ServiceError::unexpected("list transcriptions", err))
    }

    async fn ensure_note_exists(&self, note_id: NoteId) -> Result<(), ServiceError> {
        let exists = self
            .notes
            .exists(note_id)
            .await
            .map_err(|err| ServiceError::unexpected("check note existence", err))?;

        if !exists {
            warn!(note_id = %note_id, "Note does not exist");
            return Err(ServiceError::NoteNotFound(note_id));
        }

        Ok(())
    }
}

impl<T, N> TranscriptionServicePort for TranscriptionService<T, N>
where
    T: TranscriptionRepository,
    N: NoteRepository,
{
    fn create(
        &self,
        note_id: NoteId,
        content: &str,
    ) -> impl Future<Output = Result<TranscriptionId, ServiceError>> + Send {
        TranscriptionService::create(self, note_id, content)
    }

    fn list_by_note_id(
        &self,
        note_id: NoteId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Transcription>, ServiceError>> + Send {
        TranscriptionService::list_by_note_id(self, note_id, limit, offset)
    }
}
