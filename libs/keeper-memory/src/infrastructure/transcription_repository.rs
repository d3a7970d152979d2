//! In-memory implementation of `TranscriptionRepository`

use std::future::Future;

use keeper_domain::{
    NoteId, RepositoryError, Transcription, TranscriptionContent, TranscriptionId,
    TranscriptionRepository,
};
use tracing::{debug, info, instrument, warn};

use super::store::{page, SharedTables};

/// Transcription table adapter
///
/// Transcriptions are listed newest first.
#[derive(Debug, Clone)]
pub struct MemoryTranscriptionRepository {
    tables: SharedTables,
}

impl MemoryTranscriptionRepository {
    pub(crate) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

impl TranscriptionRepository for MemoryTranscriptionRepository {
    #[instrument(skip(self, content), fields(content_chars = content.as_str().chars().count()))]
    fn create(
        &self,
        note_id: NoteId,
        content: &TranscriptionContent,
    ) -> impl Future<Output = Result<TranscriptionId, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let content = content.clone();

        async move {
            let mut tables = tables.write().await;
            if !tables.notes.contains_key(&note_id) {
                warn!(note_id = %note_id, "Rejected transcription for unknown note");
                return Err(RepositoryError::failure(format!(
                    "foreign key violation: note {note_id} does not exist"
                )));
            }

            let transcription_id = TranscriptionId::new(tables.transcription_seq.next()?)
                .map_err(|err| RepositoryError::failure(err.to_string()))?;
            tables.transcriptions.insert(
                transcription_id,
                Transcription::new(transcription_id, content, note_id),
            );

            info!(
                transcription_id = %transcription_id,
                note_id = %note_id,
                "Stored transcription"
            );
            Ok(transcription_id)
        }
    }

    #[instrument(skip(self))]
    fn list_by_note_id(
        &self,
        note_id: NoteId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Transcription>, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            let newest_first = tables
                .transcriptions
                .values()
                .rev()
                .filter(|t| t.note_id() == note_id)
                .cloned();
            let transcriptions = page(newest_first, limit, offset);

            debug!(returned = transcriptions.len(), "Listed transcriptions");
            Ok(transcriptions)
        }
    }
}
