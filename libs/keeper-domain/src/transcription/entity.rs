//! Transcription entity

use serde::{Deserialize, Serialize};

use super::{TranscriptionContent, TranscriptionId};
use crate::note::NoteId;

/// A Transcription attached to exactly one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    id: TranscriptionId,
    content: TranscriptionContent,
    note_id: NoteId,
}

impl Transcription {
    pub fn new(id: TranscriptionId, content: TranscriptionContent, note_id: NoteId) -> Self {
        Self {
            id,
            content,
            note_id,
        }
    }

    /// Get the transcription's identifier
    pub fn id(&self) -> TranscriptionId {
        self.id
    }

    /// Get the transcribed text
    pub fn content(&self) -> &TranscriptionContent {
        &self.content
    }

    /// Get the identifier of the owning note
    pub fn note_id(&self) -> NoteId {
        self.note_id
    }
}
