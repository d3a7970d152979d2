//! Shared tables behind every in-memory repository

use std::collections::BTreeMap;
use std::sync::Arc;

use keeper_domain::{
    Note, NoteId, RepositoryError, Transcription, TranscriptionId, User, UserId,
};
use tokio::sync::RwLock;
use tracing::info;

use super::{MemoryNoteRepository, MemoryTranscriptionRepository, MemoryUserRepository};

/// Monotonic id generator. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub(crate) struct Sequence {
    last: i64,
}

impl Sequence {
    pub(crate) fn next(&mut self) -> Result<i64, RepositoryError> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or_else(|| RepositoryError::failure("id sequence exhausted"))?;
        Ok(self.last)
    }
}

/// Rows of all three tables, keyed by id so iteration is in id order
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) notes: BTreeMap<NoteId, Note>,
    pub(crate) transcriptions: BTreeMap<TranscriptionId, Transcription>,
    pub(crate) user_seq: Sequence,
    pub(crate) note_seq: Sequence,
    pub(crate) transcription_seq: Sequence,
}

impl Tables {
    /// Remove a note's transcriptions
    pub(crate) fn remove_transcriptions_of(&mut self, note_id: NoteId) -> usize {
        let before = self.transcriptions.len();
        self.transcriptions.retain(|_, t| t.note_id() != note_id);
        before - self.transcriptions.len()
    }

    /// Remove a user's notes together with their transcriptions
    pub(crate) fn remove_notes_of(&mut self, user_id: UserId) -> usize {
        let owned: Vec<NoteId> = self
            .notes
            .values()
            .filter(|note| note.user_id() == user_id)
            .map(|note| note.id())
            .collect();

        for note_id in &owned {
            self.notes.remove(note_id);
            self.remove_transcriptions_of(*note_id);
        }

        owned.len()
    }
}

pub(crate) type SharedTables = Arc<RwLock<Tables>>;

/// Page through an ordered iterator the way `LIMIT .. OFFSET ..` does
pub(crate) fn page<T>(
    rows: impl Iterator<Item = T>,
    limit: u32,
    offset: u32,
) -> Vec<T> {
    rows.skip(offset as usize).take(limit as usize).collect()
}

/// In-memory store handing out repositories over shared tables
///
/// Cloning the store, or any repository it hands out, shares the same data.
/// Reads take a shared lock and writes an exclusive one, so each repository
/// call is atomic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: SharedTables,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        info!("Initializing in-memory store");
        Self::default()
    }

    /// Repository implementing `UserRepository`
    pub fn users(&self) -> MemoryUserRepository {
        MemoryUserRepository::new(self.tables.clone())
    }

    /// Repository implementing `NoteRepository`
    pub fn notes(&self) -> MemoryNoteRepository {
        MemoryNoteRepository::new(self.tables.clone())
    }

    /// Repository implementing `TranscriptionRepository`
    pub fn transcriptions(&self) -> MemoryTranscriptionRepository {
        MemoryTranscriptionRepository::new(self.tables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_domain::{NoteName, TranscriptionContent, UserName};

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = Sequence::default();
        assert_eq!(seq.next().unwrap(), 1);
        assert_eq!(seq.next().unwrap(), 2);
    }

    #[test]
    fn test_sequence_exhaustion_is_a_failure() {
        let mut seq = Sequence { last: i64::MAX };
        assert!(matches!(seq.next(), Err(RepositoryError::Failure(_))));
    }

    #[test]
    fn test_page_applies_offset_then_limit() {
        let rows = page(1..=10, 3, 4);
        assert_eq!(rows, vec![5, 6, 7]);
        assert!(page(1..=10, 3, 20).is_empty());
        assert!(page(1..=10, 0, 0).is_empty());
    }

    #[test]
    fn test_remove_notes_cascades() {
        let mut tables = Tables::default();
        let alice = UserId::new(1).unwrap();
        let bob = UserId::new(2).unwrap();
        let first = NoteId::new(1).unwrap();
        let second = NoteId::new(2).unwrap();

        tables
            .users
            .insert(alice, User::new(alice, UserName::new("Alice").unwrap()));
        tables
            .notes
            .insert(first, Note::new(first, NoteName::new("a").unwrap(), alice));
        tables
            .notes
            .insert(second, Note::new(second, NoteName::new("b").unwrap(), bob));
        let tid = TranscriptionId::new(1).unwrap();
        tables.transcriptions.insert(
            tid,
            Transcription::new(tid, TranscriptionContent::new("hi").unwrap(), first),
        );

        assert_eq!(tables.remove_notes_of(alice), 1);
        assert!(tables.transcriptions.is_empty());
        assert!(tables.notes.contains_key(&second));
    }
}
