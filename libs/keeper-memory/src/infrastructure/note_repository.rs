//! In-memory implementation of `NoteRepository`

use std::future::Future;

use keeper_domain::{Note, NoteId, NoteName, NoteRepository, RepositoryError, UserId};
use tracing::{debug, info, instrument, warn};

use super::store::{page, SharedTables};

/// Note table adapter
///
/// Inserting a note for an unknown user fails the way a foreign key would.
/// Updates match on both the note id and its owner, so one user cannot
/// rename another user's note.
#[derive(Debug, Clone)]
pub struct MemoryNoteRepository {
    tables: SharedTables,
}

impl MemoryNoteRepository {
    pub(crate) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

impl NoteRepository for MemoryNoteRepository {
    #[instrument(skip(self, name), fields(name = %name))]
    fn create(
        &self,
        user_id: UserId,
        name: &NoteName,
    ) -> impl Future<Output = Result<NoteId, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.clone();

        async move {
            let mut tables = tables.write().await;
            if !tables.users.contains_key(&user_id) {
                warn!(user_id = %user_id, "Rejected note for unknown user");
                return Err(RepositoryError::failure(format!(
                    "foreign key violation: user {user_id} does not exist"
                )));
            }

            let note_id = NoteId::new(tables.note_seq.next()?)
                .map_err(|err| RepositoryError::failure(err.to_string()))?;
            tables
                .notes
                .insert(note_id, Note::new(note_id, name, user_id));

            info!(note_id = %note_id, user_id = %user_id, "Stored note");
            Ok(note_id)
        }
    }

    #[instrument(skip(self))]
    fn list(
        &self,
        user_id: UserId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Note>, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            let owned = tables
                .notes
                .values()
                .filter(|note| note.user_id() == user_id)
                .cloned();
            let notes = page(owned, limit, offset);

            debug!(returned = notes.len(), "Listed notes");
            Ok(notes)
        }
    }

    #[instrument(skip(self, note), fields(note_id = %note.id(), user_id = %note.user_id()))]
    fn update(&self, note: &Note) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let tables = self.tables.clone();
        let note = note.clone();

        async move {
            let mut tables = tables.write().await;
            match tables.notes.get_mut(&note.id()) {
                Some(stored) if stored.user_id() == note.user_id() => {
                    *stored = note;
                    info!(note_id = %stored.id(), "Updated note");
                    Ok(())
                }
                _ => {
                    warn!(note_id = %note.id(), "Note not found for update");
                    Err(RepositoryError::NotFound)
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn delete(
        &self,
        note_id: NoteId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let mut tables = tables.write().await;
            if tables.notes.remove(&note_id).is_none() {
                warn!(note_id = %note_id, "Note not found for delete");
                return Err(RepositoryError::NotFound);
            }

            let transcriptions = tables.remove_transcriptions_of(note_id);
            info!(
                note_id = %note_id,
                cascaded_transcriptions = transcriptions,
                "Deleted note"
            );
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn count(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            let count = tables
                .notes
                .values()
                .filter(|note| note.user_id() == user_id)
                .count();
            Ok(count as u64)
        }
    }

    #[instrument(skip(self))]
    fn exists(
        &self,
        note_id: NoteId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move { Ok(tables.read().await.notes.contains_key(&note_id)) }
    }
}
