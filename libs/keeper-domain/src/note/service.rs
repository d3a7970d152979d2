//! Note service - Business logic orchestration

use std::future::Future;

use tracing::{debug, instrument};

use super::{Note, NoteId, NoteName, NoteServicePort};
use crate::error::ServiceError;
use crate::storage::{NoteRepository, RepositoryError};
use crate::user::UserId;

/// Service for managing a user's notes
pub struct NoteService<R> {
    repository: R,
}

impl<R> NoteService<R>
where
    R: NoteRepository,
{
    /// Create a new NoteService over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a note owned by `user_id`
    ///
    /// Only the name is validated. Whether the user exists is left to the
    /// store.
    #[instrument(skip(self))]
    pub async fn create(&self, user_id: UserId, name: &str) -> Result<NoteId, ServiceError> {
        let name = NoteName::new(name)?;

        let note_id = self
            .repository
            .create(user_id, &name)
            .await
            .map_err(|err| ServiceError::unexpected("create note", err))?;

        debug!(note_id = %note_id, user_id = %user_id, "Note created");
        Ok(note_id)
    }

    /// List one page of a user's notes plus the user's total note count
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: UserId,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<Note>, u64), ServiceError> {
        let notes = self
            .repository
            .list(user_id, limit, offset)
            .await
            .map_err(|err| ServiceError::unexpected("list notes", err))?;

        let total = self
            .repository
            .count(user_id)
            .await
            .map_err(|err| ServiceError::unexpected("count notes", err))?;

        Ok((notes, total))
    }

    /// Rename a note
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        note_id: NoteId,
        name: &str,
        user_id: UserId,
    ) -> Result<(), ServiceError> {
        let name = NoteName::new(name)?;
        let note = Note::new(note_id, name, user_id);

        self.repository
            .update(&note)
            .await
            .map_err(translate(note_id, "update note"))
    }

    /// Delete a note
    #[instrument(skip(self))]
    pub async fn delete(&self, note_id: NoteId) -> Result<(), ServiceError> {
        self.repository
            .delete(note_id)
            .await
            .map_err(translate(note_id, "delete note"))?;

        debug!(note_id = %note_id, "Note deleted");
        Ok(())
    }
}

fn translate(
    note_id: NoteId,
    context: &'static str,
) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| {
        if err.is_not_found() {
            ServiceError::NoteNotFound(note_id)
        } else {
            ServiceError::unexpected(context, err)
        }
    }
}

impl<R> NoteServicePort for NoteService<R>
where
    R: NoteRepository,
{
    fn create(
        &self,
        user_id: UserId,
        name: &str,
    ) -> impl Future<Output = Result<NoteId, ServiceError>> + Send {
        NoteService::create(self, user_id, name)
    }

    fn list(
        &self,
        user_id: UserId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<(Vec<Note>, u64), ServiceError>> + Send {
        NoteService::list(self, user_id, limit, offset)
    }

    fn update(
        &self,
        note_id: NoteId,
        name: &str,
        user_id: UserId,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        NoteService::update(self, note_id, name, user_id)
    }

    fn delete(&self, note_id: NoteId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        NoteService::delete(self, note_id)
    }
}
