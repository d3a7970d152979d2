//! Ports (trait definitions) for persistence
//!
//! One port per aggregate. The domain defines what it needs and the storage
//! adapter provides it. Identifiers are always assigned by the adapter on
//! creation, never by the domain.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` so the services stay monomorphized over their repositories.
//!
//! ## Pagination
//!
//! `limit` and `offset` arrive already sanitized by the transport. The ports
//! apply them as given.

use std::future::Future;

use super::RepositoryError;
use crate::note::{Note, NoteId, NoteName};
use crate::transcription::{Transcription, TranscriptionContent, TranscriptionId};
use crate::user::{User, UserId, UserName};

/// Port for user persistence
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the identifier the store assigned
    fn create(
        &self,
        name: &UserName,
    ) -> impl Future<Output = Result<UserId, RepositoryError>> + Send;

    /// List users ordered by id
    fn list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<User>, RepositoryError>> + Send;

    /// Fetch one user
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no user has this id
    fn retrieve(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<User, RepositoryError>> + Send;

    /// Replace the stored user that has `user.id()`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was updated
    fn update(&self, user: &User) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a user
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was deleted
    fn delete(&self, user_id: UserId)
        -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Total number of users
    fn count(&self) -> impl Future<Output = Result<u64, RepositoryError>> + Send;
}

/// Port for note persistence, scoped by owning user
pub trait NoteRepository: Send + Sync {
    /// Insert a note owned by `user_id` and return its new identifier
    fn create(
        &self,
        user_id: UserId,
        name: &NoteName,
    ) -> impl Future<Output = Result<NoteId, RepositoryError>> + Send;

    /// List the notes of one user ordered by id
    fn list(
        &self,
        user_id: UserId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Note>, RepositoryError>> + Send;

    /// Replace the stored note that has `note.id()`
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was updated
    fn update(&self, note: &Note) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete a note
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row was deleted
    fn delete(&self, note_id: NoteId)
        -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Number of notes owned by `user_id`
    fn count(&self, user_id: UserId)
        -> impl Future<Output = Result<u64, RepositoryError>> + Send;

    /// Whether a note with this id exists
    ///
    /// Used by the transcription service in place of a foreign-key constraint.
    fn exists(
        &self,
        note_id: NoteId,
    ) -> impl Future<Output = Result<bool, RepositoryError>> + Send;
}

/// Port for transcription persistence, scoped by owning note
pub trait TranscriptionRepository: Send + Sync {
    /// Insert a transcription attached to `note_id` and return its new identifier
    fn create(
        &self,
        note_id: NoteId,
        content: &TranscriptionContent,
    ) -> impl Future<Output = Result<TranscriptionId, RepositoryError>> + Send;

    /// List the transcriptions of one note, newest first
    fn list_by_note_id(
        &self,
        note_id: NoteId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Transcription>, RepositoryError>> + Send;
}
