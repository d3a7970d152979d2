//! Port trait for the Note Service

use std::future::Future;

use super::{Note, NoteId};
use crate::error::ServiceError;
use crate::user::UserId;

/// Port trait for note operations
pub trait NoteServicePort: Send + Sync {
    /// Create a note for `user_id` and return its identifier
    ///
    /// The owning user is not checked for existence here; the store is
    /// expected to enforce ownership.
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidArgument` if the name is blank or too long
    /// - `ServiceError::Unexpected` if the store fails
    fn create(
        &self,
        user_id: UserId,
        name: &str,
    ) -> impl Future<Output = Result<NoteId, ServiceError>> + Send;

    /// List one page of a user's notes together with the user's note count
    fn list(
        &self,
        user_id: UserId,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<(Vec<Note>, u64), ServiceError>> + Send;

    /// Rename a note
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidArgument` if the name is blank or too long
    /// - `ServiceError::NoteNotFound` if the note does not exist
    fn update(
        &self,
        note_id: NoteId,
        name: &str,
        user_id: UserId,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Delete a note
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoteNotFound` if the note does not exist
    fn delete(&self, note_id: NoteId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
