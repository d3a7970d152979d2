//! Port trait for the User Service
//!
//! Transport adapters depend on this trait rather than on the concrete
//! `UserService<R>`, so they can be exercised against a fake service.

use std::future::Future;

use super::{User, UserId};
use crate::error::ServiceError;

/// Port trait for user operations
pub trait UserServicePort: Send + Sync {
    /// Create a user from a raw name and return its identifier
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidArgument` if the name is blank
    /// - `ServiceError::Unexpected` if the store fails
    fn create(&self, name: &str) -> impl Future<Output = Result<UserId, ServiceError>> + Send;

    /// List one page of users together with the total user count
    fn list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<(Vec<User>, u64), ServiceError>> + Send;

    /// Fetch a single user
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UserNotFound` if the user does not exist
    fn retrieve(&self, user_id: UserId)
        -> impl Future<Output = Result<User, ServiceError>> + Send;

    /// Delete a user
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UserNotFound` if the user does not exist
    fn delete(&self, user_id: UserId) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Rename a user
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidArgument` if the name is blank
    /// - `ServiceError::UserNotFound` if the user does not exist
    fn update(
        &self,
        user_id: UserId,
        name: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
