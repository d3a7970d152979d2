//! User service - Business logic orchestration
//!
//! Validates raw input into value objects, delegates to the user repository
//! and translates the repository's "row missing" signal into
//! `ServiceError::UserNotFound`.

use std::future::Future;

use tracing::{debug, instrument};

use super::{User, UserId, UserName, UserServicePort};
use crate::error::ServiceError;
use crate::storage::{RepositoryError, UserRepository};

/// Service for managing users
///
/// Stateless: every call is an independent validate-then-persist sequence.
/// Nothing is retried and concurrent writes to the same user are left to
/// the store to order.
pub struct UserService<R> {
    repository: R,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Create a new UserService over the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a user and return the identifier assigned by the store
    ///
    /// The name is trimmed before it reaches the repository.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<UserId, ServiceError> {
        let name = UserName::new(name)?;

        let user_id = self
            .repository
            .create(&name)
            .await
            .map_err(|err| ServiceError::unexpected("create user", err))?;

        debug!(user_id = %user_id, "User created");
        Ok(user_id)
    }

    /// List one page of users plus the total number of users
    ///
    /// A failure while counting is reported with the `"count users"`
    /// context, distinct from `"list users"`.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: u32, offset: u32) -> Result<(Vec<User>, u64), ServiceError> {
        let users = self
            .repository
            .list(limit, offset)
            .await
            .map_err(|err| ServiceError::unexpected("list users", err))?;

        let total = self
            .repository
            .count()
            .await
            .map_err(|err| ServiceError::unexpected("count users", err))?;

        Ok((users, total))
    }

    /// Fetch a single user
    #[instrument(skip(self))]
    pub async fn retrieve(&self, user_id: UserId) -> Result<User, ServiceError> {
        self.repository
            .retrieve(user_id)
            .await
            .map_err(translate(user_id, "retrieve user"))
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId) -> Result<(), ServiceError> {
        self.repository
            .delete(user_id)
            .await
            .map_err(translate(user_id, "delete user"))?;

        debug!(user_id = %user_id, "User deleted");
        Ok(())
    }

    /// Rename a user
    ///
    /// The name is validated before the repository is touched.
    #[instrument(skip(self))]
    pub async fn update(&self, user_id: UserId, name: &str) -> Result<(), ServiceError> {
        let name = UserName::new(name)?;
        let user = User::new(user_id, name);

        self.repository
            .update(&user)
            .await
            .map_err(translate(user_id, "update user"))
    }
}

fn translate(
    user_id: UserId,
    context: &'static str,
) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| {
        if err.is_not_found() {
            ServiceError::UserNotFound(user_id)
        } else {
            ServiceError::unexpected(context, err)
        }
    }
}

impl<R> UserServicePort for UserService<R>
where
    R: UserRepository,
{
    fn create(&self, name: &str) -> impl Future<Output = Result<UserId, ServiceError>> + Send {
        UserService::create(self, name)
    }

    fn list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<(Vec<User>, u64), ServiceError>> + Send {
        UserService::list(self, limit, offset)
    }

    fn retrieve(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<User, ServiceError>> + Send {
        UserService::retrieve(self, user_id)
    }

    fn delete(&self, user_id: UserId) -> impl Future<Output = Result<(), ServiceError>> + Send {
        UserService::delete(self, user_id)
    }

    fn update(
        &self,
        user_id: UserId,
        name: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send {
        UserService::update(self, user_id, name)
    }
}
