//! In-memory implementation of `UserRepository`

use std::future::Future;

use keeper_domain::{RepositoryError, User, UserId, UserName, UserRepository};
use tracing::{debug, info, instrument, warn};

use super::store::{page, SharedTables};

/// User table adapter
///
/// Deleting a user also deletes the user's notes and their transcriptions,
/// as an `ON DELETE CASCADE` foreign key would.
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    tables: SharedTables,
}

impl MemoryUserRepository {
    pub(crate) fn new(tables: SharedTables) -> Self {
        Self { tables }
    }
}

impl UserRepository for MemoryUserRepository {
    #[instrument(skip(self, name), fields(name = %name))]
    fn create(
        &self,
        name: &UserName,
    ) -> impl Future<Output = Result<UserId, RepositoryError>> + Send {
        let tables = self.tables.clone();
        let name = name.clone();

        async move {
            let mut tables = tables.write().await;
            let user_id = UserId::new(tables.user_seq.next()?)
                .map_err(|err| RepositoryError::failure(err.to_string()))?;

            tables.users.insert(user_id, User::new(user_id, name));

            info!(user_id = %user_id, "Stored user");
            Ok(user_id)
        }
    }

    #[instrument(skip(self))]
    fn list(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<User>, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            let users = page(tables.users.values().cloned(), limit, offset);

            debug!(returned = users.len(), "Listed users");
            Ok(users)
        }
    }

    #[instrument(skip(self))]
    fn retrieve(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<User, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let tables = tables.read().await;
            match tables.users.get(&user_id) {
                Some(user) => Ok(user.clone()),
                None => {
                    warn!(user_id = %user_id, "User not found");
                    Err(RepositoryError::NotFound)
                }
            }
        }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    fn update(&self, user: &User) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let tables = self.tables.clone();
        let user = user.clone();

        async move {
            let mut tables = tables.write().await;
            match tables.users.get_mut(&user.id()) {
                Some(stored) => {
                    *stored = user;
                    info!(user_id = %stored.id(), "Updated user");
                    Ok(())
                }
                None => {
                    warn!(user_id = %user.id(), "User not found for update");
                    Err(RepositoryError::NotFound)
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn delete(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move {
            let mut tables = tables.write().await;
            if tables.users.remove(&user_id).is_none() {
                warn!(user_id = %user_id, "User not found for delete");
                return Err(RepositoryError::NotFound);
            }

            let notes = tables.remove_notes_of(user_id);
            info!(user_id = %user_id, cascaded_notes = notes, "Deleted user");
            Ok(())
        }
    }

    #[instrument(skip(self))]
    fn count(&self) -> impl Future<Output = Result<u64, RepositoryError>> + Send {
        let tables = self.tables.clone();

        async move { Ok(tables.read().await.users.len() as u64) }
    }
}
