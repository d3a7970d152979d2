//! User entity

use serde::{Deserialize, Serialize};

use super::{UserId, UserName};

/// A User as stored: identity plus display name
///
/// Built only from already-valid value objects, so a `User` is always
/// internally consistent. It never changes after construction; renaming a
/// user means building a new `User` and asking the repository to replace
/// the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Get the user's identifier
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get the user's name
    pub fn name(&self) -> &UserName {
        &self.name
    }
}
