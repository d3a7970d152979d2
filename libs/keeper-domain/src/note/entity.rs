//! Note entity

use serde::{Deserialize, Serialize};

use super::{NoteId, NoteName};
use crate::user::UserId;

/// A Note owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    name: NoteName,
    user_id: UserId,
}

impl Note {
    pub fn new(id: NoteId, name: NoteName, user_id: UserId) -> Self {
        Self { id, name, user_id }
    }

    /// Get the note's identifier
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Get the note's name
    pub fn name(&self) -> &NoteName {
        &self.name
    }

    /// Get the identifier of the owning user
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
