//! # Transcript Keeper In-Memory Storage
//!
//! Implements the persistence ports of `keeper-domain` over process memory.
//! It behaves like the relational store the domain was designed against:
//! ids come from per-table sequences, missing rows are reported as
//! `RepositoryError::NotFound`, child rows require their parent and deletes
//! cascade.
//!
//! ```rust
//! use keeper_domain::{NoteService, TranscriptionService, UserService};
//! use keeper_memory::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let users = UserService::new(store.users());
//! let notes = NoteService::new(store.notes());
//! let transcriptions = TranscriptionService::new(store.transcriptions(), store.notes());
//! # let _ = (users, notes, transcriptions);
//! ```

pub mod infrastructure;

pub use infrastructure::{
    MemoryNoteRepository, MemoryStore, MemoryTranscriptionRepository, MemoryUserRepository,
};
