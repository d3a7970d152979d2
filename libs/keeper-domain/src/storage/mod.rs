//! Persistence side of the hexagon
//!
//! The services only ever talk to storage through the ports defined here.
//! Whatever backs them (a relational store, the in-memory adapter) maps its
//! own failures onto [`RepositoryError`].

mod error;
mod ports;

pub use error::RepositoryError;
pub use ports::{NoteRepository, TranscriptionRepository, UserRepository};
