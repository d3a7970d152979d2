//! # Transcript Keeper Domain Layer
//!
//! This crate contains the business rules of the Transcript Keeper backend:
//! users own notes, notes own transcriptions. It follows hexagonal
//! architecture principles:
//!
//! - **Value objects**: always-valid wrappers around primitives (`UserId`, `NoteName`, ...)
//! - **Entities**: immutable aggregates built from value objects (`User`, `Note`, `Transcription`)
//! - **Ports**: persistence traits implemented by storage adapters, and service
//!   traits called by transports
//! - **Services**: validation, existence checks and error translation
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (SQL, HTTP, ...).
//! Services are built by constructor injection from their repositories; there
//! is no global state. Every service call is independent and nothing is
//! retried. Dropping a returned future cancels the storage call in flight.
//!
//! ## Example
//!
//! ```rust
//! use keeper_domain::{ErrorKind, UserRepository, UserService};
//!
//! async fn example<R: UserRepository>(service: UserService<R>) -> keeper_domain::Result<()> {
//!     let user_id = service.create("  Alice  ").await?;
//!     let user = service.retrieve(user_id).await?;
//!     assert_eq!(user.name().as_str(), "Alice");
//!
//!     let err = service.update(user_id, "   ").await.unwrap_err();
//!     assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//!     Ok(())
//! }
//! ```

mod id;
mod text;

pub mod error;
pub mod note;
pub mod storage;
pub mod transcription;
pub mod user;

// Re-export commonly used types
pub use error::{ErrorKind, Result, ServiceError, ValidationError};
pub use note::{Note, NoteId, NoteName, NoteService, NoteServicePort, MAX_NOTE_NAME_LENGTH};
pub use storage::{NoteRepository, RepositoryError, TranscriptionRepository, UserRepository};
pub use transcription::{
    Transcription, TranscriptionContent, TranscriptionId, TranscriptionService,
    TranscriptionServicePort, MAX_TRANSCRIPTION_CONTENT_LENGTH,
};
pub use user::{User, UserId, UserName, UserService, UserServicePort};
