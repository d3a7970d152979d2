//! Command dispatch and reply rendering
//!
//! The shell only talks to the service ports. Replies are JSON objects with
//! a `result` of `OK` or `NG`; failures also carry the error `kind` and a
//! human readable `error`.

use clap::error::ErrorKind as ClapErrorKind;
use keeper_domain::{
    ErrorKind, NoteId, NoteServicePort, ServiceError, TranscriptionId, TranscriptionServicePort,
    UserId, UserServicePort, ValidationError,
};
use serde_json::{json, Value};
use tracing::{debug, error, instrument, warn};

use crate::commands::{join_words, Command, Line, NoteAction, TranscriptionAction, UserAction};
use crate::pagination::Pagination;

/// What the read loop should do after a line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print this JSON document
    Json(Value),
    /// Print this help text
    Help(String),
    /// Stop reading input
    Quit,
}

/// Dispatches parsed commands to the services
pub struct Shell<U, N, T> {
    users: U,
    notes: N,
    transcriptions: T,
    pagination: Pagination,
}

impl<U, N, T> Shell<U, N, T>
where
    U: UserServicePort,
    N: NoteServicePort,
    T: TranscriptionServicePort,
{
    pub fn new(users: U, notes: N, transcriptions: T, pagination: Pagination) -> Self {
        Self {
            users,
            notes,
            transcriptions,
            pagination,
        }
    }

    /// Parse and run one input line
    ///
    /// Usage errors become an `NG` reply with kind `invalid_argument`, so
    /// only `help` ever produces text that is not JSON.
    pub async fn handle_line(&self, line: &str) -> Reply {
        match Line::parse_line(line) {
            Ok(parsed) => self.execute(parsed.command).await,
            Err(err) => match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                    let mut text = err.render().to_string();
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                    Reply::Help(text)
                }
                _ => {
                    warn!(input = %line, "Could not parse command");
                    Reply::Json(json!({
                        "result": "NG",
                        "kind": ErrorKind::InvalidArgument.as_str(),
                        "error": err.render().to_string().trim_end(),
                    }))
                }
            },
        }
    }

    /// Run one command
    #[instrument(skip(self))]
    pub async fn execute(&self, command: Command) -> Reply {
        let result = match command {
            Command::Quit => return Reply::Quit,
            Command::User { action } => self.user(action).await,
            Command::Note { action } => self.note(action).await,
            Command::Transcription { action } => self.transcription(action).await,
        };

        Reply::Json(render(result))
    }

    async fn user(&self, action: UserAction) -> Result<Value, ServiceError> {
        match action {
            UserAction::Create { name } => {
                let user_id = self.users.create(&join_words(&name)).await?;
                Ok(json!({ "result": "OK", "user_id": user_id }))
            }
            UserAction::List(page) => {
                let limit = self.pagination.limit(page.limit.as_deref());
                let offset = self.pagination.offset(page.offset.as_deref());
                let (users, total) = self.users.list(limit, offset).await?;
                Ok(json!({
                    "result": "OK",
                    "users": users,
                    "limit": limit,
                    "offset": offset,
                    "total": total,
                }))
            }
            UserAction::Get { id } => {
                let user = self.users.retrieve(parse_id(&id, "user id")?).await?;
                Ok(json!({ "result": "OK", "user": user }))
            }
            UserAction::Update { id, name } => {
                let user_id = parse_id(&id, "user id")?;
                self.users.update(user_id, &join_words(&name)).await?;
                Ok(json!({ "result": "OK" }))
            }
            UserAction::Delete { id } => {
                self.users.delete(parse_id(&id, "user id")?).await?;
                Ok(json!({ "result": "OK" }))
            }
        }
    }

    async fn note(&self, action: NoteAction) -> Result<Value, ServiceError> {
        match action {
            NoteAction::Create { user_id, name } => {
                let user_id: UserId = parse_id(&user_id, "user id")?;
                let note_id = self.notes.create(user_id, &join_words(&name)).await?;
                Ok(json!({ "result": "OK", "note_id": note_id }))
            }
            NoteAction::List { user_id, page } => {
                let user_id: UserId = parse_id(&user_id, "user id")?;
                let limit = self.pagination.limit(page.limit.as_deref());
                let offset = self.pagination.offset(page.offset.as_deref());
                let (notes, total) = self.notes.list(user_id, limit, offset).await?;
                Ok(json!({
                    "result": "OK",
                    "notes": notes,
                    "limit": limit,
                    "offset": offset,
                    "total": total,
                }))
            }
            NoteAction::Update {
                user_id,
                note_id,
                name,
            } => {
                let user_id: UserId = parse_id(&user_id, "user id")?;
                let note_id: NoteId = parse_id(&note_id, "note id")?;
                self.notes
                    .update(note_id, &join_words(&name), user_id)
                    .await?;
                Ok(json!({ "result": "OK" }))
            }
            NoteAction::Delete { note_id } => {
                self.notes.delete(parse_id(&note_id, "note id")?).await?;
                Ok(json!({ "result": "OK" }))
            }
        }
    }

    async fn transcription(&self, action: TranscriptionAction) -> Result<Value, ServiceError> {
        match action {
            TranscriptionAction::Create { note_id, content } => {
                let note_id: NoteId = parse_id(&note_id, "note id")?;
                let transcription_id: TranscriptionId = self
                    .transcriptions
                    .create(note_id, &join_words(&content))
                    .await?;
                Ok(json!({ "result": "OK", "transcription_id": transcription_id }))
            }
            TranscriptionAction::List { note_id, page } => {
                let note_id: NoteId = parse_id(&note_id, "note id")?;
                let limit = self.pagination.limit(page.limit.as_deref());
                let offset = self.pagination.offset(page.offset.as_deref());
                let transcriptions = self
                    .transcriptions
                    .list_by_note_id(note_id, limit, offset)
                    .await?;
                Ok(json!({
                    "result": "OK",
                    "transcriptions": transcriptions,
                    "limit": limit,
                    "offset": offset,
                }))
            }
        }
    }
}

/// Convert a raw command-line id into its value object
fn parse_id<I>(raw: &str, label: &str) -> Result<I, ValidationError>
where
    I: TryFrom<i64, Error = ValidationError>,
{
    let value = raw.trim().parse::<i64>().map_err(|_| {
        ValidationError::invalid_argument(format!("{label} is not an integer: {raw}"))
    })?;

    I::try_from(value)
}

fn render(result: Result<Value, ServiceError>) -> Value {
    match result {
        Ok(value) => {
            debug!("Command succeeded");
            value
        }
        Err(err) => {
            let kind = err.kind();
            match kind {
                ErrorKind::Unexpected => error!(error = ?err, "Command failed"),
                ErrorKind::InvalidArgument | ErrorKind::NotFound => {
                    warn!(kind = kind.as_str(), error = %err, "Command rejected")
                }
            }

            json!({
                "result": "NG",
                "kind": kind.as_str(),
                "error": err.to_string(),
            })
        }
    }
}
