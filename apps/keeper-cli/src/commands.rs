//! Shell command grammar
//!
//! Every input line is split into words and parsed with clap. Single or
//! double quotes keep a word's whitespace intact; inside double quotes `\n`
//! and `\t` stand for a newline and a tab. Ids and pagination values stay
//! raw strings here; converting them is the dispatcher's job so that bad
//! values come back as a JSON `NG` reply instead of a usage error.

use clap::{Args, Parser, Subcommand};

/// One line of shell input
#[derive(Parser, Debug)]
#[command(name = "keeper")]
#[command(no_binary_name = true)]
#[command(about = "Manage users, their notes and the notes' transcriptions")]
#[command(disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

impl Line {
    /// Parse a raw input line
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(split_words(line)?)
    }
}

/// Split a line into words, honoring quotes and backslash escapes
pub fn split_words(line: &str) -> Result<Vec<String>, clap::Error> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => match chars.next() {
                Some('n') => current.push('\n'),
                Some('t') => current.push('\t'),
                Some(escaped) => current.push(escaped),
                None => break,
            },
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                        in_word = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if let Some(q) = quote {
        return Err(clap::Error::raw(
            clap::error::ErrorKind::ValueValidation,
            format!("unterminated {q} quote\n"),
        ));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Top level commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage the notes of a user
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Manage the transcriptions of a note
    Transcription {
        #[command(subcommand)]
        action: TranscriptionAction,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Create a user
    Create {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// List users
    List(PageArgs),
    /// Show one user
    Get {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Rename a user
    Update {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Delete a user with their notes and transcriptions
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum NoteAction {
    /// Create a note for a user
    Create {
        #[arg(allow_hyphen_values = true)]
        user_id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// List the notes of a user
    List {
        #[arg(allow_hyphen_values = true)]
        user_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Rename a note
    Update {
        #[arg(allow_hyphen_values = true)]
        user_id: String,
        #[arg(allow_hyphen_values = true)]
        note_id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Delete a note with its transcriptions
    Delete {
        #[arg(allow_hyphen_values = true)]
        note_id: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TranscriptionAction {
    /// Attach a transcription to a note
    Create {
        #[arg(allow_hyphen_values = true)]
        note_id: String,
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        content: Vec<String>,
    },
    /// List the transcriptions of a note, newest first
    List {
        #[arg(allow_hyphen_values = true)]
        note_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Raw `--limit` / `--offset` flags
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct PageArgs {
    /// Page size, clamped to the configured maximum
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,
    /// Number of entries to skip
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<String>,
}

/// Join the words of a multi-word argument back together
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
