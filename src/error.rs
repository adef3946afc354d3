use thiserror::Error;

/// Everything that can go wrong while parsing or executing a pipeline.
///
/// Any of these aborts the whole pipeline: no partial output from earlier
/// stages is ever emitted. The interactive loop prints the message and keeps
/// accepting input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// A stage named a command the interpreter does not know.
    /// Detected at parse time, so no stage of the pipeline runs at all.
    #[error("Invalid command {0}")]
    InvalidCommand(String),

    /// A handler had neither a filename argument nor a prior stage's output
    /// to work with, or its arguments did not parse.
    #[error("Invalid {0} usage")]
    Usage(String),

    /// The path does not exist, is not a regular file, or could not be read
    /// as UTF-8 text. Read failures are deliberately not distinguished from
    /// nonexistence at the message level.
    #[error("Invalid file {0}")]
    InvalidFile(String),

    /// The path exists but is a directory. Reported separately so the user
    /// gets a more specific message than the generic invalid-file one.
    #[error("{0} is a directory")]
    IsDirectory(String),
}
