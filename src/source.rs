use crate::command::LineSequence;
use crate::error::ShellError;
use std::fs;
use std::path::Path;

/// Where filename arguments get their lines from.
///
/// The interpreter holds a `LineSource` behind this trait so tests can swap
/// the real filesystem for an in-memory map of files.
pub trait LineSource {
    /// Reads the file at `path` as UTF-8 text and returns its lines with
    /// terminators stripped, in file order.
    fn read_lines(&self, path: &str) -> Result<LineSequence, ShellError>;
}

/// The real thing: whole-file blocking reads from the local filesystem.
pub struct FsLineSource;

impl LineSource for FsLineSource {
    fn read_lines(&self, path: &str) -> Result<LineSequence, ShellError> {
        let p = Path::new(path);

        // Directories get a more specific message than the generic one.
        if p.is_dir() {
            return Err(ShellError::IsDirectory(path.to_string()));
        }
        if !p.is_file() {
            return Err(ShellError::InvalidFile(path.to_string()));
        }

        // Read failures (permissions, invalid UTF-8) collapse into the same
        // error as nonexistence.
        let contents =
            fs::read_to_string(p).map_err(|_| ShellError::InvalidFile(path.to_string()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}
