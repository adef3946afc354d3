use crate::command::{LineSequence, PipeCommand, resolve_input};
use crate::error::ShellError;
use crate::source::LineSource;
use argh::FromArgs;

#[derive(FromArgs)]
/// print a file's lines
pub(crate) struct Cat {
    #[argh(positional)]
    /// file to read
    pub file: String,
}

impl PipeCommand for Cat {
    fn name() -> &'static str {
        "cat"
    }

    /// Cat only reads files in this interpreter; any prior stage's output is
    /// ignored rather than passed through.
    fn run(
        self,
        _input: Option<LineSequence>,
        source: &dyn LineSource,
    ) -> Result<LineSequence, ShellError> {
        source.read_lines(&self.file)
    }
}

#[derive(FromArgs)]
/// count lines, words and bytes
pub(crate) struct Wc {
    #[argh(switch, short = 'l')]
    /// report only the line count
    pub lines_only: bool,

    #[argh(positional)]
    /// file to count; reads the previous stage's output when omitted
    pub file: Option<String>,
}

impl PipeCommand for Wc {
    fn name() -> &'static str {
        "wc"
    }

    fn run(
        self,
        input: Option<LineSequence>,
        source: &dyn LineSource,
    ) -> Result<LineSequence, ShellError> {
        let lines = resolve_input(Self::name(), self.file.as_deref(), input, source)?;

        if self.lines_only {
            return Ok(vec![lines.len().to_string()]);
        }

        let words: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
        // Each line is charged one newline byte, even the last. That matches
        // the tool being emulated, not the file's true size on disk.
        let bytes: usize = lines.iter().map(|l| l.len() + 1).sum();

        Ok(vec![format!("{} {} {}", lines.len(), words, bytes)])
    }
}

#[derive(FromArgs, Debug)]
/// sort lines in ascending order
pub(crate) struct Sort {
    #[argh(positional)]
    /// file to sort; reads the previous stage's output when omitted
    pub file: Option<String>,
}

impl PipeCommand for Sort {
    fn name() -> &'static str {
        "sort"
    }

    fn run(
        self,
        input: Option<LineSequence>,
        source: &dyn LineSource,
    ) -> Result<LineSequence, ShellError> {
        let mut lines = resolve_input(Self::name(), self.file.as_deref(), input, source)?;
        lines.sort();
        Ok(lines)
    }
}

#[derive(FromArgs)]
/// collapse consecutive duplicate lines
pub(crate) struct Uniq {
    #[argh(positional)]
    /// file to filter; reads the previous stage's output when omitted
    pub file: Option<String>,
}

impl PipeCommand for Uniq {
    fn name() -> &'static str {
        "uniq"
    }

    /// Only adjacent equal lines collapse; non-adjacent duplicates survive,
    /// like the standard `uniq`.
    fn run(
        self,
        input: Option<LineSequence>,
        source: &dyn LineSource,
    ) -> Result<LineSequence, ShellError> {
        let mut lines = resolve_input(Self::name(), self.file.as_deref(), input, source)?;
        lines.dedup();
        Ok(lines)
    }
}
