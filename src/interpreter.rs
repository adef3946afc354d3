use crate::builtin::{Cat, Sort, Uniq, Wc};
use crate::command::{self, LineSequence, Parsed, PipeCommand};
use crate::error::ShellError;
use crate::parser::{self, CommandKind, Stage};
use crate::source::{FsLineSource, LineSource};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

/// The pipeline executor and, via [`repl`](Interpreter::repl), the
/// interactive session loop.
///
/// One call to [`execute`](Interpreter::execute) runs one full pipeline:
/// parse the line into stages, walk them left to right threading each
/// stage's output into the next, and hand back the last stage's output.
/// Nothing is shared between calls.
///
/// Example
/// ```
/// use pipe_commands::Interpreter;
/// let sh = Interpreter::default();
/// let out = sh.execute("|||").unwrap();
/// assert!(out.is_none());
/// ```
pub struct Interpreter {
    source: Box<dyn LineSource>,
}

impl Interpreter {
    /// Create an interpreter reading filename arguments from `source`.
    pub fn new(source: Box<dyn LineSource>) -> Self {
        Self { source }
    }

    /// Run one raw command line as a pipeline.
    ///
    /// The caller passes a trimmed, non-empty line; the interactive loop
    /// filters blanks before calling. Returns the final stage's output, or
    /// `None` when every segment of the line was empty (a line of pipes is
    /// a no-op, not an error). Any failure in any stage aborts the whole
    /// pipeline and nothing produced by earlier stages escapes.
    pub fn execute(&self, raw: &str) -> std::result::Result<Option<LineSequence>, ShellError> {
        let pipeline = parser::parse_pipeline(raw)?;

        let mut carried: Option<LineSequence> = None;
        for stage in pipeline.stages {
            carried = Some(self.run_stage(&stage, carried.take())?);
        }
        Ok(carried)
    }

    fn run_stage(
        &self,
        stage: &Stage,
        input: Option<LineSequence>,
    ) -> std::result::Result<LineSequence, ShellError> {
        match stage.kind {
            CommandKind::Cat => self.dispatch::<Cat>(&stage.args, input),
            CommandKind::Wc => self.dispatch::<Wc>(&stage.args, input),
            CommandKind::Sort => self.dispatch::<Sort>(&stage.args, input),
            CommandKind::Uniq => self.dispatch::<Uniq>(&stage.args, input),
        }
    }

    fn dispatch<T: PipeCommand>(
        &self,
        args: &[String],
        input: Option<LineSequence>,
    ) -> std::result::Result<LineSequence, ShellError> {
        match command::parse_args::<T>(args)? {
            Parsed::Command(cmd) => cmd.run(input, self.source.as_ref()),
            Parsed::Help(text) => Ok(text),
        }
    }

    /// The interactive Read-Eval-Print Loop.
    ///
    /// Prints a banner, then prompts with `>> ` until interrupted (Ctrl-C)
    /// or the input ends (Ctrl-D). Each non-blank line runs as one pipeline;
    /// its output lines are printed one per line, and failures print
    /// `Error: <message>` without ending the session.
    pub fn repl(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        println!("Enter commands: cat, sort, uniq, wc or | ");
        loop {
            match rl.readline(">> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    match self.execute(line) {
                        Ok(Some(output)) => {
                            for l in &output {
                                println!("{l}");
                            }
                        }
                        Ok(None) => {}
                        Err(e) => println!("Error: {e}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// An interpreter backed by the real filesystem.
    fn default() -> Self {
        Self::new(Box::new(FsLineSource))
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use crate::source::testing::MapSource;

    fn lines(items: &[&str]) -> LineSequence {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn interp(source: MapSource) -> Interpreter {
        Interpreter::new(Box::new(source))
    }

    #[test]
    fn test_cat_sort_uniq_wc_pipeline() {
        let sh = interp(
            MapSource::new().with_file("a.txt", &["pear", "apple", "pear", "apple", "apple"]),
        );
        let out = sh.execute("cat a.txt | sort | uniq | wc -l").unwrap();
        assert_eq!(out, Some(lines(&["2"])));
    }

    #[test]
    fn test_output_threads_between_stages() {
        let sh = interp(MapSource::new().with_file("a.txt", &["b", "a", "b"]));
        let out = sh.execute("cat a.txt | sort").unwrap();
        assert_eq!(out, Some(lines(&["a", "b", "b"])));
    }

    #[test]
    fn test_empty_stage_does_not_break_the_chain() {
        let sh = interp(MapSource::new().with_file("a.txt", &["b", "a"]));
        let out = sh.execute("cat a.txt | | sort").unwrap();
        assert_eq!(out, Some(lines(&["a", "b"])));
    }

    #[test]
    fn test_line_of_pipes_produces_no_output_and_no_error() {
        let sh = interp(MapSource::new());
        assert_eq!(sh.execute("|").unwrap(), None);
        assert_eq!(sh.execute("|||").unwrap(), None);
    }

    #[test]
    fn test_missing_file_error_names_the_file() {
        let sh = interp(MapSource::new());
        let err = sh.execute("cat missing.txt | sort").unwrap_err();
        assert_eq!(err, ShellError::InvalidFile("missing.txt".to_string()));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_unknown_command_fails_before_any_stage_runs() {
        // a.txt does not exist; the parse-time rejection of badcmd must win.
        let sh = interp(MapSource::new());
        let err = sh.execute("cat a.txt | badcmd | sort | uniq").unwrap_err();
        assert_eq!(err, ShellError::InvalidCommand("badcmd".to_string()));
    }

    #[test]
    fn test_sort_alone_without_input_fails() {
        let sh = interp(MapSource::new());
        let err = sh.execute("sort").unwrap_err();
        assert_eq!(err, ShellError::Usage("sort".to_string()));
    }

    #[test]
    fn test_cat_without_filename_fails_like_other_commands() {
        let sh = interp(MapSource::new());
        let err = sh.execute("cat").unwrap_err();
        assert_eq!(err, ShellError::Usage("cat".to_string()));
    }

    #[test]
    fn test_filename_argument_overrides_piped_input() {
        let sh = interp(
            MapSource::new()
                .with_file("a.txt", &["ignored"])
                .with_file("b.txt", &["x", "y", "z"]),
        );
        let out = sh.execute("cat a.txt | wc -l b.txt").unwrap();
        assert_eq!(out, Some(lines(&["3"])));
    }

    #[test]
    fn test_wc_full_mode_at_end_of_pipeline() {
        let sh = interp(MapSource::new().with_file("a.txt", &["hello world", ""]));
        let out = sh.execute("cat a.txt | wc").unwrap();
        assert_eq!(out, Some(lines(&["2 2 13"])));
    }

    #[test]
    fn test_failed_pipeline_yields_no_partial_output() {
        let sh = interp(MapSource::new().with_file("a.txt", &["line"]));
        let result = sh.execute("cat a.txt | sort | cat nope.txt");
        assert!(result.is_err());
    }
}
