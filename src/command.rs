use crate::error::ShellError;
use crate::source::LineSource;
use argh::{EarlyExit, FromArgs};

/// The currency passed between pipeline stages: an ordered sequence of text
/// lines with terminators stripped. Duplicates are permitted.
pub type LineSequence = Vec<String>;

/// A command that can run as one stage of a pipeline.
///
/// Implementors describe their argument grammar with [`argh`]'s `FromArgs`
/// derive and are constructed from the stage's raw tokens by [`parse_args`].
/// Execution is purely functional over the inputs: the stage's own arguments,
/// the previous stage's output (if any), and a [`LineSource`] for resolving
/// filename arguments.
pub(crate) trait PipeCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cat" or "wc".
    fn name() -> &'static str;

    /// Executes the stage, producing the lines carried to the next stage.
    fn run(
        self,
        input: Option<LineSequence>,
        source: &dyn LineSource,
    ) -> Result<LineSequence, ShellError>;
}

/// Outcome of parsing a stage's argument tokens.
#[derive(Debug)]
pub(crate) enum Parsed<T> {
    /// Arguments parsed; the command is ready to run.
    Command(T),
    /// The stage asked for `--help`; its "output" is the generated help text.
    Help(LineSequence),
}

/// Parses a stage's tokens into a command, normalizing argh's early exits.
///
/// A parse failure (missing required argument, unknown flag) becomes a
/// [`ShellError::Usage`] naming the command, so every handler fails uniformly
/// on bad arguments. An ok-status early exit is the `--help` text, returned
/// as the stage's output instead of an error.
pub(crate) fn parse_args<T: PipeCommand>(args: &[String]) -> Result<Parsed<T>, ShellError> {
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    match T::from_args(&[T::name()], &arg_refs) {
        Ok(cmd) => Ok(Parsed::Command(cmd)),
        Err(EarlyExit { output, status: Ok(()) }) => {
            Ok(Parsed::Help(output.lines().map(str::to_string).collect()))
        }
        Err(EarlyExit { .. }) => Err(ShellError::Usage(T::name().to_string())),
    }
}

/// Resolves where a stage's input comes from: a named file when the stage
/// supplied a filename, otherwise the previous stage's output. Exactly one
/// must be available; with neither, the stage fails with a usage error
/// naming `command`.
pub(crate) fn resolve_input(
    command: &str,
    file: Option<&str>,
    prior: Option<LineSequence>,
    source: &dyn LineSource,
) -> Result<LineSequence, ShellError> {
    match (file, prior) {
        (Some(path), _) => source.read_lines(path),
        (None, Some(lines)) => Ok(lines),
        (None, None) => Err(ShellError::Usage(command.to_string())),
    }
}
