use crate::error::ShellError;

/// The closed set of commands a stage can dispatch to.
///
/// Mapping the name to a variant happens at parse time, so a pipeline with an
/// unknown command is rejected before any stage executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Cat,
    Wc,
    Sort,
    Uniq,
}

impl CommandKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "cat" => Some(CommandKind::Cat),
            "wc" => Some(CommandKind::Wc),
            "sort" => Some(CommandKind::Sort),
            "uniq" => Some(CommandKind::Uniq),
            _ => None,
        }
    }
}

/// One command within a pipe-separated pipeline: the command plus the
/// whitespace-split argument tokens that followed its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub kind: CommandKind,
    pub args: Vec<String>,
}

/// The full sequence of stages derived from one input line, in left-to-right
/// execution order.
#[derive(Debug, PartialEq, Eq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

/// Splits a raw command line on `|` and tokenizes each segment.
///
/// Empty segments (leading, trailing, or doubled pipes, or segments that are
/// all whitespace) are skipped rather than treated as errors, so
/// `cat a | | sort` parses the same as `cat a | sort`. A line of nothing but
/// pipes parses to zero stages.
///
/// The first token of each retained segment must be a known command name;
/// anything else fails the whole line with [`ShellError::InvalidCommand`].
pub fn parse_pipeline(raw: &str) -> Result<Pipeline, ShellError> {
    let mut stages = Vec::new();

    for segment in raw.split('|') {
        let mut tokens = segment.split_whitespace();
        let Some(name) = tokens.next() else {
            continue; // blank segment between pipes
        };

        let kind = CommandKind::from_name(name)
            .ok_or_else(|| ShellError::InvalidCommand(name.to_string()))?;

        stages.push(Stage {
            kind,
            args: tokens.map(str::to_string).collect(),
        });
    }

    Ok(Pipeline { stages })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(kind: CommandKind, args: &[&str]) -> Stage {
        Stage {
            kind,
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_command_with_argument() {
        let p = parse_pipeline("cat notes.txt").unwrap();
        assert_eq!(p.stages, vec![stage(CommandKind::Cat, &["notes.txt"])]);
    }

    #[test]
    fn test_full_pipeline_preserves_order() {
        let p = parse_pipeline("cat a.txt | sort | uniq | wc -l").unwrap();
        assert_eq!(
            p.stages,
            vec![
                stage(CommandKind::Cat, &["a.txt"]),
                stage(CommandKind::Sort, &[]),
                stage(CommandKind::Uniq, &[]),
                stage(CommandKind::Wc, &["-l"]),
            ]
        );
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let p = parse_pipeline("cat a.txt | | sort").unwrap();
        assert_eq!(
            p.stages,
            vec![
                stage(CommandKind::Cat, &["a.txt"]),
                stage(CommandKind::Sort, &[]),
            ]
        );
    }

    #[test]
    fn test_pipeline_of_only_pipes_has_no_stages() {
        for raw in ["|", "|||", " |  | "] {
            let p = parse_pipeline(raw).unwrap();
            assert!(p.stages.is_empty(), "expected no stages for {raw:?}");
        }
    }

    #[test]
    fn test_excess_whitespace_between_tokens() {
        let p = parse_pipeline("  wc   -l    data.txt  ").unwrap();
        assert_eq!(p.stages, vec![stage(CommandKind::Wc, &["-l", "data.txt"])]);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let err = parse_pipeline("cat a.txt | badcmd | sort").unwrap_err();
        assert_eq!(err, ShellError::InvalidCommand("badcmd".to_string()));
    }

    #[test]
    fn test_unknown_command_error_names_the_command() {
        let err = parse_pipeline("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command frobnicate");
    }
}
