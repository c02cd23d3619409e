//! Command-line argument parsing for stepmatch.
//!
//! ```text
//! stepmatch [--mute] [--seed <n>] [CONTENT.json]
//! stepmatch --version | --help
//! ```

use std::path::PathBuf;

/// Options for a game run. Anything left unset falls back to the
/// environment and then the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    pub content_path: Option<PathBuf>,
    pub mute: bool,
    pub seed: Option<u64>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Play (default)
    Run(RunArgs),
    /// Arguments could not be understood; carries the reason
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win wherever they appear.
///
/// # Examples
///
/// ```
/// use stepmatch::cli::args::{parse_args, CliCommand, RunArgs};
///
/// let args = vec!["stepmatch".to_string(), "--mute".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run(RunArgs { mute: true, ..RunArgs::default() })
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut run = RunArgs::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--mute" | "-m" => run.mute = true,
            "--seed" => {
                let Some(value) = args.next() else {
                    return CliCommand::Invalid("--seed needs a value".to_string());
                };
                match value.parse::<u64>() {
                    Ok(seed) => run.seed = Some(seed),
                    Err(_) => {
                        return CliCommand::Invalid(format!("invalid seed: {}", value));
                    }
                }
            }
            flag if flag.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option: {}", flag));
            }
            path => {
                if run.content_path.is_some() {
                    return CliCommand::Invalid(format!("unexpected argument: {}", path));
                }
                run.content_path = Some(PathBuf::from(path));
            }
        }
    }

    CliCommand::Run(run)
}

/// Usage text for `--help` and argument errors.
pub fn usage() -> String {
    format!(
        "stepmatch {}\n\
         Match each step of a process with its description.\n\n\
         USAGE:\n    stepmatch [OPTIONS] [CONTENT]\n\n\
         ARGS:\n    <CONTENT>    Puzzle document (JSON). Defaults to ./steps.json\n\n\
         OPTIONS:\n\
         \x20   -m, --mute       Start with sound off\n\
         \x20       --seed <n>   Fixed shuffle seed\n\
         \x20   -h, --help       Print help\n\
         \x20   -V, --version    Print version\n\n\
         ENVIRONMENT:\n\
         \x20   STEPMATCH_CONTENT, STEPMATCH_MUTED, STEPMATCH_SEED, STEPMATCH_LOG\n",
        super::VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("stepmatch")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
        assert_eq!(parse(&["--mute", "--version"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunArgs::default()));
    }

    #[test]
    fn test_parse_full_run() {
        assert_eq!(
            parse(&["--seed", "17", "puzzle.json", "--mute"]),
            CliCommand::Run(RunArgs {
                content_path: Some(PathBuf::from("puzzle.json")),
                mute: true,
                seed: Some(17),
            })
        );
    }

    #[test]
    fn test_parse_bad_seed() {
        assert!(matches!(parse(&["--seed", "abc"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--seed"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            CliCommand::Invalid("unknown option: --unknown".to_string())
        );
    }

    #[test]
    fn test_parse_two_paths() {
        assert!(matches!(parse(&["a.json", "b.json"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_usage_mentions_options() {
        let text = usage();
        assert!(text.contains("--seed"));
        assert!(text.contains("STEPMATCH_CONTENT"));
    }
}
