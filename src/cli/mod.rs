//! Command-line interface.
//!
//! The dispatcher runs before any terminal setup so `--version`, `--help`
//! and argument errors print to a normal terminal:
//!
//! ```ignore
//! use stepmatch::cli::{parse_args, run_cli_command, CliOutcome};
//!
//! let command = parse_args(std::env::args());
//! let run_args = match run_cli_command(command) {
//!     CliOutcome::Exit(code) => std::process::exit(code),
//!     CliOutcome::Play(args) => args,
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, RunArgs};
pub use version::{version_line, VERSION};

/// What the binary should do after the CLI has had its say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    /// Exit immediately with this status code.
    Exit(i32),
    /// Start the game with these arguments.
    Play(RunArgs),
}

/// Handle informational commands, printing their output.
pub fn run_cli_command(command: CliCommand) -> CliOutcome {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            CliOutcome::Exit(0)
        }
        CliCommand::Help => {
            print!("{}", usage());
            CliOutcome::Exit(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {}\n", reason);
            eprint!("{}", usage());
            CliOutcome::Exit(2)
        }
        CliCommand::Run(args) => CliOutcome::Play(args),
    }
}
