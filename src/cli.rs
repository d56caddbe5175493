use std::path::PathBuf;

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Order of operations: inputs are validated, the interactive prompt runs (with --prompt), \
then the debug report is printed (DEBUG=<non-empty> or --debug) before anything is \
formatted or written.

The message is written to /etc/motd unless --target, MOTD_TARGET or the config file \
names another path. The file must already exist and is not truncated unless \
--truncate is given.";

#[derive(Debug, Default, Parser)]
#[command(
    author,
    version,
    about = "Compose a greeting and write it to the message of the day",
    long_about = None,
    name = "motd",
    bin_name = "motd",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Name to use in the message.
    #[arg(short, long)]
    pub name: Option<String>,
    /// Greeting to use in the message.
    #[arg(short, long)]
    pub greeting: Option<String>,
    /// Prompt for greeting and name on standard input.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub prompt: bool,
    /// Print the message instead of writing the target file.
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub preview: bool,
    /// Configuration file (default is ./.motd.toml).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the resolved inputs and exit without writing anything.
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
    /// Write to this file instead of /etc/motd.
    #[arg(long, value_name = "PATH")]
    pub target: Option<PathBuf>,
    /// Truncate the target file before writing.
    #[arg(long, action = ArgAction::SetTrue)]
    pub truncate: bool,
    /// Increase log verbosity (repeat for more).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Silence all log output.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub quiet: bool,
}
