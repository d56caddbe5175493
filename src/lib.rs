pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod message;
pub mod settings;
pub mod sink;
#[doc(hidden)]
pub mod test_support;

mod app;

use std::io::{self, Write};

use clap::CommandFactory;

pub use app::{App, write_debug_report};
pub use cli::Cli;
pub use error::MotdError;
pub use settings::Settings;

/// Parse the process arguments into a [`Cli`].
#[must_use]
pub fn parse_cli() -> Cli {
    parse_cli_impl()
}

#[cfg(target_os = "macos")]
fn parse_cli_impl() -> Cli {
    use clap::{ColorChoice, FromArgMatches};

    let matches = Cli::command().color(ColorChoice::Never).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

#[cfg(not(target_os = "macos"))]
fn parse_cli_impl() -> Cli {
    use clap::Parser;

    Cli::parse()
}

/// Run the motd CLI entrypoint against the process stdin and stdout.
///
/// # Errors
///
/// Returns an error when configuration cannot be loaded, required inputs are
/// missing, or the message cannot be delivered.
pub fn run(cli: &Cli) -> color_eyre::Result<()> {
    init_tracing(cli);

    let app = App::bootstrap(cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Render an error report for the terminal: the head, each cause, and the
/// usage text when required inputs were missing.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_cli_error<W: Write>(err: &color_eyre::Report, mut writer: W) -> io::Result<()> {
    let mut chain = err.chain();
    if let Some(head) = chain.next() {
        writeln!(writer, "Error: {head}")?;
    }
    for cause in chain {
        writeln!(writer, "    caused by: {cause}")?;
    }

    if matches!(err.downcast_ref::<MotdError>(), Some(MotdError::MissingInput)) {
        writeln!(writer)?;
        write!(writer, "{}", command().render_help())?;
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let level = desired_level(cli);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn desired_level(cli: &Cli) -> tracing::level_filters::LevelFilter {
    if cli.quiet {
        return tracing::level_filters::LevelFilter::ERROR;
    }

    match cli.verbose {
        0 => tracing::level_filters::LevelFilter::WARN,
        1 => tracing::level_filters::LevelFilter::INFO,
        2 => tracing::level_filters::LevelFilter::DEBUG,
        _ => tracing::level_filters::LevelFilter::TRACE,
    }
}

#[must_use]
pub fn command() -> clap::Command {
    Cli::command()
}
