use std::io::{self, BufRead, Write};

use color_eyre::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::MotdError;
use crate::input::{self, Inputs};
use crate::message;
use crate::settings::Settings;
use crate::sink;

pub struct App {
    pub settings: Settings,
}

impl App {
    /// Load configuration and resolve the settings for this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed, or
    /// an environment override is malformed.
    pub fn bootstrap(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        if let Some(path) = &config.source {
            tracing::info!(path = %path.display(), "Using config file");
        }
        let settings = Settings::resolve(cli, &config)?;
        tracing::debug!(?settings, config = ?config.source, "Resolved settings");
        Ok(Self::new(settings))
    }

    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolve inputs, then either report them (debug) or format and deliver
    /// the message.
    ///
    /// # Errors
    ///
    /// Returns a [`MotdError`] for missing inputs, target file failures, or a
    /// failed write to `out`.
    pub fn run<R, W>(&self, input: &mut R, out: &mut W) -> Result<(), MotdError>
    where
        R: BufRead,
        W: Write,
    {
        let inputs = input::resolve(&self.settings, input, out)?;

        if self.settings.debug {
            write_debug_report(&self.settings, &inputs, out)?;
            return Ok(());
        }

        let message = message::compose(&inputs.name, &inputs.greeting);
        sink::deliver(&message, &self.settings, out)
    }
}

/// Print the resolved inputs as labeled lines.
///
/// # Errors
///
/// Returns an error if `out` rejects the write.
pub fn write_debug_report<W: Write>(
    settings: &Settings,
    inputs: &Inputs,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Name: {}", inputs.name)?;
    writeln!(out, "Greeting: {}", inputs.greeting)?;
    writeln!(out, "Prompt: {}", settings.prompt)?;
    writeln!(out, "Preview: {}", settings.preview)?;
    out.flush()
}

#[cfg(test)]
mod tests;
