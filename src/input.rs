use std::io::{BufRead, Write};

use crate::error::MotdError;
use crate::settings::Settings;

const GREETING_LABEL: &str = "Your Greeting: ";
const NAME_LABEL: &str = "Your Name: ";

/// The two values a message is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub name: String,
    pub greeting: String,
}

/// Produce the name and greeting for this run.
///
/// With `prompt` set the values are read from `input` and any flag values are
/// ignored. Otherwise both flag values must be non-empty.
///
/// # Errors
///
/// Returns [`MotdError::MissingInput`] when a flag value is empty outside
/// prompt mode, or [`MotdError::Output`] if a prompt label cannot be written.
pub fn resolve<R, W>(
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> Result<Inputs, MotdError>
where
    R: BufRead,
    W: Write,
{
    if settings.prompt {
        let inputs = prompt(input, out)?;
        tracing::debug!("Read name and greeting from prompt");
        return Ok(inputs);
    }

    from_flags(&settings.name, &settings.greeting)
}

/// Accept flag-supplied values, requiring both to be present.
///
/// # Errors
///
/// Returns [`MotdError::MissingInput`] if either value is empty.
pub fn from_flags(name: &str, greeting: &str) -> Result<Inputs, MotdError> {
    if name.is_empty() || greeting.is_empty() {
        return Err(MotdError::MissingInput);
    }

    Ok(Inputs {
        name: name.to_string(),
        greeting: greeting.to_string(),
    })
}

/// Ask for the greeting, then the name, one line each.
///
/// Blank answers are accepted as-is.
///
/// # Errors
///
/// Returns [`MotdError::Output`] if a prompt label cannot be written.
pub fn prompt<R, W>(input: &mut R, out: &mut W) -> Result<Inputs, MotdError>
where
    R: BufRead,
    W: Write,
{
    let greeting = ask(input, out, GREETING_LABEL)?;
    let name = ask(input, out, NAME_LABEL)?;
    Ok(Inputs { name, greeting })
}

fn ask<R, W>(input: &mut R, out: &mut W, label: &str) -> Result<String, MotdError>
where
    R: BufRead,
    W: Write,
{
    out.write_all(label.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    if let Err(err) = input.read_line(&mut line) {
        tracing::debug!(%err, "Failed to read prompt answer; using an empty value");
        line.clear();
    }
    Ok(line.trim().to_string())
}
