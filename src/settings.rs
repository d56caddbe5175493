use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::eyre::eyre;

use crate::cli::Cli;
use crate::config::{Config, expand_path};

/// Path written when nothing overrides it.
pub const DEFAULT_TARGET: &str = "/etc/motd";

const ENV_NAME: &str = "MOTD_NAME";
const ENV_GREETING: &str = "MOTD_GREETING";
const ENV_PREVIEW: &str = "MOTD_PREVIEW";
const ENV_TARGET: &str = "MOTD_TARGET";
const ENV_DEBUG: &str = "DEBUG";

/// Everything a run needs, resolved once from flags, environment and config.
///
/// Precedence is flags, then `MOTD_*` variables, then the config file, then
/// built-in defaults. An explicitly empty flag still wins, so `--name=""`
/// is treated as a missing name even if a lower layer supplies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub name: String,
    pub greeting: String,
    pub prompt: bool,
    pub preview: bool,
    pub debug: bool,
    pub truncate: bool,
    pub target: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            greeting: String::new(),
            prompt: false,
            preview: false,
            debug: false,
            truncate: false,
            target: PathBuf::from(DEFAULT_TARGET),
        }
    }
}

impl Settings {
    /// Resolve settings against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a `MOTD_*` variable is not valid UTF-8,
    /// `MOTD_PREVIEW` is not a boolean, or `MOTD_TARGET` references an unset
    /// variable.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        Self::from_sources(cli, config, |key| env::var_os(key))
    }

    /// Resolve settings with a caller-supplied environment lookup.
    ///
    /// `DEBUG` only needs to be non-empty; its bytes are never decoded.
    ///
    /// # Errors
    ///
    /// See [`Settings::resolve`].
    pub fn from_sources<F>(cli: &Cli, config: &Config, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |key: &str| -> Result<Option<String>> {
            match lookup(key).filter(|value| !value.is_empty()) {
                None => Ok(None),
                Some(raw) => raw
                    .into_string()
                    .map(Some)
                    .map_err(|raw| eyre!("{key} must be valid UTF-8, got {raw:?}")),
            }
        };

        let name = match &cli.name {
            Some(name) => name.clone(),
            None => var(ENV_NAME)?
                .or_else(|| config.name.clone())
                .unwrap_or_default(),
        };
        let greeting = match &cli.greeting {
            Some(greeting) => greeting.clone(),
            None => var(ENV_GREETING)?
                .or_else(|| config.greeting.clone())
                .unwrap_or_default(),
        };

        let preview = if cli.preview {
            true
        } else {
            var(ENV_PREVIEW)?
                .map(|raw| parse_flag(ENV_PREVIEW, &raw))
                .transpose()?
                .or(config.preview)
                .unwrap_or(false)
        };

        let target = match &cli.target {
            Some(path) => path.clone(),
            None => match var(ENV_TARGET)? {
                Some(raw) => expand_path(&raw)?,
                None => config
                    .target
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
            },
        };

        let debug = cli.debug || lookup(ENV_DEBUG).is_some_and(|value| !value.is_empty());

        Ok(Self {
            name,
            greeting,
            prompt: cli.prompt,
            preview,
            debug,
            truncate: cli.truncate || config.truncate.unwrap_or(false),
            target,
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(eyre!("{key} must be a boolean (true/false), got '{raw}'")),
    }
}
