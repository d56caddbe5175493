use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{Result, Section, SectionExt, eyre::Context};
use directories::BaseDirs;
use serde::Deserialize;
use shellexpand::full;

const CONFIG_FILE: &str = "config.toml";
const PROJECT_FILE: &str = ".motd.toml";
const APP_CONFIG_DIR: &str = "motd";
const ENV_CONFIG_FILE: &str = "MOTD_CONFIG";

/// Values read from a configuration file. Every field is optional; anything
/// left unset falls through to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub name: Option<String>,
    pub greeting: Option<String>,
    pub preview: Option<bool>,
    pub truncate: Option<bool>,
    pub target: Option<PathBuf>,
    /// File the values were read from, if any.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Locate and load the configuration file.
    ///
    /// An explicit path (from `--config` or `MOTD_CONFIG`) that does not exist
    /// is skipped with a warning. Without one, `./.motd.toml` is tried and then
    /// `motd/config.toml` under the user configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or is not valid
    /// configuration TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match locate_config_file(explicit) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, contains
    /// unknown keys, or names a `target` whose environment variables are unset.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .map_err(|err| {
                err.with_section(|| {
                    format!(
                        "Ensure the file exists and is readable.\nResolved path: {}",
                        path.display()
                    )
                    .header("Suggested fix")
                })
            })?;
        let mut config = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
            .map_err(|err| {
                err.with_section(|| {
                    format!(
                        "Double-check the TOML syntax; supported keys are name, greeting, preview, truncate and target.\nResolved path: {}",
                        path.display()
                    )
                    .header("Suggested fix")
                })
            })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed TOML, unknown keys, or an unexpandable
    /// `target`.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let partial: PartialConfig = toml::from_str(contents)?;
        let target = partial.target.as_deref().map(expand_path).transpose()?;
        Ok(Self {
            name: partial.name,
            greeting: partial.greeting,
            preview: partial.preview,
            truncate: partial.truncate,
            target,
            source: None,
        })
    }
}

/// Expand `~` and `$VAR` references in a path taken from configuration.
pub(crate) fn expand_path(raw: &str) -> Result<PathBuf> {
    let expanded = full(raw)
        .with_context(|| format!("failed to expand path '{raw}': environment variable missing"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    let explicit = explicit.map(Path::to_path_buf).or_else(|| {
        env::var_os(ENV_CONFIG_FILE)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    });

    if let Some(path) = explicit {
        if path.is_file() {
            return Some(path);
        }
        tracing::warn!(
            path = %path.display(),
            "Config file not found; continuing without it"
        );
        return None;
    }

    let project = PathBuf::from(PROJECT_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = user_config_dir()?.join(CONFIG_FILE);
    user.is_file().then_some(user)
}

fn user_config_dir() -> Option<PathBuf> {
    if let Some(xdg_home) = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|home| !home.trim().is_empty())
    {
        return Some(Path::new(&xdg_home).join(APP_CONFIG_DIR));
    }

    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.config_dir().join(APP_CONFIG_DIR))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    name: Option<String>,
    greeting: Option<String>,
    preview: Option<bool>,
    truncate: Option<bool>,
    target: Option<String>,
}
