use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::sync::{LazyLock, Mutex};

/// Serializes tests that touch `MOTD_*`, `DEBUG` or `XDG_CONFIG_HOME`.
pub static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets or removes an environment variable until dropped.
///
/// Hold [`ENV_LOCK`] for as long as any instance is alive.
#[derive(Debug)]
pub struct EnvOverride {
    key: String,
    original: Option<OsString>,
}

impl EnvOverride {
    #[must_use]
    pub fn set_var(key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            std::env::set_var(&key, value);
        }
        Self { key, original }
    }

    #[must_use]
    pub fn set_path(key: impl Into<String>, path: &Path) -> Self {
        Self::set_var(key, path.as_os_str())
    }

    #[must_use]
    pub fn remove(key: impl Into<String>) -> Self {
        let key = key.into();
        let original = std::env::var_os(&key);
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            std::env::remove_var(&key);
        }
        Self { key, original }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(&self.key, value),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

/// Render a path for embedding in a TOML string literal.
#[must_use]
pub fn toml_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    #[cfg(windows)]
    {
        rendered.replace('\\', "\\\\")
    }
    #[cfg(not(windows))]
    {
        rendered.to_string()
    }
}
