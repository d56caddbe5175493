use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::MotdError;
use crate::settings::Settings;

/// Print the message or write it to the target file, depending on `preview`.
///
/// # Errors
///
/// Propagates the errors of [`preview`] and [`persist`].
pub fn deliver<W: Write>(
    message: &str,
    settings: &Settings,
    out: &mut W,
) -> Result<(), MotdError> {
    if settings.preview {
        return preview(message, out);
    }

    persist(&settings.target, message, settings.truncate)
}

/// Write the message and a trailing newline to `out`.
///
/// # Errors
///
/// Returns [`MotdError::Output`] if `out` rejects the write.
pub fn preview<W: Write>(message: &str, out: &mut W) -> Result<(), MotdError> {
    writeln!(out, "{message}")?;
    out.flush()?;
    Ok(())
}

/// Overwrite the start of an existing file with the message bytes.
///
/// The file is never created. Unless `truncate` is set, bytes past the end of
/// the message are left as they were.
///
/// # Errors
///
/// Returns [`MotdError::FileOpen`] if `path` cannot be opened for writing and
/// [`MotdError::FileWrite`] if the write itself fails.
pub fn persist(path: &Path, message: &str, truncate: bool) -> Result<(), MotdError> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(truncate)
        .open(path)
        .map_err(|source| MotdError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(message.as_bytes())
        .map_err(|source| MotdError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        bytes = message.len(),
        truncated = truncate,
        "Wrote message"
    );
    Ok(())
}
