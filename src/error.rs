use std::io;
use std::path::PathBuf;

/// Failures that end a run before or while delivering the message.
#[derive(Debug, thiserror::Error)]
pub enum MotdError {
    #[error("--name and --greeting are both required unless --prompt is given")]
    MissingInput,
    #[error("Unable to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to write to {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to standard output")]
    Output(#[from] io::Error),
}
