//! Banner output errors.

use std::path::PathBuf;

/// Errors that can occur while writing the banner file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create output directory {}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write banner file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
