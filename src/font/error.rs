//! Font resolution errors.

use std::path::PathBuf;

/// Errors that can occur while resolving a font.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font file {} does not exist.", .path.display())]
    ExternalNotFound {
        path: PathBuf,
        #[source]
        source: FontLoadError,
    },

    #[error(
        "The built-in font \"{name}\" does not exist. Available fonts: {}.",
        .available.join(", ")
    )]
    NotFound {
        name: String,
        /// Built-in font names, sorted ascending.
        available: Vec<String>,
        #[source]
        source: Option<FontLoadError>,
    },

    #[error("Cannot collect names of built-in fonts.")]
    CatalogUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl FontError {
    /// Whether the requested font itself could not be found, as opposed to
    /// the catalog being unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ExternalNotFound { .. } | Self::NotFound { .. })
    }
}

/// Why a single font could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("Failed to read font: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid font definition: {0}")]
    Parse(String),

    #[error("No bundled font named '{0}'")]
    Missing(String),
}
