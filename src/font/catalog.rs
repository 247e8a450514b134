//! Built-in font catalogs.
//!
//! A catalog is the single source of truth for which built-in font names are
//! valid. [`EmbeddedCatalog`] is compiled into the binary; [`DirectoryCatalog`]
//! reads a user-supplied directory of `.flf` files instead.

use super::error::{FontError, FontLoadError};
use super::FontDefinition;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/bundled_fonts.rs"));

/// File suffix (without the dot) of a FIGlet font file.
pub const FONT_SUFFIX: &str = "flf";

/// Name of the FIGlet standard font, which ships inside `figlet-rs`.
pub const STANDARD_FONT: &str = "standard";

/// A source of built-in fonts addressed by name.
pub trait FontCatalog {
    /// Human-readable location for error messages.
    fn location(&self) -> String;

    /// All font names this catalog can load.
    fn list_names(&self) -> Result<BTreeSet<String>, FontError>;

    /// Load the font with the given name.
    ///
    /// Callers check membership with [`list_names`](Self::list_names) first;
    /// a listed font can still fail to load if its contents are unreadable.
    fn load(&self, name: &str) -> Result<FontDefinition, FontLoadError>;
}

/// Fonts compiled into the binary.
///
/// Contains the `standard` font from `figlet-rs` plus every `fonts/*.flf`
/// file present at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }

    fn bundled(name: &str) -> Option<&'static str> {
        BUNDLED_FONTS
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, contents)| *contents)
    }
}

impl FontCatalog for EmbeddedCatalog {
    fn location(&self) -> String {
        "embedded font bundle".to_string()
    }

    fn list_names(&self) -> Result<BTreeSet<String>, FontError> {
        let mut names: BTreeSet<String> = BUNDLED_FONTS
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        names.insert(STANDARD_FONT.to_string());
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<FontDefinition, FontLoadError> {
        // A bundled file wins over the copy inside figlet-rs.
        match Self::bundled(name) {
            Some(contents) => FontDefinition::parse(contents),
            None if name == STANDARD_FONT => FontDefinition::standard(),
            None => Err(FontLoadError::Missing(name.to_string())),
        }
    }
}

/// Fonts read from a directory of `.flf` files.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    dir: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn font_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, FONT_SUFFIX))
    }
}

impl FontCatalog for DirectoryCatalog {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn list_names(&self) -> Result<BTreeSet<String>, FontError> {
        let unavailable = |source| FontError::CatalogUnavailable {
            location: self.location(),
            source,
        };

        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.dir).map_err(unavailable)? {
            let path = entry.map_err(unavailable)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(FONT_SUFFIX) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.insert(stem.to_string());
            }
        }
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<FontDefinition, FontLoadError> {
        let contents = fs::read_to_string(self.font_path(name))?;
        FontDefinition::parse(&contents)
    }
}
