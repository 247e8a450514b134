//! Font specs, the built-in font catalog and font resolution.
//!
//! - [`spec`] - parsing `file:<path>` vs. built-in names
//! - [`catalog`] - where built-in fonts come from
//! - [`resolver`] - turning a spec into a loaded [`FontDefinition`]
//! - [`layout`] - structural checks run before parsing

mod catalog;
mod error;
pub mod layout;
mod resolver;
mod spec;

pub use catalog::{DirectoryCatalog, EmbeddedCatalog, FontCatalog, FONT_SUFFIX, STANDARD_FONT};
pub use error::{FontError, FontLoadError};
pub use resolver::FontResolver;
pub use spec::{FontSpec, FILE_PREFIX};

use figlet_rs::FIGfont;

/// A parsed FIGlet font, ready to hand to a [`Renderer`](crate::render::Renderer).
pub struct FontDefinition {
    font: FIGfont,
}

impl FontDefinition {
    /// Parse a font from the contents of a `.flf` file.
    pub fn parse(contents: &str) -> Result<Self, FontLoadError> {
        layout::check(contents)?;
        FIGfont::from_content(contents)
            .map(|font| Self { font })
            .map_err(FontLoadError::Parse)
    }

    /// The FIGlet standard font shipped with `figlet-rs`.
    pub fn standard() -> Result<Self, FontLoadError> {
        FIGfont::standard()
            .map(|font| Self { font })
            .map_err(FontLoadError::Parse)
    }

    /// The underlying figlet font.
    pub fn figfont(&self) -> &FIGfont {
        &self.font
    }
}

impl std::fmt::Debug for FontDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontDefinition").finish_non_exhaustive()
    }
}
