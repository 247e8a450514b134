//! Banner assembly and output.
//!
//! - [`whitespace`] - strips padding from the rendered glyph block
//! - [`color`] - supported colors and their placeholder tokens
//! - [`compose`] - builds the final banner string
//! - [`writer`] - writes the banner file

pub mod color;
pub mod compose;
mod error;
pub mod whitespace;
pub mod writer;

pub use color::{Color, ColorSpec, RESET_TOKEN};
pub use compose::{compose, NBSP, PROJECT_VERSION_TOKEN};
pub use error::WriteError;
pub use writer::write;

use std::fmt;

/// The final banner text, exactly as it is written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner(String);

impl Banner {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Banner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
