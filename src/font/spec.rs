//! Font spec parsing.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Prefix marking a font spec as a path to an external font file.
pub const FILE_PREFIX: &str = "file:";

/// Identifies a font, either an external file or a built-in by name.
///
/// Parsed once at the configuration boundary so nothing downstream has to
/// look at the `file:` prefix again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSpec {
    /// `file:<path>` - a FIGlet font on the filesystem
    ExternalFile(PathBuf),
    /// A bare name looked up in the built-in catalog
    BuiltIn(String),
}

impl FontSpec {
    /// Parse a font spec string. Every string is a valid spec.
    pub fn parse(spec: &str) -> Self {
        match spec.strip_prefix(FILE_PREFIX) {
            Some(path) => Self::ExternalFile(PathBuf::from(path)),
            None => Self::BuiltIn(spec.to_string()),
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::BuiltIn(super::STANDARD_FONT.to_string())
    }
}

impl FromStr for FontSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FontSpec {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExternalFile(path) => write!(f, "{}{}", FILE_PREFIX, path.display()),
            Self::BuiltIn(name) => write!(f, "{}", name),
        }
    }
}
