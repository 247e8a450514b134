//! Banner colors and their placeholder tokens.
//!
//! Tokens are Spring Boot style `${AnsiColor.NAME}` placeholders, substituted
//! by the application at runtime, not raw terminal escape codes.

use std::fmt;
use std::str::FromStr;

/// Token that ends the colored region.
pub const RESET_TOKEN: &str = "${AnsiColor.DEFAULT}";

/// Name of the "no coloring" sentinel.
pub const DEFAULT_COLOR_NAME: &str = "default";

/// A supported banner color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every supported color, in display order.
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Configuration name, e.g. `bright-red`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright-black",
            Self::BrightRed => "bright-red",
            Self::BrightGreen => "bright-green",
            Self::BrightYellow => "bright-yellow",
            Self::BrightBlue => "bright-blue",
            Self::BrightMagenta => "bright-magenta",
            Self::BrightCyan => "bright-cyan",
            Self::BrightWhite => "bright-white",
        }
    }

    /// Name used inside the placeholder token, e.g. `BRIGHT_RED`.
    pub fn tag_name(&self) -> String {
        self.name().replace('-', "_").to_uppercase()
    }

    /// Token that starts the colored region.
    pub fn open_token(&self) -> String {
        format!("${{AnsiColor.{}}}", self.tag_name())
    }

    /// Look up a color by name; case-insensitive, `_` and `-` are equivalent.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The configured banner color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorSpec {
    /// No coloring at all
    #[default]
    Default,
    /// A supported color
    Named(Color),
    /// A name that maps to no color; treated like [`ColorSpec::Default`]
    Unknown(String),
}

impl ColorSpec {
    /// Parse a color name. Never fails: unknown names are kept as
    /// [`ColorSpec::Unknown`] since color is cosmetic.
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case(DEFAULT_COLOR_NAME) {
            return Self::Default;
        }
        match Color::from_name(name) {
            Some(color) => Self::Named(color),
            None => Self::Unknown(name.to_string()),
        }
    }

    /// The color to apply, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Named(color) => Some(*color),
            Self::Default | Self::Unknown(_) => None,
        }
    }
}

impl FromStr for ColorSpec {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT_COLOR_NAME),
            Self::Named(color) => write!(f, "{}", color),
            Self::Unknown(name) => f.write_str(name),
        }
    }
}
