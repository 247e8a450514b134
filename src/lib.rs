//! bannergen - build-time ASCII-art startup banner generator
//!
//! Turns a piece of text into a FIGlet banner file suitable for display at
//! application startup. The pipeline is:
//!
//! 1. [`font`] resolves a font spec (`file:<path>` or a built-in name)
//! 2. [`render`] draws the text with that font
//! 3. [`banner::whitespace`] strips padding from the rendered block
//! 4. [`banner::compose`] adds color tokens, the info line and separators
//! 5. [`banner::writer`] writes the result to the output file
//!
//! [`Generator`] wires these stages together for one invocation.

pub mod banner;
pub mod cli;
pub mod config;
pub mod font;
pub mod generate;
pub mod render;

pub use banner::{Banner, Color, ColorSpec, WriteError};
pub use config::{BannerConfig, BannerOverrides, ConfigError, ProjectInfo};
pub use font::{FontCatalog, FontDefinition, FontError, FontResolver, FontSpec};
pub use generate::{GenerateError, Generator};
pub use render::{FigletRenderer, RenderedBlock, Renderer};
