//! Glyph rendering backends.
//!
//! The banner pipeline only needs "font + text in, block of lines out";
//! [`FigletRenderer`] provides that with `figlet-rs`.

use crate::font::FontDefinition;

/// Raw output of a renderer, before whitespace normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    lines: Vec<String>,
}

impl RenderedBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split multi-line text into a block, one entry per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for RenderedBlock {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

/// Draws text as a rectangular block of glyph rows.
pub trait Renderer {
    fn render(&self, font: &FontDefinition, text: &str) -> RenderedBlock;
}

/// Renderer backed by `figlet-rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigletRenderer;

impl Renderer for FigletRenderer {
    fn render(&self, font: &FontDefinition, text: &str) -> RenderedBlock {
        // figlet-rs yields nothing for empty input
        match font.figfont().convert(text) {
            Some(figure) => RenderedBlock::from_text(&figure.to_string()),
            None => RenderedBlock::default(),
        }
    }
}
