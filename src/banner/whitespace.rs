//! Whitespace normalization for rendered glyph blocks.
//!
//! FIGlet fonts pad every glyph to the full font height and width, which
//! leaves blank rows and columns around the art. [`strip`] removes them:
//!
//! 1. Trailing whitespace is removed from every line.
//! 2. Leading and trailing lines that are then empty are dropped.
//! 3. The leading spaces shared by all non-empty lines are removed.
//!
//! Interior empty lines are kept. Stripping a stripped block is a no-op.

use crate::render::RenderedBlock;

/// Strip structurally insignificant whitespace from a rendered block.
pub fn strip(block: &RenderedBlock) -> Vec<String> {
    strip_lines(block.lines())
}

/// Same as [`strip`], for plain lines.
pub fn strip_lines(lines: &[String]) -> Vec<String> {
    let trimmed: Vec<&str> = lines.iter().map(|l| l.trim_end()).collect();

    let first = trimmed.iter().position(|l| !l.is_empty());
    let last = trimmed.iter().rposition(|l| !l.is_empty());
    let body = match (first, last) {
        (Some(first), Some(last)) => &trimmed[first..=last],
        _ => return Vec::new(),
    };

    let indent = body
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| leading_spaces(l))
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| {
            if l.is_empty() {
                String::new()
            } else {
                l[indent..].to_string()
            }
        })
        .collect()
}

/// Number of leading ASCII spaces; always a valid byte index into `line`.
fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}
