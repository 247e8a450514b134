//! Structural checks on `.flf` contents.
//!
//! `figlet-rs` slices glyph rows by byte offset and trusts the header's
//! counts, so a truncated or hand-edited file can make it panic. Everything
//! it indexes is checked here first.

use super::error::FontLoadError;
use figlet_rs::HeaderLine;

/// Glyphs every FIGlet font must define: ASCII 32..=126 plus seven German
/// characters.
pub const REQUIRED_GLYPHS: usize = 102;

/// Check that `contents` has the layout `figlet-rs` expects.
pub fn check(contents: &str) -> Result<(), FontLoadError> {
    let lines: Vec<&str> = contents.lines().collect();
    let first = lines.first().ok_or_else(|| invalid("font file is empty"))?;

    // The hardblank is split off the signature by byte, so it has to be one byte.
    let signature = first.trim().split(' ').next().unwrap_or_default();
    if signature.len() < 6 || !signature.is_char_boundary(signature.len() - 1) {
        return Err(invalid("malformed signature in header line"));
    }
    let header = HeaderLine::try_from(*first).map_err(FontLoadError::Parse)?;

    let height = usize::try_from(header.height)
        .ok()
        .filter(|h| *h > 0)
        .ok_or_else(|| invalid(format!("invalid glyph height {}", header.height)))?;
    let comments = usize::try_from(header.comment_lines)
        .map_err(|_| invalid(format!("invalid comment count {}", header.comment_lines)))?;

    let body_start = 1 + comments;
    let body_end = REQUIRED_GLYPHS
        .checked_mul(height)
        .and_then(|rows| rows.checked_add(body_start))
        .filter(|end| *end <= lines.len())
        .ok_or_else(|| {
            invalid(format!(
                "expected at least {} glyphs of height {}, file has {} lines",
                REQUIRED_GLYPHS,
                height,
                lines.len()
            ))
        })?;

    for (i, row) in lines[body_start..body_end].iter().enumerate() {
        check_row(row, height, i % height, body_start + i)?;
    }

    // Code-tagged glyphs: a code line followed by `height` rows.
    let tagged = &lines[body_end..];
    if tagged.len() % (height + 1) != 0 {
        return Err(invalid("incomplete code-tagged glyph at end of file"));
    }
    for (i, row) in tagged.iter().enumerate() {
        let pos = i % (height + 1);
        if pos > 0 {
            check_row(row, height, pos - 1, body_end + i)?;
        }
    }

    Ok(())
}

/// A glyph row loses its endmark, and the last row of a multi-row glyph
/// loses a doubled one. Both must be single-byte characters.
fn check_row(row: &str, height: usize, index: usize, line: usize) -> Result<(), FontLoadError> {
    let marks = if height != 1 && index == height - 1 { 2 } else { 1 };
    if row.len() < marks || !row.is_char_boundary(row.len() - marks) {
        return Err(invalid(format!(
            "glyph row on line {} is missing its endmark",
            line + 1
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> FontLoadError {
    FontLoadError::Parse(message.into())
}
