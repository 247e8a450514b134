//! Banner composition.
//!
//! Layout of a composed banner:
//!
//! ```text
//! \n[open]line 1
//! \nline 2
//! ...
//! \nline N[reset]
//! [\ninfo]
//! \n
//! ```
//!
//! Every glyph line is preceded by a separator, so the banner starts with a
//! blank line. The color region opens once before the first glyph line and
//! closes once after the last one.

use super::color::{ColorSpec, RESET_TOKEN};
use super::Banner;
use crate::config::BannerConfig;
use tracing::{debug, warn};

/// Info template variable replaced with the project version.
pub const PROJECT_VERSION_TOKEN: &str = "${project.version}";

/// Non-breaking space, substituted for spaces when requested.
pub const NBSP: char = '\u{00A0}';

const LINE_SEPARATOR: char = '\n';

/// Assemble the final banner from stripped glyph lines.
///
/// An empty block is treated as one empty line, so the output always
/// contains at least the leading and trailing separators.
pub fn compose(config: &BannerConfig, lines: &[String]) -> Banner {
    let blank = [String::new()];
    let lines = if lines.is_empty() { &blank[..] } else { lines };

    if let ColorSpec::Unknown(name) = &config.color {
        warn!("Unknown banner color '{}', leaving banner uncolored", name);
    }
    let color = config.color.color();

    let capacity = lines.iter().map(|l| l.len() + 1).sum::<usize>() + 64;
    let mut banner = String::with_capacity(capacity);
    for (i, line) in lines.iter().enumerate() {
        banner.push(LINE_SEPARATOR);
        if i == 0 {
            if let Some(color) = color {
                banner.push_str(&color.open_token());
            }
        }
        banner.push_str(line);
    }
    if color.is_some() {
        banner.push_str(RESET_TOKEN);
    }

    if config.include_info {
        if let Some(info) = info_line(config) {
            banner.push(LINE_SEPARATOR);
            banner.push_str(&info);
        }
    }
    banner.push(LINE_SEPARATOR);

    if config.use_non_breaking_space {
        banner = banner.replace(' ', &NBSP.to_string());
    }

    debug!("Composed banner:\n{}", banner);
    Banner::from(banner)
}

/// The templated info line, or `None` when no template is configured.
///
/// Without a known project version the token is left for the runtime
/// templating layer.
pub fn info_line(config: &BannerConfig) -> Option<String> {
    let template = config.info.as_deref()?;
    Some(match config.project_version.as_deref() {
        Some(version) => template.replace(PROJECT_VERSION_TOKEN, version),
        None => template.to_string(),
    })
}
