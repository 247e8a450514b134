//! Fonts and colors listing handlers

use anyhow::{Context, Result};
use std::path::PathBuf;

use bannergen::banner::color::DEFAULT_COLOR_NAME;
use bannergen::font::{DirectoryCatalog, EmbeddedCatalog, FontCatalog};
use bannergen::Color;

/// Print built-in font names, sorted, one per line.
pub fn handle_fonts(font_dir: Option<PathBuf>) -> Result<()> {
    let catalog: Box<dyn FontCatalog> = match font_dir {
        Some(dir) => Box::new(DirectoryCatalog::new(dir)),
        None => Box::new(EmbeddedCatalog::new()),
    };
    let names = catalog
        .list_names()
        .with_context(|| format!("Failed to list fonts in {}", catalog.location()))?;

    // BTreeSet iterates in ascending order
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Print supported color names, one per line.
pub fn handle_colors() -> Result<()> {
    println!("{}", DEFAULT_COLOR_NAME);
    for color in Color::ALL {
        println!("{}", color);
    }
    Ok(())
}
