//! The banner generation pipeline.

use crate::banner::{self, whitespace, Banner, WriteError};
use crate::config::BannerConfig;
use crate::font::{EmbeddedCatalog, FontCatalog, FontError, FontResolver};
use crate::render::{FigletRenderer, Renderer};
use std::path::PathBuf;
use tracing::info;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Runs font resolution, rendering, stripping, composition and writing.
///
/// Holds no state between runs; each call works only from the config it
/// is given.
#[derive(Debug, Clone, Default)]
pub struct Generator<C = EmbeddedCatalog, R = FigletRenderer> {
    resolver: FontResolver<C>,
    renderer: R,
}

impl Generator {
    /// Generator using the embedded fonts and the figlet renderer.
    pub fn new() -> Self {
        Self::with_parts(EmbeddedCatalog, FigletRenderer)
    }
}

impl<C: FontCatalog, R: Renderer> Generator<C, R> {
    pub fn with_parts(catalog: C, renderer: R) -> Self {
        Self {
            resolver: FontResolver::with_catalog(catalog),
            renderer,
        }
    }

    /// Build the banner text without writing it.
    pub fn compose(&self, config: &BannerConfig) -> Result<Banner, GenerateError> {
        let font = self.resolver.resolve(&config.font)?;
        let block = self.renderer.render(&font, &config.text);
        let lines = whitespace::strip(&block);
        Ok(banner::compose(config, &lines))
    }

    /// Build the banner and write it to the configured file.
    pub fn generate(&self, config: &BannerConfig) -> Result<PathBuf, GenerateError> {
        info!("Generating banner...");
        let banner = self.compose(config)?;
        let path = banner::write(&config.output_directory, &config.filename, &banner)?;
        info!("Banner written to {}", path.display());
        Ok(path)
    }
}
