//! Font resolution: font spec in, loaded font out.

use super::catalog::{EmbeddedCatalog, FontCatalog};
use super::error::{FontError, FontLoadError};
use super::spec::FontSpec;
use super::FontDefinition;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resolves a [`FontSpec`] against the filesystem or a built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct FontResolver<C = EmbeddedCatalog> {
    catalog: C,
}

impl FontResolver {
    /// Create a resolver backed by the fonts compiled into the binary.
    pub fn new() -> Self {
        Self::with_catalog(EmbeddedCatalog)
    }
}

impl<C: FontCatalog> FontResolver<C> {
    /// Create a resolver backed by a specific catalog.
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// Load the font a spec points at.
    ///
    /// Fails with [`FontError::ExternalNotFound`] for an unreadable `file:`
    /// path, and with [`FontError::NotFound`] (listing every built-in name)
    /// for an unknown or unloadable built-in.
    pub fn resolve(&self, spec: &FontSpec) -> Result<FontDefinition, FontError> {
        match spec {
            FontSpec::ExternalFile(path) => {
                debug!("Loading font from file {}", path.display());
                load_external(path).map_err(|source| FontError::ExternalNotFound {
                    path: path.clone(),
                    source,
                })
            }
            FontSpec::BuiltIn(name) => {
                let names = self.catalog.list_names()?;
                if !names.contains(name) {
                    return Err(not_found(name, names, None));
                }
                debug!("Loading built-in font {} from {}", name, self.catalog.location());
                self.catalog
                    .load(name)
                    .map_err(|source| not_found(name, names, Some(source)))
            }
        }
    }
}

/// Read and parse an external font file; the handle is closed on return.
fn load_external(path: &Path) -> Result<FontDefinition, FontLoadError> {
    let contents = fs::read_to_string(path)?;
    FontDefinition::parse(&contents)
}

fn not_found(
    name: &str,
    names: impl IntoIterator<Item = String>,
    source: Option<FontLoadError>,
) -> FontError {
    let mut available: Vec<String> = names.into_iter().collect();
    available.sort();
    FontError::NotFound {
        name: name.to_string(),
        available,
        source,
    }
}
