//! Seed catalog loading.
//!
//! The default catalog ships inside the binary; a YAML file with the same
//! shape can replace it at startup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::catalog::CatalogContent;
use crate::domain::foundation::ValidationError;

const EMBEDDED_CATALOG: &str = include_str!("../../../seed/catalog.yaml");

/// Errors loading a seed catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Seed catalog is inconsistent: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parses and validates a YAML catalog document.
pub fn parse_catalog(yaml: &str) -> Result<CatalogContent, SeedError> {
    let content: CatalogContent = serde_yaml::from_str(yaml)?;
    content.validate()?;
    Ok(content)
}

/// The catalog compiled into the binary.
pub fn embedded_catalog() -> Result<CatalogContent, SeedError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Reads a catalog from `path`.
pub fn load_catalog_file(path: &Path) -> Result<CatalogContent, SeedError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&yaml)
}

/// Reads `path` when given, otherwise falls back to the embedded catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<CatalogContent, SeedError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed catalog from file");
            load_catalog_file(path)
        }
        None => embedded_catalog(),
    }
}
