//! Seed catalog configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.seed_path {
            Some(path) if !path.is_file() => {
                Err(ValidationError::SeedFileMissing(path.display().to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_seed_path_is_valid() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_existing_seed_file_is_valid() {
        let file = NamedTempFile::new().unwrap();
        let config = CatalogConfig {
            seed_path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.seed_path(), Some(file.path()));
    }

    #[test]
    fn test_missing_seed_file_rejected() {
        let config = CatalogConfig {
            seed_path: Some(PathBuf::from("/definitely/not/here.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SeedFileMissing(_))
        ));
    }
}
