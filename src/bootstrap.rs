//! Application wiring.
//!
//! Turns a validated [`AppConfig`] into a ready router: loads the catalog,
//! seeds the default learner and builds the shared state.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::adapters::http::{self, AppState, LearnerContext};
use crate::adapters::memory::{
    load_catalog, InMemoryContentCatalog, InMemoryLearnerRepository, InMemoryProgressStore,
    SeedError,
};
use crate::config::{AppConfig, ConfigError};
use crate::domain::foundation::ValidationError;
use crate::domain::learner::Learner;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Invalid domain data: {0}")]
    Domain(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the shared state and the learner every request acts for.
pub fn build_state(config: &AppConfig) -> Result<(AppState, LearnerContext), StartupError> {
    let content = load_catalog(config.catalog.seed_path())?;
    let catalog = InMemoryContentCatalog::new(content)?;

    let user_id = config
        .learner
        .user_id()
        .map_err(ConfigError::from)?;
    let learner = Learner::new(
        user_id.clone(),
        config.learner.username.clone(),
        config.learner.display_name.clone(),
        config.learner.age_group,
    )?;

    tracing::info!(
        user_id = %user_id,
        catalog_source = ?config.catalog.seed_path(),
        "Seeded default learner"
    );

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(InMemoryProgressStore::new()),
        Arc::new(InMemoryLearnerRepository::with_learner(learner)),
        config.features.clone(),
    );
    Ok((state, LearnerContext { user_id }))
}

/// Builds the complete application router for `config`.
pub fn build_app(config: &AppConfig) -> Result<Router, StartupError> {
    let (state, learner) = build_state(config)?;
    Ok(http::app(state, learner, &config.server))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_builds() {
        let (state, learner) = build_state(&AppConfig::default()).unwrap();
        assert_eq!(learner.user_id.as_str(), "default-user");
        assert!(!state.features.idempotent_completion);
    }

    #[tokio::test]
    async fn default_learner_is_seeded_with_zero_points() {
        let (state, learner) = build_state(&AppConfig::default()).unwrap();
        let stored = state.learners.find_by_id(&learner.user_id).await.unwrap().unwrap();
        assert_eq!(stored.total_points(), 0);
        assert_eq!(stored.display_name(), "Young Learner");
    }

    #[test]
    fn broken_seed_file_fails_startup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "categories: [not, a, category").unwrap();

        let mut config = AppConfig::default();
        config.catalog.seed_path = Some(file.path().to_path_buf());

        assert!(matches!(build_state(&config), Err(StartupError::Seed(_))));
    }
}
