//! Default learner configuration
//!
//! Every request acts for this learner; there is no authentication.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::catalog::AgeGroup;
use crate::domain::foundation::UserId;

#[derive(Debug, Clone, Deserialize)]
pub struct LearnerConfig {
    /// Id of the learner all requests act for
    #[serde(default = "default_user_id")]
    pub default_user_id: String,

    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Age band label, e.g. "6-8"
    #[serde(default = "default_age_group")]
    pub age_group: Option<AgeGroup>,
}

impl LearnerConfig {
    /// The configured learner id as a domain id
    pub fn user_id(&self) -> Result<UserId, ValidationError> {
        UserId::new(self.default_user_id.clone()).map_err(|_| ValidationError::InvalidLearnerId)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.user_id()?;
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingRequired("learner.username"));
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("learner.display_name"));
        }
        Ok(())
    }
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            default_user_id: default_user_id(),
            username: default_username(),
            display_name: default_display_name(),
            age_group: default_age_group(),
        }
    }
}

fn default_user_id() -> String {
    "default-user".to_string()
}

fn default_username() -> String {
    "learner".to_string()
}

fn default_display_name() -> String {
    "Young Learner".to_string()
}

fn default_age_group() -> Option<AgeGroup> {
    Some(AgeGroup::EarlyReader)
}
