//! Learner entity.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::AgeGroup;
use crate::domain::foundation::{UserId, ValidationError};

/// A learner and their lifetime point total.
///
/// `total_points` only grows, and only through [`Learner::credit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    id: UserId,
    username: String,
    display_name: String,
    age_group: Option<AgeGroup>,
    total_points: u64,
}

impl Learner {
    /// Creates a learner with no points.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        display_name: impl Into<String>,
        age_group: Option<AgeGroup>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }
        Ok(Self {
            id,
            username,
            display_name,
            age_group,
            total_points: 0,
        })
    }

    /// Adds module points to the lifetime total.
    pub fn credit(&mut self, points: u32) {
        self.total_points = self.total_points.saturating_add(u64::from(points));
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }
}
