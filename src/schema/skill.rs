//! The `skills` table: skills grouped by category with proficiency levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DisplayOrdered, Table};

/// A row of `skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon_name: Option<String>,
    /// Proficiency from 0 to 100.
    pub level: Option<i32>,
    pub order_index: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayOrdered for SkillRow {
    fn display_index(&self) -> Option<i32> {
        self.order_index
    }
}

/// Insert shape for `skills`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl NewSkill {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            id: None,
            icon_name: None,
            level: None,
            order_index: None,
        }
    }
}

/// Update shape for `skills`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl SkillPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.icon_name.is_none()
            && self.level.is_none()
            && self.order_index.is_none()
    }
}

impl Table for SkillRow {
    const NAME: &'static str = "skills";
    type Insert = NewSkill;
    type Patch = SkillPatch;
}
