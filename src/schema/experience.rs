//! The `experiences` table: work history entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DisplayOrdered, Table};

/// A row of `experiences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRow {
    pub id: Uuid,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: Option<bool>,
    pub technologies: Option<Vec<String>>,
    pub order_index: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExperienceRow {
    /// True when the role has no end: either flagged current or open-ended.
    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.is_current.unwrap_or(false) || self.end_date.is_none()
    }

    #[must_use]
    pub fn technology_list(&self) -> &[String] {
        self.technologies.as_deref().unwrap_or(&[])
    }
}

impl DisplayOrdered for ExperienceRow {
    fn display_index(&self) -> Option<i32> {
        self.order_index
    }
}

/// Insert shape for `experiences`.
#[derive(Debug, Clone, Serialize)]
pub struct NewExperience {
    pub company_name: String,
    pub position: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl NewExperience {
    #[must_use]
    pub fn new(
        company_name: impl Into<String>,
        position: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            position: position.into(),
            start_date,
            id: None,
            location: None,
            description: None,
            end_date: None,
            is_current: None,
            technologies: None,
            order_index: None,
        }
    }
}

/// Update shape for `experiences`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperiencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl ExperiencePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.position.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.is_current.is_none()
            && self.technologies.is_none()
            && self.order_index.is_none()
    }
}

impl Table for ExperienceRow {
    const NAME: &'static str = "experiences";
    type Insert = NewExperience;
    type Patch = ExperiencePatch;
}
