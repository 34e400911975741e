//! The `about_content` table: copy for the about section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Table;

/// A row of `about_content`.
///
/// This table carries no `created_at`; when several rows exist the loader
/// takes the most recently updated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContentRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for `about_content`.
#[derive(Debug, Clone, Serialize)]
pub struct NewAboutContent {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewAboutContent {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            id: None,
            image_url: None,
        }
    }
}

/// Update shape for `about_content`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AboutContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AboutContentPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}

impl Table for AboutContentRow {
    const NAME: &'static str = "about_content";
    type Insert = NewAboutContent;
    type Patch = AboutContentPatch;
}
