//! The `projects` table: portfolio project cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DisplayOrdered, Table};

/// A row of `projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: Option<bool>,
    pub order_index: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRow {
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    #[must_use]
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

impl DisplayOrdered for ProjectRow {
    fn display_index(&self) -> Option<i32> {
        self.order_index
    }
}

/// Insert shape for `projects`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl NewProject {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            id: None,
            category: None,
            tags: None,
            image_url: None,
            live_url: None,
            repo_url: None,
            featured: None,
            order_index: None,
        }
    }
}

/// Update shape for `projects`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl ProjectPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.image_url.is_none()
            && self.live_url.is_none()
            && self.repo_url.is_none()
            && self.featured.is_none()
            && self.order_index.is_none()
    }
}

impl Table for ProjectRow {
    const NAME: &'static str = "projects";
    type Insert = NewProject;
    type Patch = ProjectPatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{
            "id": "a1b2c3d4-0000-4000-8000-000000000002",
            "title": "Orbit Tracker",
            "description": "Realtime satellite dashboard.",
            "category": "web",
            "tags": ["rust", "wasm"],
            "image_url": null,
            "live_url": "https://orbit.example.com",
            "repo_url": null,
            "featured": true,
            "order_index": 1,
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-02T00:00:00+00:00"
        }"#;

        let row: ProjectRow = serde_json::from_str(json).unwrap();
        assert!(row.is_featured());
        assert_eq!(row.tag_list(), ["rust", "wasm"]);
        assert_eq!(row.display_index(), Some(1));
    }

    #[test]
    fn null_flags_read_as_not_featured() {
        let json = r#"{
            "id": "a1b2c3d4-0000-4000-8000-000000000003",
            "title": "Sideline",
            "description": "Weekend experiment.",
            "category": null,
            "tags": null,
            "image_url": null,
            "live_url": null,
            "repo_url": null,
            "featured": null,
            "order_index": null,
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00"
        }"#;

        let row: ProjectRow = serde_json::from_str(json).unwrap();
        assert!(!row.is_featured());
        assert!(row.tag_list().is_empty());
        assert_eq!(row.display_index(), None);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ProjectPatch {
            featured: Some(true),
            order_index: Some(3),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "featured": true, "order_index": 3 }));
    }
}
