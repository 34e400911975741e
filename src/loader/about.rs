//! About-section copy loaded from `about_content`.

use serde::Serialize;

use crate::client::{Direction, Query};
use crate::schema::AboutContentRow;

use super::RemoteConfig;

/// Render-ready about-section copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutSection {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Default for AboutSection {
    fn default() -> Self {
        Self {
            title: "About".to_string(),
            description: "Developer with a soft spot for clean, reliable software.".to_string(),
            image_url: None,
        }
    }
}

impl RemoteConfig for AboutSection {
    type Table = AboutContentRow;

    fn defaults() -> Self {
        Self::default()
    }

    fn from_row(row: AboutContentRow) -> Self {
        Self {
            title: row.title,
            description: row.description,
            image_url: row.image_url,
        }
    }

    /// `about_content` carries no `created_at`; take the freshest copy.
    fn query() -> Query {
        Query::new().order("updated_at", Direction::Descending)
    }
}
