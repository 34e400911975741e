//! The `avatar_config` table: presentation settings for the animated avatar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Table;

/// A row of `avatar_config`.
///
/// One row is meaningful; when several exist the loader takes the earliest
/// by `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfigRow {
    pub id: Uuid,
    pub avatar_url: Option<String>,
    pub orbital_speed_1: f64,
    pub orbital_speed_2: f64,
    pub show_animated_border: bool,
    pub show_floating_particles: bool,
    pub show_orbital_elements: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape for `avatar_config`. Every column has a server-side default.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAvatarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_speed_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_speed_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_animated_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_floating_particles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_orbital_elements: Option<bool>,
}

/// Update shape for `avatar_config`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AvatarConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_speed_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_speed_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_animated_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_floating_particles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_orbital_elements: Option<bool>,
}

impl AvatarConfigPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.avatar_url.is_none()
            && self.orbital_speed_1.is_none()
            && self.orbital_speed_2.is_none()
            && self.show_animated_border.is_none()
            && self.show_floating_particles.is_none()
            && self.show_orbital_elements.is_none()
    }
}

impl Table for AvatarConfigRow {
    const NAME: &'static str = "avatar_config";
    type Insert = NewAvatarConfig;
    type Patch = AvatarConfigPatch;
}
