//! Avatar presentation settings loaded from `avatar_config`.

use serde::Serialize;

use crate::schema::AvatarConfigRow;

use super::RemoteConfig;

/// Placeholder portrait shown until a remote URL arrives.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Render-ready avatar settings.
///
/// Always fully populated: the defaults below until a row lands, then the
/// row's values, field for field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarConfig {
    pub show_orbital_elements: bool,
    /// Outer ring period in seconds.
    pub orbital_speed_1: f64,
    /// Inner ring period in seconds. The rings counter-rotate.
    pub orbital_speed_2: f64,
    pub show_floating_particles: bool,
    pub show_animated_border: bool,
    pub avatar_url: Option<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            show_orbital_elements: true,
            orbital_speed_1: 20.0,
            orbital_speed_2: 15.0,
            show_floating_particles: true,
            show_animated_border: true,
            avatar_url: None,
        }
    }
}

impl AvatarConfig {
    /// Portrait URL with the placeholder substituted when unset.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(PLACEHOLDER_AVATAR)
    }
}

impl RemoteConfig for AvatarConfig {
    type Table = AvatarConfigRow;

    fn defaults() -> Self {
        Self::default()
    }

    fn from_row(row: AvatarConfigRow) -> Self {
        Self {
            show_orbital_elements: row.show_orbital_elements,
            orbital_speed_1: row.orbital_speed_1,
            orbital_speed_2: row.orbital_speed_2,
            show_floating_particles: row.show_floating_particles,
            show_animated_border: row.show_animated_border,
            avatar_url: row.avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn defaults_match_documented_values() {
        let config = AvatarConfig::default();
        assert!(config.show_orbital_elements);
        assert_eq!(config.orbital_speed_1, 20.0);
        assert_eq!(config.orbital_speed_2, 15.0);
        assert!(config.show_floating_particles);
        assert!(config.show_animated_border);
        assert!(config.avatar_url.is_none());
    }

    #[test]
    fn from_row_copies_every_field() {
        let row = AvatarConfigRow {
            id: Uuid::new_v4(),
            avatar_url: Some("https://cdn.example.com/me.png".to_string()),
            orbital_speed_1: 30.0,
            orbital_speed_2: 15.0,
            show_animated_border: false,
            show_floating_particles: true,
            show_orbital_elements: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let config = AvatarConfig::from_row(row);
        assert_eq!(
            config,
            AvatarConfig {
                show_orbital_elements: false,
                orbital_speed_1: 30.0,
                orbital_speed_2: 15.0,
                show_floating_particles: true,
                show_animated_border: false,
                avatar_url: Some("https://cdn.example.com/me.png".to_string()),
            }
        );
    }

    #[test]
    fn image_url_falls_back_to_placeholder() {
        let config = AvatarConfig::default();
        assert_eq!(config.image_url(), PLACEHOLDER_AVATAR);

        let config = AvatarConfig {
            avatar_url: Some("https://cdn.example.com/me.png".to_string()),
            ..AvatarConfig::default()
        };
        assert_eq!(config.image_url(), "https://cdn.example.com/me.png");
    }
}
