//! Avatar layer description.
//!
//! The web page draws these settings as animated layers; the terminal
//! states which layers are active and at what speed.

use crate::loader::AvatarConfig;

/// Describes the avatar's layers, one per line.
#[must_use]
pub fn avatar(config: &AvatarConfig, status: &str) -> String {
    let orbital = if config.show_orbital_elements {
        format!(
            "on ({}s outer / {}s inner, counter-rotating)",
            config.orbital_speed_1, config.orbital_speed_2
        )
    } else {
        "off".to_string()
    };

    [
        format!("portrait            {}", config.image_url()),
        format!(
            "animated border     {}",
            on_off(config.show_animated_border)
        ),
        format!(
            "floating particles  {}",
            on_off(config.show_floating_particles)
        ),
        format!("orbital elements    {orbital}"),
        format!("status badge        {status}"),
    ]
    .join("\n")
}

const fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::PLACEHOLDER_AVATAR;

    #[test]
    fn defaults_render_placeholder_and_speeds() {
        let rendered = avatar(&AvatarConfig::default(), "Available for hire");
        assert!(rendered.contains(PLACEHOLDER_AVATAR));
        assert!(rendered.contains("20s outer / 15s inner"));
        assert!(rendered.contains("animated border     on"));
        assert!(rendered.contains("Available for hire"));
    }

    #[test]
    fn disabled_orbits_render_off_without_speeds() {
        let config = AvatarConfig {
            show_orbital_elements: false,
            ..AvatarConfig::default()
        };
        let rendered = avatar(&config, "Available for hire");
        assert!(rendered.contains("orbital elements    off"));
        assert!(!rendered.contains("outer /"));
    }

    #[test]
    fn remote_portrait_replaces_placeholder() {
        let config = AvatarConfig {
            avatar_url: Some("https://cdn.example.com/me.png".to_string()),
            ..AvatarConfig::default()
        };
        let rendered = avatar(&config, "Available for hire");
        assert!(rendered.contains("https://cdn.example.com/me.png"));
        assert!(!rendered.contains(PLACEHOLDER_AVATAR));
    }
}
