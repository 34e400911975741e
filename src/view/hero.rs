//! Hero and about sections.

use crate::config::SiteConfig;
use crate::loader::AboutSection;

/// Renders the hero banner from the static site copy.
#[must_use]
pub fn hero(site: &SiteConfig) -> String {
    let mut out = format!("{} {}\n{}\n", site.greeting, site.name, site.headline);
    if !site.taglines.is_empty() {
        out.push_str(&site.taglines.join(" · "));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&site.intro);
    out.push('\n');
    out
}

/// Renders the about section body. Callers print the section title.
///
/// The body never knows whether its copy was remote; defaults and
/// fetched rows render identically.
#[must_use]
pub fn about(section: &AboutSection) -> String {
    let mut out = format!("{}\n", section.description);
    if let Some(url) = &section.image_url {
        out.push_str(&format!("photo: {url}\n"));
    }
    out
}
