//! Handler for the `show` command: the full landing page.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::loader::ConfigOrigin;
use crate::view;

/// Render every landing page section in reading order.
///
/// Mirrors how the page resolves: static hero copy first, then the
/// remotely configurable sections with their fallbacks already applied.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let app = super::boot(config_path.as_ref())?;
    let landing = app.landing().await;

    if output::is_json() {
        output::json_output(serde_json::to_value(&landing)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::lines(&view::hero::hero(&app.config().site));

    output::section("Avatar");
    output::lines(&view::avatar::avatar(&landing.avatar, &app.config().site.status));
    if output::verbosity() > 0 && landing.avatar_origin == ConfigOrigin::Defaults {
        output::note("avatar presentation uses built-in defaults");
    }

    output::section(&landing.about.title);
    output::lines(&view::hero::about(&landing.about));
    if output::verbosity() > 0 && landing.about_origin == ConfigOrigin::Defaults {
        output::note("about copy uses built-in defaults");
    }

    output::section("Featured Work");
    let featured =
        view::projects::featured_only(view::projects::in_display_order(landing.projects));
    if featured.is_empty() {
        output::note("(no featured projects yet)");
    } else {
        output::lines(&view::projects::table(&featured));
    }

    output::section("Skills");
    if landing.skills.is_empty() {
        output::note("(no skills yet)");
    } else {
        for (category, skills) in view::skills::by_category(landing.skills) {
            let mut block = format!("{category}\n");
            for skill in &skills {
                block.push_str(&view::skills::line(skill));
                block.push('\n');
            }
            output::lines(&block);
        }
    }

    output::section("Experience");
    if landing.experiences.is_empty() {
        output::note("(no experience entries yet)");
    } else {
        let entries: Vec<String> = view::experience::in_display_order(landing.experiences)
            .iter()
            .map(view::experience::entry)
            .collect();
        output::lines(&entries.join("\n"));
    }

    Ok(())
}
