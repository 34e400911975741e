//! Handler for the `skills` command.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::view;

/// List skills grouped by category.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let app = super::boot(config_path.as_ref())?;
    let rows = app.skills().await?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        output::section("Skills");
        output::note("(no skills yet)");
        return Ok(());
    }

    for (category, skills) in view::skills::by_category(rows) {
        output::section(&category);
        for skill in &skills {
            output::lines(&view::skills::line(skill));
        }
    }

    Ok(())
}
