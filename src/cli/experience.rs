//! Handler for the `experience` command.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::view;

/// List work experience in display order.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let app = super::boot(config_path.as_ref())?;
    let rows = view::experience::in_display_order(app.experiences().await?);

    if output::is_json() {
        output::json_output(serde_json::to_value(&rows)?);
        return Ok(());
    }

    output::section("Experience");
    if rows.is_empty() {
        output::note("(no experience entries yet)");
        return Ok(());
    }

    let entries: Vec<String> = rows.iter().map(view::experience::entry).collect();
    output::lines(&entries.join("\n"));

    Ok(())
}
