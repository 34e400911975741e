//! Handler for the `projects` command.

use crate::cli::command::ProjectsArgs;
use crate::cli::output;
use crate::error::Result;
use crate::view;

/// List projects in display order, optionally filtered.
pub async fn execute(args: &ProjectsArgs) -> Result<()> {
    let app = super::boot(&args.config)?;

    let mut rows = view::projects::in_display_order(app.projects().await?);
    if args.featured {
        rows = view::projects::featured_only(rows);
    }
    if let Some(category) = &args.category {
        rows = view::projects::in_category(rows, category);
    }

    if output::is_json() {
        output::json_output(serde_json::to_value(&rows)?);
        return Ok(());
    }

    output::section("Projects");
    if rows.is_empty() {
        if args.featured || args.category.is_some() {
            output::note("(no projects match the filter)");
        } else {
            output::note("(no projects yet)");
        }
        return Ok(());
    }

    output::lines(&view::projects::table(&rows));
    output::field("Total", rows.len());

    Ok(())
}
