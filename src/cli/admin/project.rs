//! Admin handlers for projects.

use crate::cli::command::{AdminProjectAddArgs, AdminProjectUpdateArgs};
use crate::cli::output;
use crate::client::Query;
use crate::error::{Error, Result};
use crate::schema::{NewProject, ProjectPatch, ProjectRow, Table};

/// Execute `admin project add`.
pub async fn execute_add(args: &AdminProjectAddArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let mut insert = NewProject::new(args.title.clone(), args.description.clone());
    insert.category = args.category.clone();
    insert.tags = args.tags.clone();
    insert.image_url = args.image_url.clone();
    insert.live_url = args.live_url.clone();
    insert.repo_url = args.repo_url.clone();
    insert.featured = args.featured.then_some(true);
    insert.order_index = args.order;

    let created: Vec<ProjectRow> = authed.insert(&[insert]).await?;
    let row = created.first().ok_or(Error::NotFound {
        table: ProjectRow::NAME,
    })?;

    output::success("Project added");
    output::field("Id", row.id);
    output::field("Title", &row.title);
    if row.is_featured() {
        output::note("featured on the landing page");
    }

    Ok(())
}

/// Execute `admin project update`.
pub async fn execute_update(args: &AdminProjectUpdateArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let patch = ProjectPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        category: args.category.clone(),
        tags: args.tags.clone(),
        image_url: args.image_url.clone(),
        live_url: args.live_url.clone(),
        repo_url: args.repo_url.clone(),
        featured: args.featured,
        order_index: args.order,
    };
    if patch.is_empty() {
        return Err(Error::EmptyPatch {
            table: ProjectRow::NAME,
        });
    }

    let updated: Vec<ProjectRow> = authed
        .update(Query::new().eq("id", args.id), &patch)
        .await?;
    let row = updated.first().ok_or(Error::NotFound {
        table: ProjectRow::NAME,
    })?;

    output::success("Project updated");
    output::field("Id", row.id);
    output::field("Title", &row.title);

    Ok(())
}
