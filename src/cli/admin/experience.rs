//! Admin handlers for work experience.

use crate::cli::command::{AdminExperienceAddArgs, AdminExperienceUpdateArgs};
use crate::cli::output;
use crate::client::Query;
use crate::error::{Error, Result};
use crate::schema::{ExperiencePatch, ExperienceRow, NewExperience, Table};
use crate::view;

/// Execute `admin experience add`.
pub async fn execute_add(args: &AdminExperienceAddArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let mut insert = NewExperience::new(
        args.company.clone(),
        args.position.clone(),
        args.start_date,
    );
    insert.location = args.location.clone();
    insert.description = args.description.clone();
    insert.end_date = args.end_date;
    insert.is_current = args.current.then_some(true);
    insert.technologies = args.technologies.clone();
    insert.order_index = args.order;

    let created: Vec<ExperienceRow> = authed.insert(&[insert]).await?;
    let row = created.first().ok_or(Error::NotFound {
        table: ExperienceRow::NAME,
    })?;

    output::success("Experience added");
    output::field("Id", row.id);
    output::field(
        "Role",
        format!("{} at {}", row.position, row.company_name),
    );
    output::field("Dates", view::experience::date_range(row));

    Ok(())
}

/// Execute `admin experience update`.
pub async fn execute_update(args: &AdminExperienceUpdateArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let patch = ExperiencePatch {
        company_name: args.company.clone(),
        position: args.position.clone(),
        location: args.location.clone(),
        description: args.description.clone(),
        start_date: args.start_date,
        end_date: args.end_date,
        is_current: args.current,
        technologies: args.technologies.clone(),
        order_index: args.order,
    };
    if patch.is_empty() {
        return Err(Error::EmptyPatch {
            table: ExperienceRow::NAME,
        });
    }

    let updated: Vec<ExperienceRow> = authed
        .update(Query::new().eq("id", args.id), &patch)
        .await?;
    let row = updated.first().ok_or(Error::NotFound {
        table: ExperienceRow::NAME,
    })?;

    output::success("Experience updated");
    output::field("Id", row.id);
    output::field(
        "Role",
        format!("{} at {}", row.position, row.company_name),
    );

    Ok(())
}
