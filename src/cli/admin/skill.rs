//! Admin handlers for skills.

use crate::cli::command::{AdminSkillAddArgs, AdminSkillUpdateArgs};
use crate::cli::output;
use crate::client::Query;
use crate::error::{Error, Result};
use crate::schema::{NewSkill, SkillPatch, SkillRow, Table};

/// Execute `admin skill add`.
pub async fn execute_add(args: &AdminSkillAddArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let mut insert = NewSkill::new(args.name.clone(), args.category.clone());
    insert.icon_name = args.icon.clone();
    insert.level = args.level;
    insert.order_index = args.order;

    let created: Vec<SkillRow> = authed.insert(&[insert]).await?;
    let row = created.first().ok_or(Error::NotFound {
        table: SkillRow::NAME,
    })?;

    output::success("Skill added");
    output::field("Id", row.id);
    output::field("Name", format!("{} ({})", row.name, row.category));

    Ok(())
}

/// Execute `admin skill update`.
pub async fn execute_update(args: &AdminSkillUpdateArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let patch = SkillPatch {
        name: args.name.clone(),
        category: args.category.clone(),
        icon_name: args.icon.clone(),
        level: args.level,
        order_index: args.order,
    };
    if patch.is_empty() {
        return Err(Error::EmptyPatch {
            table: SkillRow::NAME,
        });
    }

    let updated: Vec<SkillRow> = authed
        .update(Query::new().eq("id", args.id), &patch)
        .await?;
    let row = updated.first().ok_or(Error::NotFound {
        table: SkillRow::NAME,
    })?;

    output::success("Skill updated");
    output::field("Id", row.id);
    output::field("Name", format!("{} ({})", row.name, row.category));

    Ok(())
}
