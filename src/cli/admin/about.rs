//! Admin handler for the about section.

use crate::cli::command::AdminAboutSetArgs;
use crate::cli::output;
use crate::client::{Direction, Query};
use crate::error::{ConfigError, Error, Result};
use crate::schema::{AboutContentPatch, AboutContentRow, NewAboutContent, Table};

/// Execute `admin about set`.
///
/// Updates the freshest about row, matching the one the page renders.
/// The first write creates the row and needs both title and description.
pub async fn execute_set(args: &AdminAboutSetArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let existing: Option<AboutContentRow> = authed
        .select_first(Query::new().order("updated_at", Direction::Descending))
        .await?;

    match existing {
        Some(row) => {
            let patch = AboutContentPatch {
                title: args.title.clone(),
                description: args.description.clone(),
                image_url: args.image_url.clone(),
            };
            if patch.is_empty() {
                return Err(Error::EmptyPatch {
                    table: AboutContentRow::NAME,
                });
            }

            let updated: Vec<AboutContentRow> = authed
                .update(Query::new().eq("id", row.id), &patch)
                .await?;
            let row = updated.first().ok_or(Error::NotFound {
                table: AboutContentRow::NAME,
            })?;

            output::success("About section updated");
            output::field("Title", &row.title);
        }
        None => {
            let (Some(title), Some(description)) = (&args.title, &args.description) else {
                return Err(ConfigError::InvalidValue {
                    field: "about",
                    reason: "--title and --description are required to create the first about row"
                        .to_string(),
                }
                .into());
            };

            let mut insert = NewAboutContent::new(title.clone(), description.clone());
            insert.image_url = args.image_url.clone();

            let created: Vec<AboutContentRow> = authed.insert(&[insert]).await?;
            let row = created.first().ok_or(Error::NotFound {
                table: AboutContentRow::NAME,
            })?;

            output::success("About section created");
            output::field("Title", &row.title);
        }
    }

    Ok(())
}
