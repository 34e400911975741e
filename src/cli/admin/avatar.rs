//! Admin handlers for the avatar presentation row.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::command::AdminAvatarSetArgs;
use crate::cli::output;
use crate::client::{Direction, Query};
use crate::error::{Error, Result};
use crate::schema::{AvatarConfigPatch, AvatarConfigRow, NewAvatarConfig, Table};

/// The loader reads the oldest row; the admin surface edits the same one.
fn canonical_row_query() -> Query {
    Query::new().order("created_at", Direction::Ascending)
}

/// Execute `admin avatar show`.
pub async fn execute_show(config_path: &Path) -> Result<()> {
    let app = super::super::boot(config_path)?;
    let authed = super::authenticate(&app).await?;

    let row: Option<AvatarConfigRow> = authed.select_first(canonical_row_query()).await?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&row)?);
        return Ok(());
    }

    output::section("Stored Avatar Row");
    match row {
        Some(row) => {
            output::field("Id", row.id);
            output::field("Image", row.avatar_url.as_deref().unwrap_or("(none)"));
            output::field("Orbital elements", row.show_orbital_elements);
            output::field("Outer period", format!("{}s", row.orbital_speed_1));
            output::field("Inner period", format!("{}s", row.orbital_speed_2));
            output::field("Particles", row.show_floating_particles);
            output::field("Border", row.show_animated_border);
            output::field("Updated", row.updated_at.to_rfc3339());
        }
        None => {
            output::note("(no row; the page renders built-in defaults)");
            output::hint("run `folio admin avatar set` to create one");
        }
    }

    Ok(())
}

/// Execute `admin avatar set`.
///
/// Updates the canonical row in place, or creates it when the table is
/// still empty.
pub async fn execute_set(args: &AdminAvatarSetArgs) -> Result<()> {
    let app = super::super::boot(&args.config)?;
    let authed = super::authenticate(&app).await?;

    let existing: Option<AvatarConfigRow> = authed.select_first(canonical_row_query()).await?;

    match existing {
        Some(row) => {
            let patch = AvatarConfigPatch {
                avatar_url: args.avatar_url.clone(),
                orbital_speed_1: args.orbital_speed_1,
                orbital_speed_2: args.orbital_speed_2,
                show_animated_border: args.animated_border,
                show_floating_particles: args.floating_particles,
                show_orbital_elements: args.orbital_elements,
            };
            if patch.is_empty() {
                return Err(Error::EmptyPatch {
                    table: AvatarConfigRow::NAME,
                });
            }

            let updated: Vec<AvatarConfigRow> = authed
                .update(Query::new().eq("id", row.id), &patch)
                .await?;
            let row = updated.first().ok_or(Error::NotFound {
                table: AvatarConfigRow::NAME,
            })?;

            output::success("Avatar configuration updated");
            output::field("Id", row.id);
        }
        None => {
            if !args.yes && !confirm_create()? {
                output::note("Nothing written.");
                return Ok(());
            }

            let insert = NewAvatarConfig {
                id: None,
                avatar_url: args.avatar_url.clone(),
                orbital_speed_1: args.orbital_speed_1,
                orbital_speed_2: args.orbital_speed_2,
                show_animated_border: args.animated_border,
                show_floating_particles: args.floating_particles,
                show_orbital_elements: args.orbital_elements,
            };
            let created: Vec<AvatarConfigRow> = authed.insert(&[insert]).await?;
            let row = created.first().ok_or(Error::NotFound {
                table: AvatarConfigRow::NAME,
            })?;

            output::success("Avatar configuration created");
            output::field("Id", row.id);
        }
    }

    output::hint("run `folio avatar` to see the resolved presentation");
    Ok(())
}

fn confirm_create() -> Result<bool> {
    if output::is_json() {
        // Scripted runs must opt in explicitly.
        return Ok(false);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("No avatar row exists. Create one with these settings?")
        .default(true)
        .interact()?;
    Ok(confirmed)
}
