//! Handler for the `avatar` command.

use std::path::Path;

use serde_json::json;

use crate::cli::output;
use crate::error::Result;
use crate::loader::ConfigOrigin;
use crate::view;

/// Show the avatar presentation and where it came from.
///
/// The one command that surfaces provenance: whether the settings on
/// screen are the remote row or the built-in defaults.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let app = super::boot(config_path.as_ref())?;
    let (avatar, origin) = app.avatar().await;

    if output::is_json() {
        output::json_output(json!({
            "avatar": serde_json::to_value(&avatar)?,
            "origin": serde_json::to_value(origin)?,
        }));
        return Ok(());
    }

    output::section("Avatar");
    output::lines(&view::avatar::avatar(&avatar, &app.config().site.status));
    output::field(
        "Source",
        match origin {
            ConfigOrigin::Remote => "remote configuration",
            ConfigOrigin::Defaults => "built-in defaults",
        },
    );
    if origin == ConfigOrigin::Defaults {
        output::hint("run `folio check connection` if a remote row was expected");
    }

    Ok(())
}
