//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!(
        "1. Edit {} with your backend URL and anon key",
        path.display()
    ));
    output::note(&format!("2. Run: folio check config -c {}", path.display()));
    output::note(&format!(
        "3. Run: folio check connection -c {}",
        path.display()
    ));
    output::note("4. Run: folio show");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Backend");
    output::field("API URL", &config.backend.api_url);
    if config.backend.api_key.is_empty() {
        output::warning("API key not set");
    } else {
        output::success("API key configured");
    }
    output::field("Timeout", format!("{}s", config.backend.timeout_secs));
    output::field(
        "Connect",
        format!("{}s", config.backend.connect_timeout_secs),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Site");
    output::field("Name", &config.site.name);
    output::field(
        "Headline",
        format!("{} ... {}", config.site.greeting, config.site.headline),
    );
    if config.site.taglines.is_empty() {
        output::field("Taglines", "(none)");
    } else {
        output::field("Taglines", config.site.taglines.join(", "));
    }
    output::field("Status", &config.site.status);

    Ok(())
}
