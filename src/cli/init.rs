//! Interactive setup wizard.
//!
//! Guides users through complete folio setup: backend endpoint and key,
//! static site copy, and logging preferences, with an optional connection
//! probe before anything is written.

use std::fs;
use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::client::RestClient;
use crate::error::{ConfigError, Result};

/// Default config template used by the setup wizard.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Run the interactive setup wizard.
pub async fn execute(path: PathBuf, force: bool) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`folio init` is interactive; use `folio config init` for scripted setup"
                .to_string(),
        }
        .into());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    println!();
    output::note("Welcome to folio. Let's get you set up.");
    println!();

    let theme = ColorfulTheme::default();

    // ─────────────────────────────────────────────────────────────────────────
    // Backend
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Backend");

    let api_url: String = Input::with_theme(&theme)
        .with_prompt("Backend URL (https://<project>.supabase.co)")
        .interact()?;

    let api_key: String = Input::with_theme(&theme)
        .with_prompt("Publishable anon key")
        .interact()?;

    let verify = Confirm::with_theme(&theme)
        .with_prompt("Verify the connection now?")
        .default(true)
        .interact()?;

    if verify {
        let client = RestClient::new(&api_url, &api_key)?;
        let spinner = output::spinner("Probing backend...");
        match client.probe().await {
            Ok(()) => output::spinner_success(&spinner, "Backend reachable"),
            Err(error) => {
                output::spinner_fail(&spinner, "Backend not reachable");
                output::note(&error.to_string());
                let keep = Confirm::with_theme(&theme)
                    .with_prompt("Keep these settings anyway?")
                    .default(true)
                    .interact()?;
                if !keep {
                    output::note("Setup aborted.");
                    return Ok(());
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Site Copy
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Site");

    let name: String = Input::with_theme(&theme)
        .with_prompt("Your name")
        .default("Your Name".to_string())
        .interact()?;

    let greeting: String = Input::with_theme(&theme)
        .with_prompt("Greeting")
        .default("Hi, I'm".to_string())
        .interact()?;

    let headline: String = Input::with_theme(&theme)
        .with_prompt("Headline")
        .default("Full-Stack Developer".to_string())
        .interact()?;

    let taglines: String = Input::with_theme(&theme)
        .with_prompt("Taglines (comma-separated)")
        .default("Clean code, Fast delivery, Scalable solutions".to_string())
        .interact()?;

    let intro: String = Input::with_theme(&theme)
        .with_prompt("Short intro paragraph")
        .allow_empty(true)
        .interact()?;

    let status: String = Input::with_theme(&theme)
        .with_prompt("Status badge")
        .default("Available for hire".to_string())
        .interact()?;

    // ─────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Logging");

    let formats = &["pretty (for terminals)", "json (for log collectors)"];
    let format = Select::with_theme(&theme)
        .with_prompt("Log format")
        .items(formats)
        .default(0)
        .interact()?;
    let log_format = if format == 0 { "pretty" } else { "json" };

    // ─────────────────────────────────────────────────────────────────────────
    // Generate & Write Config
    // ─────────────────────────────────────────────────────────────────────────

    println!();
    let spinner = output::spinner("Writing configuration...");

    if path.exists() && !force {
        output::spinner_fail(&spinner, "Config already exists");
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            output::note("Setup aborted.");
            return Ok(());
        }
    }

    let config = generate_config(
        &api_url,
        &api_key,
        &SiteAnswers {
            name,
            greeting,
            headline,
            taglines,
            intro,
            status,
        },
        log_format,
    )?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, config)?;

    output::spinner_success(&spinner, "Configuration saved");

    // ─────────────────────────────────────────────────────────────────────────
    // Summary
    // ─────────────────────────────────────────────────────────────────────────

    output::section("Ready");

    output::success(&format!("Config   {}", path.display()));
    output::success(&format!("Backend  {api_url}"));

    println!();
    output::section("Next Steps");

    output::note(&format!(
        "1. Verify: {}",
        output::highlight(format!("folio check connection -c {}", path.display()))
    ));
    output::note(&format!("2. Render: {}", output::highlight("folio show")));
    output::note(&format!(
        "3. Publish content: {}",
        output::highlight("folio admin --help")
    ));

    Ok(())
}

/// Site copy collected by the wizard.
struct SiteAnswers {
    name: String,
    greeting: String,
    headline: String,
    taglines: String,
    intro: String,
    status: String,
}

fn generate_config(
    api_url: &str,
    api_key: &str,
    site: &SiteAnswers,
    log_format: &str,
) -> Result<String> {
    let mut config: toml::Value = toml::from_str(CONFIG_TEMPLATE).map_err(ConfigError::Parse)?;
    let table = config.as_table_mut().ok_or_else(|| {
        ConfigError::Other("config template root must be a TOML table".to_string())
    })?;

    if let Some(backend) = table.get_mut("backend").and_then(toml::Value::as_table_mut) {
        backend.insert(
            "api_url".to_string(),
            toml::Value::String(api_url.to_string()),
        );
        backend.insert(
            "api_key".to_string(),
            toml::Value::String(api_key.to_string()),
        );
    }

    if let Some(logging) = table.get_mut("logging").and_then(toml::Value::as_table_mut) {
        logging.insert(
            "format".to_string(),
            toml::Value::String(log_format.to_string()),
        );
    }

    if let Some(site_table) = table.get_mut("site").and_then(toml::Value::as_table_mut) {
        site_table.insert("name".to_string(), toml::Value::String(site.name.clone()));
        site_table.insert(
            "greeting".to_string(),
            toml::Value::String(site.greeting.clone()),
        );
        site_table.insert(
            "headline".to_string(),
            toml::Value::String(site.headline.clone()),
        );
        site_table.insert(
            "taglines".to_string(),
            toml::Value::Array(
                site.taglines
                    .split(',')
                    .map(str::trim)
                    .filter(|tagline| !tagline.is_empty())
                    .map(|tagline| toml::Value::String(tagline.to_string()))
                    .collect(),
            ),
        );
        site_table.insert("intro".to_string(), toml::Value::String(site.intro.clone()));
        site_table.insert(
            "status".to_string(),
            toml::Value::String(site.status.clone()),
        );
    }

    toml::to_string_pretty(&config).map_err(|error| ConfigError::Other(error.to_string()).into())
}
