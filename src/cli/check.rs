//! Handlers for the `check` command group.

use std::path::Path;
use std::time::Instant;

use crate::cli::output;
use crate::client::RestClient;
use crate::config::Config;
use crate::error::Result;

/// Validate the configuration file without touching the network.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();

    output::section("Configuration Check");
    output::field("Config", path.display());

    let config = Config::load(path)?;
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("API URL", &config.backend.api_url);
    output::field("Timeout", format!("{}s", config.backend.timeout_secs));
    output::field("Log level", &config.logging.level);
    output::field("Site name", &config.site.name);

    if let Err(error) = config.backend.require() {
        output::warning(
            "Backend credentials not configured (set api_url and api_key, or FOLIO_API_URL and FOLIO_API_KEY)",
        );
        return Err(error);
    }
    output::success("Backend credentials present");

    output::success("Configuration check complete");

    Ok(())
}

/// Probe REST connectivity to the backend.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load_or_default(path)?;

    output::section("Connection Check");
    output::field("API URL", &config.backend.api_url);

    let client = RestClient::from_config(&config.backend)?;

    let spinner = output::spinner("Connecting to backend...");
    let started = Instant::now();
    match client.probe().await {
        Ok(()) => {
            let elapsed = started.elapsed();
            output::spinner_success(&spinner, "Backend reachable");
            output::field("Latency", format!("{}ms", elapsed.as_millis()));
            output::hint("run `folio show` to render the portfolio");
            Ok(())
        }
        Err(error) => {
            output::spinner_fail(&spinner, "Connection failed");
            Err(error)
        }
    }
}
