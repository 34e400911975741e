//! Command-line interface module graph.

pub mod admin;
pub mod avatar;
pub mod check;
pub mod command;
pub mod config;
pub mod experience;
pub mod init;
pub mod output;
pub mod paths;
pub mod projects;
pub mod show;
pub mod skills;

use std::path::Path;

pub use command::{Cli, Commands};

use crate::app::App;
use crate::error::Result;

/// Load configuration for a CLI run, honoring the global output flags.
///
/// `-v` raises the log level to debug, `-q` lowers it to warn. An explicit
/// `RUST_LOG` still wins over both.
fn load_config(path: &Path) -> Result<crate::config::Config> {
    let mut config = crate::config::Config::load_or_default(path)?;
    if output::verbosity() > 0 {
        config.logging.level = "debug".to_string();
    } else if output::is_quiet() {
        config.logging.level = "warn".to_string();
    }
    Ok(config)
}

/// Build the application for a data-fetching command.
///
/// Initializes logging as a side effect, so call at most once per process.
fn boot(path: &Path) -> Result<App> {
    let config = load_config(path)?;
    config.init_logging();
    App::new(config)
}

/// Execute a parsed CLI invocation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show(args) => show::execute(&args.config).await,
        Commands::Projects(args) => projects::execute(&args).await,
        Commands::Skills(args) => skills::execute(&args.config).await,
        Commands::Experience(args) => experience::execute(&args.config).await,
        Commands::Avatar(args) => avatar::execute(&args.config).await,
        Commands::Init(args) => init::execute(args.path, args.force).await,
        Commands::Config(cmd) => match cmd {
            command::ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
            command::ConfigCommand::Show(args) => config::execute_show(&args.config),
        },
        Commands::Check(cmd) => match cmd {
            command::CheckCommand::Config(args) => check::execute_config(&args.config),
            command::CheckCommand::Connection(args) => {
                check::execute_connection(&args.config).await
            }
        },
        Commands::Admin(cmd) => admin::dispatch(cmd).await,
    }
}
