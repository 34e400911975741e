//! Command-line interface definitions.
//!
//! Defines the CLI structure for the folio application using `clap`.
//! The CLI supports subcommands for rendering the portfolio, managing
//! configuration, performing diagnostic checks, and editing content
//! through the authenticated admin surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::paths;

/// Terminal-rendered personal portfolio CLI
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the folio CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full landing page (hero, avatar, featured work)
    Show(ConfigPathArg),

    /// List portfolio projects
    Projects(ProjectsArgs),

    /// List skills grouped by category
    Skills(ConfigPathArg),

    /// List work experience, most relevant first
    Experience(ConfigPathArg),

    /// Show the avatar presentation and where it came from
    Avatar(ConfigPathArg),

    /// Initialize configuration interactively
    Init(InitArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Edit portfolio content (requires admin credentials)
    #[command(subcommand)]
    Admin(AdminCommand),
}

/// Subcommands for `folio config`.
///
/// Provides configuration management utilities including generation
/// and display of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
}

/// Subcommands for `folio check`.
///
/// Provides diagnostic commands to verify the configuration and the
/// backend connection before publishing content.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
    /// Test REST connectivity to the backend.
    Connection(ConfigPathArg),
}

/// Subcommands for `folio admin`.
///
/// Every admin command signs in with the credentials from
/// `FOLIO_ADMIN_EMAIL` / `FOLIO_ADMIN_PASSWORD` and requires the
/// signed-in account to carry the admin flag on its profile.
#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Inspect or update the avatar presentation
    #[command(subcommand)]
    Avatar(AdminAvatarCommand),
    /// Update the about section
    #[command(subcommand)]
    About(AdminAboutCommand),
    /// Add or update projects
    #[command(subcommand)]
    Project(AdminProjectCommand),
    /// Add or update skills
    #[command(subcommand)]
    Skill(AdminSkillCommand),
    /// Add or update work experience
    #[command(subcommand)]
    Experience(AdminExperienceCommand),
}

/// Subcommands for `folio admin avatar`.
#[derive(Subcommand, Debug)]
pub enum AdminAvatarCommand {
    /// Show the stored avatar row as the backend sees it.
    Show(ConfigPathArg),
    /// Update avatar settings, creating the row if none exists.
    Set(AdminAvatarSetArgs),
}

/// Subcommands for `folio admin about`.
#[derive(Subcommand, Debug)]
pub enum AdminAboutCommand {
    /// Update the about section fields.
    Set(AdminAboutSetArgs),
}

/// Subcommands for `folio admin project`.
#[derive(Subcommand, Debug)]
pub enum AdminProjectCommand {
    /// Add a new project.
    Add(AdminProjectAddArgs),
    /// Update an existing project by id.
    Update(AdminProjectUpdateArgs),
}

/// Subcommands for `folio admin skill`.
#[derive(Subcommand, Debug)]
pub enum AdminSkillCommand {
    /// Add a new skill.
    Add(AdminSkillAddArgs),
    /// Update an existing skill by id.
    Update(AdminSkillUpdateArgs),
}

/// Subcommands for `folio admin experience`.
#[derive(Subcommand, Debug)]
pub enum AdminExperienceCommand {
    /// Add a new experience entry.
    Add(AdminExperienceAddArgs),
    /// Update an existing experience entry by id.
    Update(AdminExperienceUpdateArgs),
}

/// Shared argument struct for commands that require only a configuration path.
///
/// Provides a reusable argument definition with a default path to the
/// standard configuration file location.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `projects` subcommand.
#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Show only featured projects.
    #[arg(long)]
    pub featured: bool,

    /// Filter by category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the `config init` subcommand.
///
/// Controls configuration file generation from the built-in template.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the interactive `init` command.
///
/// Controls the interactive configuration wizard that guides users through
/// initial setup.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `admin avatar set`.
///
/// Every field is optional; only the provided fields are written. Boolean
/// switches take an explicit value (`--orbital-elements false`).
#[derive(Parser, Debug)]
pub struct AdminAvatarSetArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Portrait image URL.
    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Outer orbital period in seconds.
    #[arg(long)]
    pub orbital_speed_1: Option<f64>,

    /// Inner orbital period in seconds.
    #[arg(long)]
    pub orbital_speed_2: Option<f64>,

    /// Toggle the orbital decorations.
    #[arg(long, value_name = "BOOL")]
    pub orbital_elements: Option<bool>,

    /// Toggle the floating particles.
    #[arg(long, value_name = "BOOL")]
    pub floating_particles: Option<bool>,

    /// Toggle the animated border ring.
    #[arg(long, value_name = "BOOL")]
    pub animated_border: Option<bool>,

    /// Create the row without prompting when none exists.
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for `admin about set`.
#[derive(Parser, Debug)]
pub struct AdminAboutSetArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Section title.
    #[arg(long)]
    pub title: Option<String>,

    /// Section body text.
    #[arg(long)]
    pub description: Option<String>,

    /// Illustration image URL.
    #[arg(long)]
    pub image_url: Option<String>,
}

/// Arguments for `admin project add`.
#[derive(Parser, Debug)]
pub struct AdminProjectAddArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Project title.
    #[arg(long)]
    pub title: String,

    /// Short project description.
    #[arg(long)]
    pub description: String,

    /// Category label (e.g. "web", "infra").
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated technology tags.
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Screenshot or cover image URL.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Live deployment URL.
    #[arg(long)]
    pub live_url: Option<String>,

    /// Source repository URL.
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Feature this project on the landing page.
    #[arg(long)]
    pub featured: bool,

    /// Display position (lower sorts first).
    #[arg(long)]
    pub order: Option<i32>,
}

/// Arguments for `admin project update`.
#[derive(Parser, Debug)]
pub struct AdminProjectUpdateArgs {
    /// Id of the project to update.
    pub id: Uuid,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Project title.
    #[arg(long)]
    pub title: Option<String>,

    /// Short project description.
    #[arg(long)]
    pub description: Option<String>,

    /// Category label.
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated technology tags (replaces the existing list).
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Screenshot or cover image URL.
    #[arg(long)]
    pub image_url: Option<String>,

    /// Live deployment URL.
    #[arg(long)]
    pub live_url: Option<String>,

    /// Source repository URL.
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Toggle the featured flag.
    #[arg(long, value_name = "BOOL")]
    pub featured: Option<bool>,

    /// Display position (lower sorts first).
    #[arg(long)]
    pub order: Option<i32>,
}

/// Arguments for `admin skill add`.
#[derive(Parser, Debug)]
pub struct AdminSkillAddArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Skill name.
    #[arg(long)]
    pub name: String,

    /// Category the skill is grouped under.
    #[arg(long)]
    pub category: String,

    /// Proficiency from 0 to 100.
    #[arg(long)]
    pub level: Option<i32>,

    /// Icon identifier used by renderers.
    #[arg(long)]
    pub icon: Option<String>,

    /// Display position within the category.
    #[arg(long)]
    pub order: Option<i32>,
}

/// Arguments for `admin skill update`.
#[derive(Parser, Debug)]
pub struct AdminSkillUpdateArgs {
    /// Id of the skill to update.
    pub id: Uuid,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Skill name.
    #[arg(long)]
    pub name: Option<String>,

    /// Category the skill is grouped under.
    #[arg(long)]
    pub category: Option<String>,

    /// Proficiency from 0 to 100.
    #[arg(long)]
    pub level: Option<i32>,

    /// Icon identifier used by renderers.
    #[arg(long)]
    pub icon: Option<String>,

    /// Display position within the category.
    #[arg(long)]
    pub order: Option<i32>,
}

/// Arguments for `admin experience add`.
#[derive(Parser, Debug)]
pub struct AdminExperienceAddArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Employer or client name.
    #[arg(long)]
    pub company: String,

    /// Role title.
    #[arg(long)]
    pub position: String,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: NaiveDate,

    /// End date (YYYY-MM-DD); omit for ongoing roles.
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Mark the role as current.
    #[arg(long)]
    pub current: bool,

    /// Location, e.g. "Berlin" or "Remote".
    #[arg(long)]
    pub location: Option<String>,

    /// Role summary.
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated technologies used.
    #[arg(long, value_delimiter = ',')]
    pub technologies: Option<Vec<String>>,

    /// Display position (lower sorts first).
    #[arg(long)]
    pub order: Option<i32>,
}

/// Arguments for `admin experience update`.
#[derive(Parser, Debug)]
pub struct AdminExperienceUpdateArgs {
    /// Id of the experience entry to update.
    pub id: Uuid,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Employer or client name.
    #[arg(long)]
    pub company: Option<String>,

    /// Role title.
    #[arg(long)]
    pub position: Option<String>,

    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Toggle the current-role flag.
    #[arg(long, value_name = "BOOL")]
    pub current: Option<bool>,

    /// Location, e.g. "Berlin" or "Remote".
    #[arg(long)]
    pub location: Option<String>,

    /// Role summary.
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated technologies used (replaces the existing list).
    #[arg(long, value_delimiter = ',')]
    pub technologies: Option<Vec<String>>,

    /// Display position (lower sorts first).
    #[arg(long)]
    pub order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_projects_filters() {
        let cli = Cli::try_parse_from([
            "folio",
            "projects",
            "--featured",
            "--category",
            "web",
        ])
        .unwrap();

        match cli.command {
            Commands::Projects(args) => {
                assert!(args.featured);
                assert_eq!(args.category.as_deref(), Some("web"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_admin_avatar_set_booleans() {
        let cli = Cli::try_parse_from([
            "folio",
            "admin",
            "avatar",
            "set",
            "--orbital-elements",
            "false",
            "--orbital-speed-1",
            "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Admin(AdminCommand::Avatar(AdminAvatarCommand::Set(args))) => {
                assert_eq!(args.orbital_elements, Some(false));
                assert_eq!(args.orbital_speed_1, Some(30.0));
                assert_eq!(args.animated_border, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_comma_separated_tags() {
        let cli = Cli::try_parse_from([
            "folio",
            "admin",
            "project",
            "add",
            "--title",
            "Folio",
            "--description",
            "Portfolio CLI",
            "--tags",
            "rust,tokio,postgrest",
        ])
        .unwrap();

        match cli.command {
            Commands::Admin(AdminCommand::Project(AdminProjectCommand::Add(args))) => {
                assert_eq!(
                    args.tags,
                    Some(vec![
                        "rust".to_string(),
                        "tokio".to_string(),
                        "postgrest".to_string()
                    ])
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from(["folio", "skills", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 1);
    }
}
