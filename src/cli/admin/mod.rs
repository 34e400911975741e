//! Handlers for the `admin` command group.
//!
//! Every admin operation signs in with the password credentials from the
//! environment, then verifies the admin flag on the caller's profile row
//! before touching content. Writes go out with the session token, so the
//! backend's row policies see the signed-in user rather than the anon key.

mod about;
mod avatar;
mod experience;
mod project;
mod skill;

use crate::app::App;
use crate::cli::command::{
    AdminAboutCommand, AdminAvatarCommand, AdminCommand, AdminExperienceCommand,
    AdminProjectCommand, AdminSkillCommand,
};
use crate::cli::output;
use crate::client::{Query, RestClient};
use crate::error::{AuthError, Result};
use crate::schema::ProfileRow;

/// Environment variable holding the admin account email.
pub const ADMIN_EMAIL_VAR: &str = "FOLIO_ADMIN_EMAIL";
/// Environment variable holding the admin account password.
pub const ADMIN_PASSWORD_VAR: &str = "FOLIO_ADMIN_PASSWORD";

/// Route an `admin` subcommand to its handler.
pub async fn dispatch(command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Avatar(cmd) => match cmd {
            AdminAvatarCommand::Show(args) => avatar::execute_show(&args.config).await,
            AdminAvatarCommand::Set(args) => avatar::execute_set(&args).await,
        },
        AdminCommand::About(cmd) => match cmd {
            AdminAboutCommand::Set(args) => about::execute_set(&args).await,
        },
        AdminCommand::Project(cmd) => match cmd {
            AdminProjectCommand::Add(args) => project::execute_add(&args).await,
            AdminProjectCommand::Update(args) => project::execute_update(&args).await,
        },
        AdminCommand::Skill(cmd) => match cmd {
            AdminSkillCommand::Add(args) => skill::execute_add(&args).await,
            AdminSkillCommand::Update(args) => skill::execute_update(&args).await,
        },
        AdminCommand::Experience(cmd) => match cmd {
            AdminExperienceCommand::Add(args) => experience::execute_add(&args).await,
            AdminExperienceCommand::Update(args) => experience::execute_update(&args).await,
        },
    }
}

fn credential(var: &'static str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::MissingCredential { var }.into()),
    }
}

/// Sign in with the operator credentials and verify the admin flag.
///
/// Returns a client that sends the session token on every request.
pub(crate) async fn authenticate(app: &App) -> Result<RestClient> {
    let email = credential(ADMIN_EMAIL_VAR)?;
    let password = credential(ADMIN_PASSWORD_VAR)?;

    let spinner = output::spinner("Signing in...");

    let session = match app.client().sign_in(&email, &password).await {
        Ok(session) => session,
        Err(error) => {
            output::spinner_fail(&spinner, "Sign-in failed");
            return Err(error);
        }
    };

    let authed = app.client().with_access_token(session.access_token.clone());

    let profile: ProfileRow = match authed
        .select_one(Query::new().eq("id", session.user.id))
        .await
    {
        Ok(profile) => profile,
        Err(error) => {
            output::spinner_fail(&spinner, "No profile for the signed-in account");
            return Err(error);
        }
    };

    if !profile.admin() {
        output::spinner_fail(&spinner, "Account is not an admin");
        return Err(AuthError::NotAdmin {
            user_id: session.user.id,
        }
        .into());
    }

    output::spinner_success(&spinner, &format!("Signed in as {email}"));
    Ok(authed)
}
