//! Landing page assembly tests.
//!
//! The backend here is a closed local port, so every remote fetch fails
//! fast and the degraded paths are the ones under test.

use std::net::TcpListener;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use folio::app::App;
use folio::config::Config;
use folio::loader::{AboutSection, AvatarConfig, ConfigOrigin};
use folio::testkit::content::{FailingContent, ScriptedContent};
use folio::testkit::rows;

/// A local port with nothing listening on it, so connections are refused
/// immediately instead of timing out.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

fn dead_backend_config() -> Config {
    let mut config = Config::default();
    config.backend.api_url = format!("http://127.0.0.1:{}", closed_port());
    config.backend.api_key = "test-anon-key".to_string();
    config.backend.timeout_secs = 5;
    config.backend.connect_timeout_secs = 1;
    config
}

#[tokio::test]
async fn landing_renders_defaults_when_everything_is_down() {
    let app = App::new(dead_backend_config())
        .expect("wire app")
        .with_content_source(Arc::new(FailingContent));

    let landing = app.landing().await;

    assert_eq!(landing.avatar, AvatarConfig::default());
    assert_eq!(landing.avatar_origin, ConfigOrigin::Defaults);
    assert_eq!(landing.about, AboutSection::default());
    assert_eq!(landing.about_origin, ConfigOrigin::Defaults);
    assert!(landing.projects.is_empty());
    assert!(landing.skills.is_empty());
    assert!(landing.experiences.is_empty());
}

#[tokio::test]
async fn landing_carries_scripted_sections_past_config_failures() {
    let content = ScriptedContent::new()
        .with_projects(vec![rows::project("Orrery", Some(1), true)])
        .with_skills(vec![rows::skill("Rust", "Languages", Some(9), Some(1))])
        .with_experiences(vec![rows::experience(
            "Acme",
            rows::date(2021, 3, 1),
            None,
            Some(1),
        )]);
    let fetches = content.fetch_counter();

    let app = App::new(dead_backend_config())
        .expect("wire app")
        .with_content_source(Arc::new(content));

    let landing = app.landing().await;

    // Config sections degrade independently of the list sections.
    assert_eq!(landing.avatar_origin, ConfigOrigin::Defaults);
    assert_eq!(landing.projects.len(), 1);
    assert_eq!(landing.projects[0].title, "Orrery");
    assert_eq!(landing.skills[0].name, "Rust");
    assert_eq!(landing.experiences[0].company_name, "Acme");
    assert_eq!(fetches.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn avatar_command_reports_the_defaults_origin() {
    let app = App::new(dead_backend_config()).expect("wire app");

    let (avatar, origin) = app.avatar().await;

    assert_eq!(avatar, AvatarConfig::default());
    assert_eq!(origin, ConfigOrigin::Defaults);
}

#[tokio::test]
async fn list_commands_surface_errors_instead_of_degrading() {
    let app = App::new(dead_backend_config())
        .expect("wire app")
        .with_content_source(Arc::new(FailingContent));

    assert!(app.projects().await.is_err());
    assert!(app.skills().await.is_err());
    assert!(app.experiences().await.is_err());
}

#[tokio::test]
async fn app_refuses_an_unconfigured_backend() {
    assert!(App::new(Config::default()).is_err());
}
