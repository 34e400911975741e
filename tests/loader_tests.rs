//! Fallback-behavior tests for the remote configuration loader.
//!
//! These exercise the full mount/load/apply cycle with scripted fetches,
//! so every failure mode can be pinned down without a backend.

use std::sync::Arc;

use folio::error::ApiError;
use folio::loader::{AboutSection, AvatarConfig, ConfigLoader, ConfigOrigin, PLACEHOLDER_AVATAR};
use folio::testkit::diagnostics::{DiagnosticEvent, RecordingDiagnostics};
use folio::testkit::rows;

#[tokio::test]
async fn mounted_handle_renders_defaults_before_any_load() {
    let loader = ConfigLoader::new();
    let handle = loader.mount::<AvatarConfig>();

    assert_eq!(handle.get(), AvatarConfig::default());
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);
    assert!(handle.is_mounted());
}

#[tokio::test]
async fn successful_load_replaces_every_field() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    loader
        .load_with(&handle, async { Ok(Some(rows::avatar_row())) })
        .await;

    let avatar = handle.get();
    assert_eq!(handle.origin(), ConfigOrigin::Remote);
    assert!(!avatar.show_orbital_elements);
    assert_eq!(avatar.orbital_speed_1, 30.0);
    assert_eq!(avatar.orbital_speed_2, 15.0);
    assert!(avatar.show_floating_particles);
    assert!(!avatar.show_animated_border);
    assert_eq!(
        avatar.avatar_url.as_deref(),
        Some("https://cdn.example.com/me.png")
    );
    assert!(recorder.is_empty());
}

#[tokio::test]
async fn fetch_error_keeps_defaults_and_reports() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    loader
        .load_with(&handle, async {
            Err(ApiError::new(500, "internal error").into())
        })
        .await;

    assert_eq!(handle.get(), AvatarConfig::default());
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);
    assert_eq!(
        recorder.events(),
        vec![DiagnosticEvent::FetchFailed {
            table: "avatar_config",
            reason: "backend returned 500: internal error".to_string(),
        }]
    );
}

#[tokio::test]
async fn empty_table_keeps_defaults_and_reports() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    loader.load_with(&handle, async { Ok(None) }).await;

    assert_eq!(handle.get(), AvatarConfig::default());
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);
    assert_eq!(
        recorder.events(),
        vec![DiagnosticEvent::MissingRow {
            table: "avatar_config"
        }]
    );
}

#[tokio::test]
async fn repeated_failures_never_disturb_defaults() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    for _ in 0..3 {
        loader
            .load_with(&handle, async {
                Err(ApiError::new(503, "service unavailable").into())
            })
            .await;
    }

    assert_eq!(handle.get(), AvatarConfig::default());
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);
    assert_eq!(recorder.events().len(), 3);
}

#[tokio::test]
async fn load_after_failure_still_applies() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    loader
        .load_with(&handle, async {
            Err(ApiError::new(500, "internal error").into())
        })
        .await;
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);

    loader
        .load_with(&handle, async { Ok(Some(rows::avatar_row())) })
        .await;

    assert_eq!(handle.origin(), ConfigOrigin::Remote);
    assert_eq!(handle.get().orbital_speed_1, 30.0);
}

#[tokio::test]
async fn later_load_wins_over_earlier() {
    let loader = ConfigLoader::new();
    let handle = loader.mount::<AvatarConfig>();

    loader
        .load_with(&handle, async { Ok(Some(rows::avatar_row())) })
        .await;

    let mut second = rows::avatar_row();
    second.orbital_speed_1 = 45.0;
    second.avatar_url = Some("https://cdn.example.com/other.png".to_string());
    loader.load_with(&handle, async { Ok(Some(second)) }).await;

    let avatar = handle.get();
    assert_eq!(avatar.orbital_speed_1, 45.0);
    assert_eq!(
        avatar.avatar_url.as_deref(),
        Some("https://cdn.example.com/other.png")
    );
}

#[tokio::test]
async fn unmount_discards_a_load_resolving_afterwards() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());
    let handle = loader.mount::<AvatarConfig>();

    let pending = loader.load_with(&handle, async move {
        rx.await.expect("fetch result delivered")
    });

    handle.unmount();
    let _ = tx.send(Ok(Some(rows::avatar_row())));
    pending.await;

    assert!(!handle.is_mounted());
    assert_eq!(handle.get(), AvatarConfig::default());
    assert_eq!(handle.origin(), ConfigOrigin::Defaults);
    assert!(recorder.is_empty());
}

#[tokio::test]
async fn placeholder_portrait_until_a_remote_url_arrives() {
    let loader = ConfigLoader::new();
    let handle = loader.mount::<AvatarConfig>();
    assert_eq!(handle.get().image_url(), PLACEHOLDER_AVATAR);

    loader
        .load_with(&handle, async { Ok(Some(rows::avatar_row())) })
        .await;
    assert_eq!(handle.get().image_url(), "https://cdn.example.com/me.png");
}

#[tokio::test]
async fn about_section_copy_is_replaced_wholesale() {
    let loader = ConfigLoader::new();
    let handle = loader.mount::<AboutSection>();
    assert_eq!(handle.get().title, "About");

    loader
        .load_with(&handle, async {
            Ok(Some(rows::about_row(
                "About Me",
                "Ten years of shipping web things.",
            )))
        })
        .await;

    let about = handle.get();
    assert_eq!(handle.origin(), ConfigOrigin::Remote);
    assert_eq!(about.title, "About Me");
    assert_eq!(about.description, "Ten years of shipping web things.");
    assert!(about.image_url.is_none());
}

#[tokio::test]
async fn diagnostics_name_the_table_that_failed() {
    let recorder = Arc::new(RecordingDiagnostics::new());
    let loader = ConfigLoader::with_diagnostics(recorder.clone());

    let avatar = loader.mount::<AvatarConfig>();
    let about = loader.mount::<AboutSection>();
    loader.load_with(&avatar, async { Ok(None) }).await;
    loader.load_with(&about, async { Ok(None) }).await;

    assert_eq!(
        recorder.events(),
        vec![
            DiagnosticEvent::MissingRow {
                table: "avatar_config"
            },
            DiagnosticEvent::MissingRow {
                table: "about_content"
            },
        ]
    );
}
