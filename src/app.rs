//! Application wiring: configuration in, resolved page sections out.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::client::RestClient;
use crate::config::Config;
use crate::content::{ContentSource, RestContentSource};
use crate::error::Result;
use crate::loader::{AboutSection, AvatarConfig, ConfigLoader, ConfigOrigin};
use crate::schema::{ExperienceRow, ProjectRow, SkillRow};

/// Everything the landing page needs, fully resolved.
///
/// Assembling one never fails: configurable sections fall back to their
/// defaults, list sections to empty.
#[derive(Debug, Clone, Serialize)]
pub struct Landing {
    pub avatar: AvatarConfig,
    pub avatar_origin: ConfigOrigin,
    pub about: AboutSection,
    pub about_origin: ConfigOrigin,
    pub projects: Vec<ProjectRow>,
    pub skills: Vec<SkillRow>,
    pub experiences: Vec<ExperienceRow>,
}

/// A configured client, the loader and a content source, wired together.
pub struct App {
    config: Config,
    client: RestClient,
    loader: ConfigLoader,
    content: Arc<dyn ContentSource>,
}

impl App {
    /// Wires the application. Fails when the backend section is incomplete.
    pub fn new(config: Config) -> Result<Self> {
        let client = RestClient::from_config(&config.backend)?;
        let content = Arc::new(RestContentSource::new(client.clone()));
        Ok(Self {
            config,
            client,
            loader: ConfigLoader::new(),
            content,
        })
    }

    /// Replaces the content source behind the list sections.
    #[must_use]
    pub fn with_content_source(mut self, content: Arc<dyn ContentSource>) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn client(&self) -> &RestClient {
        &self.client
    }

    #[must_use]
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Assembles the landing page, fetching every section concurrently.
    pub async fn landing(&self) -> Landing {
        let avatar = self.loader.mount::<AvatarConfig>();
        let about = self.loader.mount::<AboutSection>();

        let ((), (), projects, skills, experiences) = tokio::join!(
            self.loader.load(&avatar, &self.client),
            self.loader.load(&about, &self.client),
            self.content.projects(),
            self.content.skills(),
            self.content.experiences(),
        );

        Landing {
            avatar: avatar.get(),
            avatar_origin: avatar.origin(),
            about: about.get(),
            about_origin: about.origin(),
            projects: section_or_empty("projects", projects),
            skills: section_or_empty("skills", skills),
            experiences: section_or_empty("experiences", experiences),
        }
    }

    /// Loads just the avatar configuration and reports where it came from.
    pub async fn avatar(&self) -> (AvatarConfig, ConfigOrigin) {
        let handle = self.loader.mount::<AvatarConfig>();
        self.loader.load(&handle, &self.client).await;
        (handle.get(), handle.origin())
    }

    /// Fetches the full project list in stored order.
    ///
    /// Unlike [`App::landing`], the list commands surface fetch errors
    /// instead of degrading to an empty section.
    pub async fn projects(&self) -> Result<Vec<ProjectRow>> {
        self.content.projects().await
    }

    /// Fetches the full skill list in stored order.
    pub async fn skills(&self) -> Result<Vec<SkillRow>> {
        self.content.skills().await
    }

    /// Fetches the full experience list in stored order.
    pub async fn experiences(&self) -> Result<Vec<ExperienceRow>> {
        self.content.experiences().await
    }
}

fn section_or_empty<T>(section: &'static str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(error) => {
            warn!(section, error = %error, "section unavailable, rendering empty");
            Vec::new()
        }
    }
}
