//! Mock [`ContentSource`] implementations for testing.
//!
//! - [`ScriptedContent`] — Fixed row sets per section, with shared call
//!   counters. Best for: rendering and ordering tests.
//! - [`FailingContent`] — Every fetch fails. Best for: degraded-section
//!   behavior.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::content::ContentSource;
use crate::error::{ApiError, Result};
use crate::schema::{ExperienceRow, ProjectRow, SkillRow};

// ---------------------------------------------------------------------------
// ScriptedContent
// ---------------------------------------------------------------------------

/// A content source returning fixed rows for each section.
#[derive(Default)]
pub struct ScriptedContent {
    projects: Vec<ProjectRow>,
    skills: Vec<SkillRow>,
    experiences: Vec<ExperienceRow>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(mut self, projects: Vec<ProjectRow>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillRow>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_experiences(mut self, experiences: Vec<ExperienceRow>) -> Self {
        self.experiences = experiences;
        self
    }

    /// Shared counter over all three fetch methods.
    pub fn fetch_counter(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for ScriptedContent {
    async fn projects(&self) -> Result<Vec<ProjectRow>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.projects.clone())
    }

    async fn skills(&self) -> Result<Vec<SkillRow>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.skills.clone())
    }

    async fn experiences(&self) -> Result<Vec<ExperienceRow>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.experiences.clone())
    }
}

// ---------------------------------------------------------------------------
// FailingContent
// ---------------------------------------------------------------------------

/// A content source where every fetch fails with a service error.
#[derive(Default)]
pub struct FailingContent;

impl FailingContent {
    fn failure() -> crate::error::Error {
        ApiError::new(503, "service unavailable").into()
    }
}

#[async_trait]
impl ContentSource for FailingContent {
    async fn projects(&self) -> Result<Vec<ProjectRow>> {
        Err(Self::failure())
    }

    async fn skills(&self) -> Result<Vec<SkillRow>> {
        Err(Self::failure())
    }

    async fn experiences(&self) -> Result<Vec<ExperienceRow>> {
        Err(Self::failure())
    }
}
