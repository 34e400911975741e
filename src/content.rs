//! Content source port for the list-backed sections.
//!
//! Projects, skills and work history are plain row collections. This trait
//! abstracts where they come from so rendering can be exercised without a
//! live backend.

use async_trait::async_trait;

use crate::client::{Direction, Query, RestClient};
use crate::error::Result;
use crate::schema::{ExperienceRow, ProjectRow, SkillRow};

/// Source of the list-backed page sections.
///
/// Implementations return rows in backend order; display ordering is the
/// renderer's concern.
///
/// # Errors
///
/// Methods return an error when the underlying fetch fails. Callers on the
/// public rendering path degrade to an empty section instead of surfacing
/// the error.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn projects(&self) -> Result<Vec<ProjectRow>>;

    async fn skills(&self) -> Result<Vec<SkillRow>>;

    async fn experiences(&self) -> Result<Vec<ExperienceRow>>;
}

/// [`ContentSource`] backed by the table store.
#[derive(Debug, Clone)]
pub struct RestContentSource {
    client: RestClient,
}

impl RestContentSource {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn ordered() -> Query {
        Query::new().order("order_index", Direction::Ascending)
    }
}

#[async_trait]
impl ContentSource for RestContentSource {
    async fn projects(&self) -> Result<Vec<ProjectRow>> {
        self.client.select(Self::ordered()).await
    }

    async fn skills(&self) -> Result<Vec<SkillRow>> {
        self.client.select(Self::ordered()).await
    }

    async fn experiences(&self) -> Result<Vec<ExperienceRow>> {
        self.client.select(Self::ordered()).await
    }
}
