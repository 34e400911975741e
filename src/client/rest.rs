//! HTTP client for the table store's REST dialect.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::BackendConfig;
use crate::error::{ApiError, Error, Result};
use crate::schema::Table;

use super::query::Query;

/// Accept header asking for a lone JSON object instead of a one-element array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for one backend project.
///
/// Cheap to clone; clones share the underlying connection pool. Requests
/// authenticate with the publishable key unless [`RestClient::with_access_token`]
/// swapped in a session token.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl RestClient {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        Self::with_timeouts(
            api_url,
            api_key,
            Duration::from_secs(30),
            Duration::from_secs(10),
        )
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        config.require()?;
        Self::with_timeouts(
            &config.api_url,
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    fn with_timeouts(
        api_url: &str,
        api_key: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        // Reject malformed endpoints at construction, not on first request.
        Url::parse(api_url)?;

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: None,
        })
    }

    /// Returns a clone that sends `token` as the bearer credential.
    ///
    /// The `apikey` header still carries the publishable key; the bearer
    /// token is what moves row-level policies from anonymous to signed-in.
    #[must_use]
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..self.clone()
        }
    }

    pub(super) fn http(&self) -> &Client {
        &self.http
    }

    pub(super) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(super) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub(super) fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        request.header("apikey", &self.api_key).bearer_auth(bearer)
    }

    /// Fetches all rows matching `query`.
    pub async fn select<T: Table>(&self, query: Query) -> Result<Vec<T>> {
        debug!(table = T::NAME, "selecting rows");

        let response = self
            .authed(self.http.get(self.table_url(T::NAME)))
            .query(&[("select", "*")])
            .query(query.params())
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Fetches exactly one row; any other cardinality is an API error.
    pub async fn select_one<T: Table>(&self, query: Query) -> Result<T> {
        debug!(table = T::NAME, "selecting single row");

        let response = self
            .authed(self.http.get(self.table_url(T::NAME)))
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(&[("select", "*")])
            .query(query.params())
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Fetches the first row matching `query`, or `None` when nothing does.
    ///
    /// Appends `limit=1` so the backend never ships more than one row.
    pub async fn select_first<T: Table>(&self, query: Query) -> Result<Option<T>> {
        let rows = self.select::<T>(query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts `rows` and returns the created records.
    pub async fn insert<T: Table>(&self, rows: &[T::Insert]) -> Result<Vec<T>> {
        debug!(table = T::NAME, count = rows.len(), "inserting rows");

        let response = self
            .authed(self.http.post(self.table_url(T::NAME)))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Applies `patch` to every row matching `query` and returns the
    /// updated records.
    ///
    /// Refuses to run without at least one filter, and refuses a patch
    /// that serializes to an empty object.
    pub async fn update<T: Table>(&self, query: Query, patch: &T::Patch) -> Result<Vec<T>> {
        if !query.has_filters() {
            return Err(Error::UnfilteredUpdate { table: T::NAME });
        }

        let body = serde_json::to_value(patch)?;
        if body.as_object().is_some_and(|fields| fields.is_empty()) {
            return Err(Error::EmptyPatch { table: T::NAME });
        }

        debug!(table = T::NAME, "updating rows");

        let response = self
            .authed(self.http.patch(self.table_url(T::NAME)))
            .header("Prefer", "return=representation")
            .query(query.params())
            .json(&body)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Confirms the backend answers authenticated requests at all.
    pub async fn probe(&self) -> Result<()> {
        let response = self
            .authed(self.http.get(format!("{}/rest/v1/", self.base_url)))
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Error body shape used by the REST dialect.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Passes successful responses through, turns failures into [`ApiError`].
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();

    Err(ApiError {
        status: status.as_u16(),
        message: body
            .message
            .unwrap_or_else(|| fallback_message(status, &text)),
        code: body.code,
        details: body.details,
        hint: body.hint,
    }
    .into())
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.chars().take(160).collect()
    }
}
