//! Password sign-in against the backend's auth service.
//!
//! Only the password grant is implemented: the admin CLI signs in, keeps the
//! access token for the life of the process and never refreshes it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AuthError, Result};

use super::rest::RestClient;

/// Request body for `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// A signed-in session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

/// The account attached to a session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Error body returned by the auth service. Older deployments use
/// `error`/`error_description`, newer ones `msg`.
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl RestClient {
    /// Exchanges email/password credentials for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        debug!(email, "signing in");

        let response = self
            .authed(self.http().post(self.auth_url("token")))
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: AuthErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let reason = body
                .error_description
                .or(body.msg)
                .or(body.error)
                .unwrap_or_else(|| format!("status {status}"));
            return Err(AuthError::SignInFailed(reason).into());
        }

        Ok(response.json().await?)
    }
}
