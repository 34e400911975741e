//! The `profiles` table: accounts mirrored from the auth service.
//!
//! A profile's `id` equals the auth user's id, so the admin gate is a
//! single keyed lookup after sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Table;

/// A row of `profiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_admin: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl ProfileRow {
    /// Admin flag with the backend's `null` default collapsed to `false`.
    #[must_use]
    pub fn admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }
}

/// Insert shape for `profiles`. The id is required: it ties the row to an
/// auth account.
#[derive(Debug, Clone, Serialize)]
pub struct NewProfile {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Update shape for `profiles`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl ProfilePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.is_admin.is_none()
    }
}

impl Table for ProfileRow {
    const NAME: &'static str = "profiles";
    type Insert = NewProfile;
    type Patch = ProfilePatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_admin_flag_is_not_admin() {
        let json = r#"{
            "id": "a1b2c3d4-0000-4000-8000-000000000007",
            "email": "me@example.com",
            "full_name": null,
            "is_admin": null,
            "created_at": "2024-01-01T00:00:00+00:00"
        }"#;

        let row: ProfileRow = serde_json::from_str(json).unwrap();
        assert!(!row.admin());
    }

    #[test]
    fn admin_flag_reads_through() {
        let json = r#"{
            "id": "a1b2c3d4-0000-4000-8000-000000000008",
            "email": "admin@example.com",
            "full_name": "Site Owner",
            "is_admin": true,
            "created_at": "2024-01-01T00:00:00+00:00"
        }"#;

        let row: ProfileRow = serde_json::from_str(json).unwrap();
        assert!(row.admin());
    }
}
