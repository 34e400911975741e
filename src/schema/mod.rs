//! Typed bindings for the content tables.
//!
//! Every table binds three shapes:
//! - a row shape, the full record as selects return it,
//! - an insert shape, where required columns are mandatory and columns with
//!   server-side defaults may be omitted,
//! - a patch shape, where every column is optional and an absent field means
//!   "leave unchanged".
//!
//! Server-managed timestamps (`created_at`, `updated_at`) never appear in
//! insert or patch shapes.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod about;
pub mod avatar;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;

pub use about::{AboutContentPatch, AboutContentRow, NewAboutContent};
pub use avatar::{AvatarConfigPatch, AvatarConfigRow, NewAvatarConfig};
pub use experience::{ExperiencePatch, ExperienceRow, NewExperience};
pub use profile::{NewProfile, ProfilePatch, ProfileRow};
pub use project::{NewProject, ProjectPatch, ProjectRow};
pub use skill::{NewSkill, SkillPatch, SkillRow};

/// Compile-time binding between a table name and its three shapes.
///
/// Implemented by row types, so the row named in a call like
/// `client.select::<ProjectRow>(query)` pins the table, the response shape
/// and the accepted write shapes all at once.
pub trait Table: DeserializeOwned + Serialize + Send + Sync + Sized + 'static {
    /// Table name as it appears in the REST path (`rest/v1/{NAME}`).
    const NAME: &'static str;

    /// Shape accepted on insert.
    type Insert: Serialize + Send + Sync;

    /// Shape accepted on update.
    type Patch: Serialize + Send + Sync;
}

/// Rows that carry a manual display position.
pub trait DisplayOrdered {
    /// Position within the section. `None` sorts after every indexed row.
    fn display_index(&self) -> Option<i32>;
}

/// Sorts rows ascending by display index, unindexed rows last.
///
/// The sort is stable, so rows sharing an index keep their fetch order.
pub fn sort_for_display<T: DisplayOrdered>(rows: &mut [T]) {
    rows.sort_by_key(|row| row.display_index().unwrap_or(i32::MAX));
}
