//! Builders for schema rows used across tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::schema::{
    AboutContentRow, AvatarConfigRow, ExperienceRow, ProfileRow, ProjectRow, SkillRow,
};

/// A fixed timestamp so row equality assertions are deterministic.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().unwrap()
}

/// An avatar row that differs from every built-in default, so tests can
/// tell a wholesale replacement from a partial one.
pub fn avatar_row() -> AvatarConfigRow {
    AvatarConfigRow {
        id: Uuid::new_v4(),
        avatar_url: Some("https://cdn.example.com/me.png".to_string()),
        orbital_speed_1: 30.0,
        orbital_speed_2: 15.0,
        show_animated_border: false,
        show_floating_particles: true,
        show_orbital_elements: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// An about row with the given copy.
pub fn about_row(title: &str, description: &str) -> AboutContentRow {
    AboutContentRow {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: None,
        updated_at: fixed_time(),
    }
}

/// A project row with the fields tests typically branch on.
pub fn project(title: &str, order_index: Option<i32>, featured: bool) -> ProjectRow {
    ProjectRow {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        category: Some("web".to_string()),
        tags: Some(vec!["rust".to_string()]),
        image_url: None,
        live_url: None,
        repo_url: None,
        featured: Some(featured),
        order_index,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// A skill row in the given category.
pub fn skill(name: &str, category: &str, level: Option<i32>, order_index: Option<i32>) -> SkillRow {
    SkillRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        icon_name: None,
        level,
        order_index,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// An experience row; `end` of `None` reads as an ongoing role.
pub fn experience(
    company: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    order_index: Option<i32>,
) -> ExperienceRow {
    ExperienceRow {
        id: Uuid::new_v4(),
        company_name: company.to_string(),
        position: "Engineer".to_string(),
        location: None,
        description: None,
        start_date: start,
        end_date: end,
        is_current: Some(end.is_none()),
        technologies: None,
        order_index,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// A profile row with the admin flag set as given.
pub fn profile(is_admin: Option<bool>) -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        email: Some("owner@example.com".to_string()),
        full_name: Some("Site Owner".to_string()),
        is_admin,
        created_at: fixed_time(),
    }
}

/// A calendar date, for experience ranges.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
