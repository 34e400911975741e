//! Work history rendering.

use chrono::NaiveDate;

use crate::schema::{sort_for_display, ExperienceRow};

/// Returns `rows` in display order: ascending index, unindexed last.
#[must_use]
pub fn in_display_order(mut rows: Vec<ExperienceRow>) -> Vec<ExperienceRow> {
    sort_for_display(&mut rows);
    rows
}

/// `Mar 2022 - Present` style range.
#[must_use]
pub fn date_range(row: &ExperienceRow) -> String {
    let end = match row.end_date {
        Some(date) if !row.is_ongoing() => format_month(date),
        _ => "Present".to_string(),
    };
    format!("{} - {}", format_month(row.start_date), end)
}

fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// One entry as a block of lines.
#[must_use]
pub fn entry(row: &ExperienceRow) -> String {
    let mut out = format!("{} at {}", row.position, row.company_name);
    if let Some(location) = &row.location {
        out.push_str(&format!(" ({location})"));
    }
    out.push('\n');
    out.push_str(&date_range(row));
    out.push('\n');
    if let Some(description) = &row.description {
        out.push_str(description);
        out.push('\n');
    }
    if !row.technology_list().is_empty() {
        out.push_str(&row.technology_list().join(", "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn experience(
        company: &str,
        start: (i32, u32, u32),
        end: Option<(i32, u32, u32)>,
        is_current: Option<bool>,
    ) -> ExperienceRow {
        ExperienceRow {
            id: Uuid::new_v4(),
            company_name: company.to_string(),
            position: "Engineer".to_string(),
            location: None,
            description: None,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: end.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            is_current,
            technologies: None,
            order_index: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn ended_role_renders_both_months() {
        let row = experience("Startup GmbH", (2019, 6, 1), Some((2022, 2, 28)), Some(false));
        assert_eq!(date_range(&row), "Jun 2019 - Feb 2022");
    }

    #[test]
    fn current_role_renders_present() {
        let row = experience("Acme Corp", (2022, 3, 1), None, Some(true));
        assert_eq!(date_range(&row), "Mar 2022 - Present");
    }

    #[test]
    fn current_flag_beats_a_recorded_end_date() {
        let row = experience("Acme Corp", (2022, 3, 1), Some((2024, 1, 1)), Some(true));
        assert_eq!(date_range(&row), "Mar 2022 - Present");
    }

    #[test]
    fn entry_includes_location_when_present() {
        let mut row = experience("Acme Corp", (2022, 3, 1), None, Some(true));
        row.location = Some("Berlin".to_string());
        row.description = Some("Led the platform team.".to_string());
        row.technologies = Some(vec!["rust".to_string(), "postgres".to_string()]);

        let rendered = entry(&row);
        assert!(rendered.contains("Engineer at Acme Corp (Berlin)"));
        assert!(rendered.contains("Led the platform team."));
        assert!(rendered.contains("rust, postgres"));
    }
}
