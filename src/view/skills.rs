//! Skills section rendering.

use std::collections::BTreeMap;

use crate::schema::{sort_for_display, SkillRow};

/// Groups skills by category, each group in display order.
///
/// The map is keyed alphabetically so section order is deterministic run
/// to run.
#[must_use]
pub fn by_category(rows: Vec<SkillRow>) -> BTreeMap<String, Vec<SkillRow>> {
    let mut groups: BTreeMap<String, Vec<SkillRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.category.clone()).or_default().push(row);
    }
    for group in groups.values_mut() {
        sort_for_display(group);
    }
    groups
}

/// Ten-segment proficiency bar. Levels clamp to 0..=100.
#[must_use]
pub fn level_bar(level: i32) -> String {
    let clamped = level.clamp(0, 100);
    let filled = (clamped / 10) as usize;
    format!("{}{} {clamped}%", "█".repeat(filled), "░".repeat(10 - filled))
}

/// One skill line: padded name, bar when a level is set.
#[must_use]
pub fn line(row: &SkillRow) -> String {
    match row.level {
        Some(level) => format!("{:<20} {}", row.name, level_bar(level)),
        None => row.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn skill(name: &str, category: &str, level: Option<i32>, order_index: Option<i32>) -> SkillRow {
        SkillRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            icon_name: None,
            level,
            order_index,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn groups_by_category_in_alphabetical_order() {
        let rows = vec![
            skill("Rust", "Languages", Some(90), Some(1)),
            skill("Docker", "Tools", Some(70), Some(1)),
            skill("Go", "Languages", Some(60), Some(2)),
        ];

        let groups = by_category(rows);
        let categories: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(categories, ["Languages", "Tools"]);
        assert_eq!(groups["Languages"].len(), 2);
        assert_eq!(groups["Languages"][0].name, "Rust");
    }

    #[test]
    fn level_bar_fills_proportionally() {
        assert_eq!(level_bar(80), "████████░░ 80%");
        assert_eq!(level_bar(0), "░░░░░░░░░░ 0%");
        assert_eq!(level_bar(100), "██████████ 100%");
    }

    #[test]
    fn level_bar_clamps_out_of_range_levels() {
        assert_eq!(level_bar(250), level_bar(100));
        assert_eq!(level_bar(-5), level_bar(0));
    }

    #[test]
    fn line_without_level_is_just_the_name() {
        let row = skill("Kubernetes", "Tools", None, None);
        assert_eq!(line(&row), "Kubernetes");
    }
}
