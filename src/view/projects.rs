//! Project section rendering.

use tabled::{Table, Tabled};

use crate::schema::{sort_for_display, ProjectRow};

#[derive(Tabled)]
struct ProjectLine {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Featured")]
    featured: String,
}

impl From<&ProjectRow> for ProjectLine {
    fn from(row: &ProjectRow) -> Self {
        Self {
            title: row.title.clone(),
            category: row.category.clone().unwrap_or_else(|| "-".to_string()),
            tags: row.tag_list().join(", "),
            featured: if row.is_featured() { "yes" } else { "" }.to_string(),
        }
    }
}

/// Returns `rows` in display order: ascending index, unindexed last.
#[must_use]
pub fn in_display_order(mut rows: Vec<ProjectRow>) -> Vec<ProjectRow> {
    sort_for_display(&mut rows);
    rows
}

/// Keeps featured rows only, preserving relative order.
#[must_use]
pub fn featured_only(rows: Vec<ProjectRow>) -> Vec<ProjectRow> {
    rows.into_iter().filter(ProjectRow::is_featured).collect()
}

/// Keeps rows in `category` only, case-insensitive.
#[must_use]
pub fn in_category(rows: Vec<ProjectRow>, category: &str) -> Vec<ProjectRow> {
    let wanted = category.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
        })
        .collect()
}

/// Renders rows as a table.
#[must_use]
pub fn table(rows: &[ProjectRow]) -> String {
    Table::new(rows.iter().map(ProjectLine::from)).to_string()
}

/// Renders one project as a card.
#[must_use]
pub fn card(row: &ProjectRow) -> String {
    let mut out = format!("{}\n{}\n", row.title, row.description);
    if !row.tag_list().is_empty() {
        out.push_str(&format!("tags: {}\n", row.tag_list().join(", ")));
    }
    if let Some(url) = &row.live_url {
        out.push_str(&format!("live: {url}\n"));
    }
    if let Some(url) = &row.repo_url {
        out.push_str(&format!("code: {url}\n"));
    }
    out
}
