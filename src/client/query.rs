//! Read predicates for table requests.
//!
//! The REST dialect encodes everything as query parameters: filters as
//! `column=op.value`, ordering as `order=column.direction`, paging as
//! `limit=n`. [`Query`] accumulates pairs in insertion order so request
//! URLs stay deterministic.

use std::fmt;

/// Sort direction for an `order` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// An ordered collection of filter, ordering and limit parameters.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps rows whose `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Applies an arbitrary operator (`gte`, `like`, `is`, ...) for the
    /// cases without a dedicated helper.
    #[must_use]
    pub fn filter(mut self, column: &str, op: &str, value: impl fmt::Display) -> Self {
        self.params
            .push((column.to_string(), format!("{op}.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.{}", direction.suffix())));
        self
    }

    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    /// True when at least one parameter narrows the row set.
    ///
    /// Ordering and limits do not count; an update guarded only by them
    /// would still touch every row.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.params
            .iter()
            .any(|(key, _)| key != "order" && key != "limit")
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
