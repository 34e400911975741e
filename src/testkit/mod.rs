//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`rows`] — Builders for schema rows so tests focus on assertions
//!   rather than construction boilerplate.
//! - [`content`] — Mock [`ContentSource`](crate::content::ContentSource)
//!   implementations: `ScriptedContent`, `FailingContent`.
//! - [`diagnostics`] — A recording [`Diagnostics`](crate::loader::Diagnostics)
//!   sink for asserting on fallback events.

pub mod content;
pub mod diagnostics;
pub mod rows;
