//! Folio - a terminal-rendered personal portfolio backed by a hosted table store.
//!
//! This crate renders a personal landing page (hero, avatar, projects, skills,
//! experience) from rows in a PostgREST-style backend, with typed fallbacks so
//! the page always renders even when the backend is down.
//!
//! # Architecture
//!
//! The core mechanism is defaults-first remote configuration:
//!
//! - **`loader`** - Mounts typed defaults immediately, then replaces them
//!   wholesale when the remote row arrives. Every failure mode keeps the
//!   defaults; rendering never waits on the network and never sees an error.
//! - **`client`** - Minimal PostgREST dialect client: keyed filters, ordering,
//!   single-object reads, representation-returning writes, password sign-in.
//! - **`schema`** - One row/insert/patch triple per backend table, bound by
//!   the [`schema::Table`] trait.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`client`] - REST and auth client for the table store
//! - [`schema`] - Typed table shapes shared by reads and writes
//! - [`loader`] - Remote configuration loading with safe fallback
//! - [`content`] - List-section fetching behind a swappable source
//! - [`view`] - Pure renderers from resolved state to text
//! - [`app`] - Application wiring: configuration in, resolved sections out
//! - [`cli`] - Command-line surface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use folio::loader::{AvatarConfig, ConfigLoader};
//!
//! let loader = ConfigLoader::new();
//! let handle = loader.mount::<AvatarConfig>();
//! assert!(handle.is_mounted());
//! ```

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod loader;
pub mod schema;
pub mod view;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
