//! Typed client for the hosted table store.
//!
//! [`RestClient`] speaks the backend's REST dialect: each table is a
//! `rest/v1/{table}` resource, filters travel as query parameters and the
//! publishable key rides along on every request. [`Query`] builds the
//! parameters; the row types in [`crate::schema`] pin the table name and
//! response shape at compile time.

mod auth;
mod query;
mod rest;

pub use auth::{Session, SessionUser};
pub use query::{Direction, Query};
pub use rest::RestClient;
