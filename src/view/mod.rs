//! Pure renderers for the page sections.
//!
//! Every function here maps rows and loader state to plain strings. No
//! network and no global output state; the CLI layer decides color,
//! indentation and destination.

pub mod avatar;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
