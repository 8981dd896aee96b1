//! Domain layer for the kpsearch plugin.
//!
//! Core types of the password-database model as seen by the results view,
//! independent of Zellij APIs and of how the database was unlocked.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Individual password records
//! - [`group`]: Ordered containers of entries

pub mod entry;
pub mod error;
pub mod group;

pub use entry::Entry;
pub use error::{KpSearchError, Result};
pub use group::Group;
