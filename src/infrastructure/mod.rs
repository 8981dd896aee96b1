//! Sandbox-facing utilities.
//!
//! Zellij plugins see the host filesystem mounted under `/host`; everything
//! here translates between user-facing paths and sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
