//! Path handling for the Zellij plugin sandbox.
//!
//! `/host` points at the cwd of the last focused terminal, or the folder
//! Zellij was started from. When Zellij starts from a home directory this is
//! the user's home, which is why `~` maps onto it.

use std::path::PathBuf;

/// Directory holding the trace file.
///
/// ```
/// use kpsearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/kpsearch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("kpsearch")
}

/// Maps a `~`-prefixed path onto `/host`. Other paths are returned unchanged.
///
/// ```
/// use kpsearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/vault.json"), "/host/vault.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/vault.json"), "/data/vault.json");
/// assert_eq!(expand_tilde("~other/vault.json"), "~other/vault.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Strips the `/host` mount so a path reads as it does on the host.
///
/// ```
/// use kpsearch::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/vault.json"), "/vault.json");
/// assert_eq!(strip_host_prefix("/hostile/vault.json"), "/hostile/vault.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
