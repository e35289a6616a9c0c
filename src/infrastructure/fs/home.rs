//! Home directory resolution with test isolation support.
//!
//! Credential files (`~/.netrc`, `~/.ssh/*`) land in the directory returned
//! by `ghpages_home_dir()`:
//! 1. `GHPAGES_HOME` environment variable, if set (test isolation)
//! 2. `dirs::home_dir()` otherwise
//!
//! On Windows `dirs::home_dir()` ignores `HOME`, so tests must use the
//! override.

use std::path::PathBuf;

/// Environment variable overriding the home directory
pub const GHPAGES_HOME_VAR: &str = "GHPAGES_HOME";

pub fn ghpages_home_dir() -> Option<PathBuf> {
    std::env::var_os(GHPAGES_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
