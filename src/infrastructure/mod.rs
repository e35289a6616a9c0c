//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home directory lookup
//! - `process/` - Child process runner for git and rsync
//! - `fetch` - HTTP fetcher for commit message URLs
//! - `card` - Card writer for terminal streams and files

pub mod card;
pub mod fetch;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use card::{CardTarget, CardWriter};
pub use fetch::HttpFetcher;
pub use fs::{ghpages_home_dir, LocalFs, GHPAGES_HOME_VAR};
pub use process::SystemRunner;
