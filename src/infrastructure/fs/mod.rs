//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{ghpages_home_dir, GHPAGES_HOME_VAR};
pub use local::LocalFs;
