//! ghpages - publish generated site content to a gh-pages branch
//!
//! Runs once per CI step: writes git credentials, clones the pages branch
//! into a temporary checkout, mirrors the generated site into it with rsync,
//! and commits and pushes only when something changed.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PublishOutcome, PublishRun, RawArgs, RunOptions, RunSummary};
pub use domain::entities::{PagesLocation, PublishConfig, RepoMetadata};
pub use domain::services::resolve_pages_location;
pub use domain::value_objects::RemoteUrl;
pub use error::{ConfigError, PipelineError, PrepareError, PublishError, PublishResult};
