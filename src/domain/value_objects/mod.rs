//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod pipeline_step;
mod remote_url;

pub use pipeline_step::PipelineStep;
pub use remote_url::{RemoteUrl, RemoteUrlError};
