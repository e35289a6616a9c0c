//! Error types for ghpages
//!
//! One `thiserror` enum per phase of a run. Every fatal error surfaces
//! through `PublishError`, whose message names the phase that failed.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, ProcessError};
use crate::domain::value_objects::{PipelineStep, RemoteUrlError};

/// Result type alias for a full publish run
pub type PublishResult<T> = Result<T, PublishError>;

/// Top-level error for a publish run
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("error in the configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("error configuring git: {0}")]
    Prepare(#[from] PrepareError),

    #[error("error during processing: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Missing or contradictory input, raised before any external command runs
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no authentication method specified")]
    NoAuthentication,

    /// A netrc password needs a login to go with it
    #[error("password supplied without a username")]
    MissingLogin,

    #[error("gh-pages remote not specified")]
    MissingRemote,

    #[error("invalid clone url: {0}")]
    InvalidRemote(#[from] RemoteUrlError),

    #[error("target_directory needs to be relative: {}", .0.display())]
    AbsoluteTargetDirectory(PathBuf),

    #[error("author name not specified")]
    MissingAuthorName,

    #[error("author email not specified")]
    MissingAuthorEmail,

    #[error("commit message not specified")]
    MissingCommitMessage,

    /// The message named a file or URL that could not be loaded
    #[error("could not load commit message from {location}: {reason}")]
    MessageSource { location: String, reason: String },

    #[error("could not get working directory: {0}")]
    WorkingDirectory(FsError),

    #[error("could not get pages directory: {}", .0.display())]
    PagesDirectoryNotFound(PathBuf),

    #[error("could not create temporary directory: {0}")]
    Checkout(FsError),
}

/// Failure while writing credentials or setting the git identity
#[derive(Error, Debug)]
pub enum PrepareError {
    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("failed to write netrc: {0}")]
    Netrc(FsError),

    #[error("failed to write ssh key: {0}")]
    SshKey(FsError),

    #[error("failed to set email: {0}")]
    Email(ProcessError),

    #[error("failed to set author: {0}")]
    Name(ProcessError),

    #[error("failed to disable ssl verification: {0}")]
    SkipVerify(ProcessError),
}

/// Failure of one state of the publish pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to {step}: {error}")]
    Step {
        step: PipelineStep,
        error: ProcessError,
    },

    #[error("failed to {step}: could not create {}: {error}", .path.display())]
    Destination {
        step: PipelineStep,
        path: PathBuf,
        error: FsError,
    },
}

impl PipelineError {
    /// The pipeline state that failed
    pub fn step(&self) -> PipelineStep {
        match self {
            PipelineError::Step { step, .. } | PipelineError::Destination { step, .. } => *step,
        }
    }
}
