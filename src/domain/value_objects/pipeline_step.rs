//! Pipeline steps
//!
//! The publish pipeline is a fixed, linear sequence. `next` is its whole
//! transition table; the dirty check is the only state that can leave the
//! sequence early.

use std::fmt;

/// One state of the publish pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    Clone,
    Sync,
    Status,
    Stage,
    Commit,
    Push,
}

impl PipelineStep {
    pub const ALL: [PipelineStep; 6] = [
        PipelineStep::Clone,
        PipelineStep::Sync,
        PipelineStep::Status,
        PipelineStep::Stage,
        PipelineStep::Commit,
        PipelineStep::Push,
    ];

    /// The step that follows this one, `None` after the push
    pub fn next(self) -> Option<PipelineStep> {
        match self {
            PipelineStep::Clone => Some(PipelineStep::Sync),
            PipelineStep::Sync => Some(PipelineStep::Status),
            PipelineStep::Status => Some(PipelineStep::Stage),
            PipelineStep::Stage => Some(PipelineStep::Commit),
            PipelineStep::Commit => Some(PipelineStep::Push),
            PipelineStep::Push => None,
        }
    }

    /// Action phrase used in error messages ("failed to clone target")
    pub fn action(self) -> &'static str {
        match self {
            PipelineStep::Clone => "clone target",
            PipelineStep::Sync => "sync pages",
            PipelineStep::Status => "check status",
            PipelineStep::Stage => "stage changes",
            PipelineStep::Commit => "commit changes",
            PipelineStep::Push => "push changes",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}
