//! Publish pipeline state machine

use crate::domain::value_objects::PipelineStep;

/// Terminal result of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A commit was pushed to the pages branch
    Published,
    /// The checkout was clean after the sync; nothing was committed
    NoChanges,
}

/// Current position of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Running(PipelineStep),
    Done(PublishOutcome),
}

impl PublishState {
    pub fn initial() -> Self {
        PublishState::Running(PipelineStep::Clone)
    }

    /// State entered once `step` has succeeded
    pub fn after(step: PipelineStep) -> Self {
        match step.next() {
            Some(next) => PublishState::Running(next),
            None => PublishState::Done(PublishOutcome::Published),
        }
    }
}
