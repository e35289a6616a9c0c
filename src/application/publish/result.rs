//! Publish result types

use crate::domain::value_objects::PipelineStep;

use super::state::PublishOutcome;

/// What a pipeline run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    pub outcome: PublishOutcome,
    /// Steps that completed, in order
    pub steps: Vec<PipelineStep>,
}

impl PublishSummary {
    pub fn is_published(&self) -> bool {
        self.outcome == PublishOutcome::Published
    }
}
