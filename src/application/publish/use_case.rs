//! Publish Use Case
//!
//! Drives the checkout through clone, sync, dirty check, stage, commit and
//! push. The first failing step aborts the run; nothing is retried. The
//! checkout directory is removed on every exit path.

use tracing::{debug, info};

use crate::domain::entities::PublishConfig;
use crate::domain::ports::{FileSystem, ProcessRunner};
use crate::domain::services::commands;
use crate::domain::value_objects::PipelineStep;
use crate::error::PipelineError;

use super::guard::CheckoutGuard;
use super::result::PublishSummary;
use super::state::{PublishOutcome, PublishState};

pub struct PublishUseCase<R, FS>
where
    R: ProcessRunner,
    FS: FileSystem,
{
    runner: R,
    file_system: FS,
}

impl<R, FS> PublishUseCase<R, FS>
where
    R: ProcessRunner,
    FS: FileSystem,
{
    pub fn new(runner: R, file_system: FS) -> Self {
        Self {
            runner,
            file_system,
        }
    }

    pub fn execute(&self, config: &PublishConfig) -> Result<PublishSummary, PipelineError> {
        let _checkout = CheckoutGuard::new(&self.file_system, &config.checkout);

        let mut state = PublishState::initial();
        let mut steps = Vec::new();
        loop {
            match state {
                PublishState::Running(step) => {
                    debug!("pipeline step: {}", step);
                    state = self.advance(config, step)?;
                    steps.push(step);
                }
                PublishState::Done(outcome) => return Ok(PublishSummary { outcome, steps }),
            }
        }
    }

    /// Run one step and return the state it leads to
    fn advance(
        &self,
        config: &PublishConfig,
        step: PipelineStep,
    ) -> Result<PublishState, PipelineError> {
        let failed = |error| PipelineError::Step { step, error };
        let checkout = config.checkout.as_path();

        match step {
            PipelineStep::Clone => {
                self.runner
                    .run_checked(&commands::clone_branch(config))
                    .map_err(failed)?;
            }
            PipelineStep::Sync => {
                let destination = config.destination();
                self.file_system
                    .create_dir_all(&destination)
                    .map_err(|error| PipelineError::Destination {
                        step,
                        path: destination.clone(),
                        error,
                    })?;
                self.runner
                    .run_checked(&commands::rsync_pages(config))
                    .map_err(failed)?;
            }
            PipelineStep::Status => {
                let status = self
                    .runner
                    .run_checked(&commands::status_porcelain(checkout))
                    .map_err(failed)?;
                let changes = status.stdout_str();
                if changes.is_empty() {
                    info!("no changes detected on branch {}", config.branch);
                    return Ok(PublishState::Done(PublishOutcome::NoChanges));
                }
                info!("changes detected:\n{}", changes.trim_end());
            }
            PipelineStep::Stage => {
                self.runner
                    .run_checked(&commands::stage_all(checkout))
                    .map_err(failed)?;
            }
            PipelineStep::Commit => {
                self.runner
                    .run_checked(&commands::commit(checkout, &config.message))
                    .map_err(failed)?;
            }
            PipelineStep::Push => {
                self.runner
                    .run_checked(&commands::push(
                        checkout,
                        &config.remote_name,
                        &config.branch,
                        config.force_push,
                    ))
                    .map_err(failed)?;
            }
        }

        Ok(PublishState::after(step))
    }
}
