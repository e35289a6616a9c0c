//! Full publish run
//!
//! lint → resolve → prepare → publish → report. Lint and report are
//! advisory; the three middle phases fail the run.

use tracing::info;

use crate::domain::entities::PagesLocation;
use crate::domain::ports::{CardSink, ContentFetcher, FileSystem, ProcessRunner};
use crate::error::PublishResult;

use super::lint::{lint_args, LintReport};
use super::prepare::PrepareUseCase;
use super::publish::{CheckoutGuard, PublishOutcome, PublishUseCase};
use super::report::ReportUseCase;
use super::resolve::{RawArgs, ResolveUseCase};

/// Switches that shape the run but are not part of the publish config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub lint: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { lint: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: PublishOutcome,
    pub location: Option<PagesLocation>,
    pub lint: Option<LintReport>,
}

pub struct PublishRun<R, FS, F, S>
where
    R: ProcessRunner,
    FS: FileSystem,
    F: ContentFetcher,
    S: CardSink,
{
    runner: R,
    file_system: FS,
    fetcher: F,
    sink: S,
}

impl<R, FS, F, S> PublishRun<R, FS, F, S>
where
    R: ProcessRunner,
    FS: FileSystem,
    F: ContentFetcher,
    S: CardSink,
{
    pub fn new(runner: R, file_system: FS, fetcher: F, sink: S) -> Self {
        Self {
            runner,
            file_system,
            fetcher,
            sink,
        }
    }

    pub fn execute(&self, args: &RawArgs, options: &RunOptions) -> PublishResult<RunSummary> {
        let lint = options.lint.then(|| lint_args(args));
        let linter = lint.as_ref().map(LintReport::summary).unwrap_or_default();
        if !linter.is_empty() {
            info!("{}", linter.trim_end());
        }

        let config = ResolveUseCase::new(&self.file_system, &self.fetcher).execute(args)?;

        // Prepare failures must not leak the freshly created checkout
        let checkout = CheckoutGuard::new(&self.file_system, &config.checkout);
        PrepareUseCase::new(&self.file_system, &self.runner).execute(&config)?;
        checkout.release();

        let summary = PublishUseCase::new(&self.runner, &self.file_system).execute(&config)?;

        let location =
            ReportUseCase::new(&self.file_system, &self.sink).execute(&args.build.repo, &linter);

        Ok(RunSummary {
            outcome: summary.outcome,
            location,
            lint,
        })
    }
}
