//! Application Layer
//!
//! Use cases that orchestrate a publish run.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Validates raw inputs into a `PublishConfig`
//! - `PrepareUseCase` - Writes credentials and sets the git identity
//! - `PublishUseCase` - Runs the clone/sync/commit/push state machine
//! - `ReportUseCase` - Resolves the pages URL and writes the card
//! - `PublishRun` - All of the above, in order
//!
//! ## Services
//!
//! - `lint_args` - Advisory checks on the raw inputs

pub mod lint;
pub mod prepare;
pub mod publish;
pub mod report;
pub mod resolve;
pub mod run;

#[cfg(test)]
pub(crate) mod fakes;

pub use lint::{lint_args, LintReport};
pub use prepare::PrepareUseCase;
pub use publish::{CheckoutGuard, PublishOutcome, PublishState, PublishSummary, PublishUseCase};
pub use report::ReportUseCase;
pub use resolve::{BuildMetadata, RawArgs, ResolveUseCase};
pub use run::{PublishRun, RunOptions, RunSummary};
