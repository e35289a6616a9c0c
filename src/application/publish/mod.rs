//! Publish Module
//!
//! The clone, sync, dirty-check, stage, commit, push pipeline.
//!
//! ## Structure
//!
//! - `state` - Pipeline states and outcomes (`PublishState`, `PublishOutcome`)
//! - `guard` - Checkout cleanup on drop (`CheckoutGuard`)
//! - `result` - Result types (`PublishSummary`)
//! - `use_case` - Core pipeline logic (`PublishUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use ghpages::application::publish::PublishUseCase;
//!
//! let use_case = PublishUseCase::new(runner, fs);
//! let summary = use_case.execute(&config)?;
//! ```

mod guard;
mod result;
mod state;
mod use_case;

pub use guard::CheckoutGuard;
pub use result::PublishSummary;
pub use state::{PublishOutcome, PublishState};
pub use use_case::PublishUseCase;
