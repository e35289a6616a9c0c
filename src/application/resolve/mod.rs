//! Resolve Module
//!
//! Validation and defaulting of raw inputs into a `PublishConfig`.
//!
//! ## Structure
//!
//! - `raw` - Unvalidated inputs (`RawArgs`, `BuildMetadata`)
//! - `message` - Commit message loading and suffixing
//! - `use_case` - Core resolution logic (`ResolveUseCase`)

mod message;
mod raw;
mod use_case;

pub use message::{compose_message, load_message};
pub use raw::{present, BuildMetadata, RawArgs};
pub use use_case::{
    ResolveUseCase, CHECKOUT_PREFIX, DEFAULT_BRANCH, DEFAULT_PAGES_DIRECTORY,
    DEFAULT_REMOTE_NAME, DEFAULT_TARGET_DIRECTORY,
};
