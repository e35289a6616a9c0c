//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod card_sink;
pub mod content_fetcher;
pub mod file_system;
pub mod process_runner;

pub use card_sink::{CardError, CardSink};
pub use content_fetcher::{ContentFetcher, FetchError};
pub use file_system::{FileSystem, FsError, FsResult};
pub use process_runner::{CommandResult, CommandSpec, OutputMode, ProcessError, ProcessRunner};
