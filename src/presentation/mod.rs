//! Presentation Layer
//!
//! This layer handles:
//! - CLI and environment parsing (via clap)
//! - Log output setup (via tracing-subscriber)
//! - Lenient validation of enumerated settings
//!
//! ## Structure
//!
//! - `cli` - Flags, env fallbacks and their mapping onto `RawArgs`
//! - `logging` - Subscriber configuration
//! - `env_validator` - Typo-tolerant parsing with warnings

pub mod cli;
pub mod env_validator;
pub mod logging;

pub use cli::Cli;
pub use logging::LogLevel;
