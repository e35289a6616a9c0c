//! Domain Layer
//!
//! Pure logic of a pages publish: configuration types, the pipeline states,
//! command construction and URL derivation.
//!
//! ## Structure
//!
//! - `entities/` - Resolved configuration, pages location, summary card
//! - `value_objects/` - Remote URL, pipeline step
//! - `services/` - Command builders, pages URL resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in this layer touches the file system, the network or a child
//! process directly. All I/O goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
