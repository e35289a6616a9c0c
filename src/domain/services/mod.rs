//! Domain Services
//!
//! Stateless functions over domain types.

pub mod commands;
mod pages_url;

pub use pages_url::{resolve_pages_location, PagesUrlError};
