//! Domain Entities
//!
//! Core business objects of a publish run.

mod card;
mod pages_location;
mod publish_config;

pub use card::{Card, CardData, CARD_SCHEMA};
pub use pages_location::{PagesLocation, PagesSource, RepoMetadata};
pub use publish_config::{Auth, CommitAuthor, PublishConfig, SyncOptions};
