//! Raw, unvalidated inputs of a run
//!
//! Mirrors the command line / environment surface without depending on clap.
//! Text fields are `None` when unset; an empty string counts as unset too.

use std::fmt;

use crate::domain::entities::RepoMetadata;

/// Inputs provided by the plugin settings
#[derive(Clone, Default)]
pub struct RawArgs {
    pub remote_url: Option<String>,
    pub target_branch: Option<String>,
    pub upstream_name: Option<String>,
    pub pages_directory: Option<String>,
    pub target_directory: Option<String>,
    pub ssh_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub netrc_machine: Option<String>,
    pub temporary_base: Option<String>,
    pub message: Option<String>,
    pub append_to_message: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub force_push: bool,
    pub delete: bool,
    pub exclude_cname: bool,
    pub copy_contents: bool,
    pub skip_verify: bool,
    pub build: BuildMetadata,
}

/// Inputs provided by the CI system about the current build
#[derive(Debug, Clone, Default)]
pub struct BuildMetadata {
    pub remote_url: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub message: Option<String>,
    pub repo: RepoMetadata,
}

/// Treat empty strings like missing values
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl RawArgs {
    /// Remote from the settings, else the build's own remote
    pub fn effective_remote(&self) -> Option<&str> {
        present(&self.remote_url).or_else(|| present(&self.build.remote_url))
    }
}

fn redact(value: &Option<String>) -> &'static str {
    match present(value) {
        Some(_) => "Some(..)",
        None => "None",
    }
}

impl fmt::Debug for RawArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArgs")
            .field("remote_url", &self.remote_url)
            .field("target_branch", &self.target_branch)
            .field("upstream_name", &self.upstream_name)
            .field("pages_directory", &self.pages_directory)
            .field("target_directory", &self.target_directory)
            .field("ssh_key", &format_args!("{}", redact(&self.ssh_key)))
            .field("username", &self.username)
            .field("password", &format_args!("{}", redact(&self.password)))
            .field("message", &self.message)
            .field("append_to_message", &self.append_to_message)
            .field("user_name", &self.user_name)
            .field("user_email", &self.user_email)
            .field("force_push", &self.force_push)
            .field("delete", &self.delete)
            .field("exclude_cname", &self.exclude_cname)
            .field("copy_contents", &self.copy_contents)
            .field("skip_verify", &self.skip_verify)
            .field("build", &self.build)
            .finish_non_exhaustive()
    }
}
