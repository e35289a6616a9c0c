//! CLI Argument Parsing
//!
//! Every setting is a flag with an environment fallback. The CI system
//! passes plugin settings as `PLUGIN_*` variables and build metadata as
//! `DRONE_*` variables; flags exist for local use and tests.
//!
//! Empty environment values count as unset.

use clap::{ArgAction, Parser};

use crate::application::{BuildMetadata, RawArgs, RunOptions};
use crate::domain::entities::RepoMetadata;
use crate::infrastructure::CardTarget;

use super::env_validator::EnvVarValidator;
use super::logging::LogLevel;

/// ghpages - publish generated site content to a gh-pages branch
#[derive(Parser, Debug)]
#[command(name = "ghpages")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Remote repository to publish to
    #[arg(long, env = "PLUGIN_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Branch receiving the site [default: gh-pages]
    #[arg(long, env = "PLUGIN_TARGET_BRANCH")]
    pub target_branch: Option<String>,

    /// Name of the remote in the checkout (deprecated) [default: origin]
    #[arg(long, env = "PLUGIN_UPSTREAM_NAME")]
    pub upstream_name: Option<String>,

    /// Directory holding the generated site [default: docs]
    #[arg(long, env = "PLUGIN_PAGES_DIRECTORY")]
    pub pages_directory: Option<String>,

    /// Directory inside the branch receiving the site [default: .]
    #[arg(long, env = "PLUGIN_TARGET_DIRECTORY")]
    pub target_directory: Option<String>,

    /// Private SSH key used to push
    #[arg(long, env = "PLUGIN_SSH_KEY", hide_env_values = true)]
    pub ssh_key: Option<String>,

    /// Username for netrc authentication
    #[arg(long, env = "PLUGIN_USERNAME")]
    pub username: Option<String>,

    /// Password for netrc authentication
    #[arg(long, env = "PLUGIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Netrc machine (deprecated, derived from the remote)
    #[arg(long, env = "PLUGIN_NETRC_MACHINE")]
    pub netrc_machine: Option<String>,

    /// Base of the temporary checkout (deprecated, ignored)
    #[arg(long, env = "PLUGIN_TEMPORARY_BASE")]
    pub temporary_base: Option<String>,

    /// Commit message: literal text, file path, file:// or http(s):// URL
    #[arg(long, env = "PLUGIN_MESSAGE")]
    pub message: Option<String>,

    /// Text appended to the commit message
    #[arg(long, env = "PLUGIN_APPEND_TO_MESSAGE")]
    pub append_to_message: Option<String>,

    /// Commit author name
    #[arg(long, env = "PLUGIN_USER_NAME")]
    pub user_name: Option<String>,

    /// Commit author email
    #[arg(long, env = "PLUGIN_USER_EMAIL")]
    pub user_email: Option<String>,

    /// Force push to the branch
    #[arg(long, env = "PLUGIN_FORCE_PUSH", action = ArgAction::SetTrue, value_parser = parse_switch)]
    pub force_push: bool,

    /// Delete files in the branch that are absent from the site
    #[arg(long, env = "PLUGIN_DELETE", action = ArgAction::SetTrue, value_parser = parse_switch)]
    pub delete: bool,

    /// Keep the branch's CNAME file
    #[arg(long, env = "PLUGIN_EXCLUDE_CNAME", action = ArgAction::SetTrue, value_parser = parse_switch)]
    pub exclude_cname: bool,

    /// Sync the contents of the pages directory rather than the directory
    #[arg(long, env = "PLUGIN_COPY_CONTENTS", action = ArgAction::SetTrue, value_parser = parse_switch)]
    pub copy_contents: bool,

    /// Disable TLS verification for git
    #[arg(long, env = "PLUGIN_SKIP_VERIFY", action = ArgAction::SetTrue, value_parser = parse_switch)]
    pub skip_verify: bool,

    /// Lint the settings
    #[arg(long, env = "PLUGIN_LINT", default_value_t = true, action = ArgAction::Set, value_parser = parse_enabled)]
    pub lint: bool,

    /// Log level: info, debug or trace
    #[arg(long, env = "PLUGIN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Metadata the CI system provides about the running build
#[derive(clap::Args, Debug, Default)]
pub struct BuildArgs {
    #[arg(id = "build_remote_url", long = "build-remote-url", env = "DRONE_REMOTE_URL", hide = true)]
    pub remote_url: Option<String>,

    #[arg(long = "build-author-name", env = "DRONE_COMMIT_AUTHOR_NAME", hide = true)]
    pub author_name: Option<String>,

    #[arg(long = "build-author-email", env = "DRONE_COMMIT_AUTHOR_EMAIL", hide = true)]
    pub author_email: Option<String>,

    #[arg(id = "build_message", long = "build-message", env = "DRONE_COMMIT_MESSAGE", hide = true)]
    pub message: Option<String>,

    #[arg(long = "repo-link", env = "DRONE_REPO_LINK", hide = true)]
    pub repo_link: Option<String>,

    #[arg(long = "repo-namespace", env = "DRONE_REPO_NAMESPACE", hide = true)]
    pub repo_namespace: Option<String>,

    #[arg(long = "repo-name", env = "DRONE_REPO_NAME", hide = true)]
    pub repo_name: Option<String>,

    /// Where to write the summary card
    #[arg(long = "card-path", env = "DRONE_CARD_PATH", hide = true)]
    pub card_path: Option<String>,
}

/// Boolean setting, where an empty value means `unset`
fn boolish(value: &str, unset: bool) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(unset),
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Ok(false),
        other => Err(format!("'{}' is not a boolean", other)),
    }
}

/// Off unless set
fn parse_switch(value: &str) -> Result<bool, String> {
    boolish(value, false)
}

/// On unless set to a false value
fn parse_enabled(value: &str) -> Result<bool, String> {
    boolish(value, true)
}

impl Cli {
    pub fn raw_args(&self) -> RawArgs {
        RawArgs {
            remote_url: self.remote_url.clone(),
            target_branch: self.target_branch.clone(),
            upstream_name: self.upstream_name.clone(),
            pages_directory: self.pages_directory.clone(),
            target_directory: self.target_directory.clone(),
            ssh_key: self.ssh_key.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            netrc_machine: self.netrc_machine.clone(),
            temporary_base: self.temporary_base.clone(),
            message: self.message.clone(),
            append_to_message: self.append_to_message.clone(),
            user_name: self.user_name.clone(),
            user_email: self.user_email.clone(),
            force_push: self.force_push,
            delete: self.delete,
            exclude_cname: self.exclude_cname,
            copy_contents: self.copy_contents,
            skip_verify: self.skip_verify,
            build: BuildMetadata {
                remote_url: self.build.remote_url.clone(),
                author_name: self.build.author_name.clone(),
                author_email: self.build.author_email.clone(),
                message: self.build.message.clone(),
                repo: RepoMetadata {
                    link: self.build.repo_link.clone(),
                    namespace: self.build.repo_namespace.clone().unwrap_or_default(),
                    name: self.build.repo_name.clone().unwrap_or_default(),
                },
            },
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions { lint: self.lint }
    }

    pub fn card_target(&self) -> CardTarget {
        CardTarget::from_path(self.build.card_path.as_deref())
    }

    /// Unknown levels fall back to `info` with a warning
    pub fn log_level(&self) -> LogLevel {
        EnvVarValidator::new("PLUGIN_LOG_LEVEL", LogLevel::NAMES).parse(
            &self.log_level,
            LogLevel::parse,
            LogLevel::Info,
        )
    }
}
