//! Resolve Use Case
//!
//! Turns raw inputs into a `PublishConfig`:
//! 1. Select the authentication method
//! 2. Parse the remote and apply naming defaults
//! 3. Resolve the commit identity and message
//! 4. Locate the pages source
//! 5. Create the temporary checkout directory
//!
//! Every check runs before step 5, so a rejected configuration never leaves
//! a directory behind.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Auth, CommitAuthor, PublishConfig, SyncOptions};
use crate::domain::ports::{ContentFetcher, FileSystem};
use crate::domain::value_objects::RemoteUrl;
use crate::error::ConfigError;

use super::message::{compose_message, load_message};
use super::raw::{present, RawArgs};

pub const DEFAULT_PAGES_DIRECTORY: &str = "docs";
pub const DEFAULT_TARGET_DIRECTORY: &str = ".";
pub const DEFAULT_REMOTE_NAME: &str = "origin";
pub const DEFAULT_BRANCH: &str = "gh-pages";
/// Prefix of the temporary checkout directory name
pub const CHECKOUT_PREFIX: &str = "gh-pages";

/// Resolve use case - validates inputs and applies defaults
pub struct ResolveUseCase<FS, F>
where
    FS: FileSystem,
    F: ContentFetcher,
{
    file_system: FS,
    fetcher: F,
}

impl<FS, F> ResolveUseCase<FS, F>
where
    FS: FileSystem,
    F: ContentFetcher,
{
    pub fn new(file_system: FS, fetcher: F) -> Self {
        Self {
            file_system,
            fetcher,
        }
    }

    pub fn execute(&self, args: &RawArgs) -> Result<PublishConfig, ConfigError> {
        if present(&args.ssh_key).is_none() && present(&args.password).is_none() {
            return Err(ConfigError::NoAuthentication);
        }

        let remote = args.effective_remote().ok_or(ConfigError::MissingRemote)?;
        let remote = RemoteUrl::parse(remote)?;
        let auth = select_auth(args, &remote)?;

        let target_directory = PathBuf::from(
            present(&args.target_directory).unwrap_or(DEFAULT_TARGET_DIRECTORY),
        );
        if target_directory.is_absolute() {
            return Err(ConfigError::AbsoluteTargetDirectory(target_directory));
        }

        let author = CommitAuthor {
            name: present(&args.user_name)
                .or_else(|| present(&args.build.author_name))
                .ok_or(ConfigError::MissingAuthorName)?
                .to_string(),
            email: present(&args.user_email)
                .or_else(|| present(&args.build.author_email))
                .ok_or(ConfigError::MissingAuthorEmail)?
                .to_string(),
        };

        let cwd = self
            .file_system
            .current_dir()
            .map_err(ConfigError::WorkingDirectory)?;
        let message = self.resolve_message(args, &cwd)?;
        let source = self.resolve_source(args, &cwd)?;

        let checkout = self
            .file_system
            .create_temp_dir(CHECKOUT_PREFIX)
            .map_err(ConfigError::Checkout)?;

        let config = PublishConfig {
            auth,
            remote,
            remote_name: present(&args.upstream_name)
                .unwrap_or(DEFAULT_REMOTE_NAME)
                .to_string(),
            branch: present(&args.target_branch)
                .unwrap_or(DEFAULT_BRANCH)
                .to_string(),
            checkout,
            source,
            target_directory,
            author,
            message,
            force_push: args.force_push,
            sync: SyncOptions {
                delete: args.delete,
                exclude_cname: args.exclude_cname,
                copy_contents: args.copy_contents,
            },
            skip_verify: args.skip_verify,
        };
        debug!("resolved configuration: {:?}", config);

        Ok(config)
    }

    /// Settings message (loaded from its source), else the build's message
    fn resolve_message(&self, args: &RawArgs, cwd: &Path) -> Result<String, ConfigError> {
        let message = match present(&args.message) {
            Some(source) => load_message(source, cwd, &self.file_system, &self.fetcher)?,
            None => present(&args.build.message)
                .ok_or(ConfigError::MissingCommitMessage)?
                .to_string(),
        };

        Ok(compose_message(&message, present(&args.append_to_message)))
    }

    fn resolve_source(&self, args: &RawArgs, cwd: &Path) -> Result<PathBuf, ConfigError> {
        let pages = Path::new(present(&args.pages_directory).unwrap_or(DEFAULT_PAGES_DIRECTORY));
        // Rebuilding from components drops a trailing separator, which would
        // otherwise make rsync copy the directory's contents
        let source: PathBuf = cwd.join(pages).components().collect();

        if !self.file_system.exists(&source) {
            return Err(ConfigError::PagesDirectoryNotFound(source));
        }
        Ok(source)
    }
}

/// Pick exactly one authentication method
///
/// With both a key and a password configured, http(s) remotes use the
/// password and every other remote uses the key.
fn select_auth(args: &RawArgs, remote: &RemoteUrl) -> Result<Auth, ConfigError> {
    let netrc = || -> Result<Auth, ConfigError> {
        Ok(Auth::Netrc {
            login: present(&args.username)
                .ok_or(ConfigError::MissingLogin)?
                .to_string(),
            password: present(&args.password).unwrap_or_default().to_string(),
        })
    };

    match (present(&args.ssh_key), present(&args.password)) {
        (Some(key), Some(_)) if !remote.is_http() => Ok(Auth::SshKey(key.to_string())),
        (_, Some(_)) => netrc(),
        (Some(key), None) => Ok(Auth::SshKey(key.to_string())),
        (None, None) => Err(ConfigError::NoAuthentication),
    }
}
