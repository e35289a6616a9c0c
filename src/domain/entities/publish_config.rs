//! PublishConfig entity
//!
//! The fully resolved configuration for one run. Built once by the resolver
//! and only read afterward.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::RemoteUrl;

/// How git authenticates against the remote
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// Private key written to `~/.ssh/id_rsa`
    SshKey(String),
    /// Credentials written to `~/.netrc` for the remote host
    Netrc { login: String, password: String },
}

impl Auth {
    pub fn method(&self) -> &'static str {
        match self {
            Auth::SshKey(_) => "ssh key",
            Auth::Netrc { .. } => "netrc",
        }
    }
}

// Secrets never reach debug output.
impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::SshKey(_) => f.write_str("SshKey(..)"),
            Auth::Netrc { login, .. } => f
                .debug_struct("Netrc")
                .field("login", login)
                .finish_non_exhaustive(),
        }
    }
}

/// Identity used for the pages commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

/// rsync behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOptions {
    /// Delete destination files that are absent from the source
    pub delete: bool,
    /// Leave the branch's `CNAME` file alone
    pub exclude_cname: bool,
    /// Mirror the directory's contents rather than the directory itself
    pub copy_contents: bool,
}

/// Resolved configuration for one publish run
#[derive(Debug, Clone)]
pub struct PublishConfig {
    pub auth: Auth,
    pub remote: RemoteUrl,
    /// Name given to the remote in the checkout (`origin`)
    pub remote_name: String,
    pub branch: String,
    /// Temporary clone of `branch`, owned by this run
    pub checkout: PathBuf,
    /// Absolute path of the generated site
    pub source: PathBuf,
    /// Relative path inside the checkout that receives the site
    pub target_directory: PathBuf,
    pub author: CommitAuthor,
    pub message: String,
    pub force_push: bool,
    pub sync: SyncOptions,
    pub skip_verify: bool,
}

impl PublishConfig {
    /// rsync destination: the target directory beneath the checkout
    pub fn destination(&self) -> PathBuf {
        self.checkout.join(&self.target_directory)
    }

    /// netrc machine name, the host of the remote
    pub fn netrc_machine(&self) -> Option<&str> {
        self.remote.host()
    }
}
