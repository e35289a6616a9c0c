//! Remote repository URL
//!
//! Git accepts three shapes of remote: absolute URLs (`https://`, `ssh://`,
//! `file://`, ...), scp-like `user@host:path`, and plain filesystem paths.
//! `RemoteUrl` keeps the text exactly as given (it is handed to `git clone`
//! untouched) and extracts the host for netrc.

use std::fmt;

use thiserror::Error;
use url::Url;

const URL_SCHEMES: &[&str] = &["http", "https", "ssh", "git", "file", "git+ssh", "ssh+git"];

/// Remote URL parse failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteUrlError {
    #[error("remote url is empty")]
    Empty,

    #[error("{url}: {reason}")]
    Invalid { url: String, reason: String },

    #[error("{url}: unsupported scheme '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },
}

/// A parsed git remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    raw: String,
    scheme: Option<String>,
    host: Option<String>,
}

impl RemoteUrl {
    pub fn parse(raw: &str) -> Result<Self, RemoteUrlError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RemoteUrlError::Empty);
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid(raw, "contains whitespace or control characters"));
        }

        match Url::parse(raw) {
            Ok(url) if URL_SCHEMES.contains(&url.scheme()) => Ok(Self {
                raw: raw.to_string(),
                scheme: Some(url.scheme().to_string()),
                host: url.host_str().map(str::to_string),
            }),
            // `github.com:owner/repo.git` parses as a URL with scheme "github.com"
            Ok(url) => Self::parse_scp(raw).ok_or_else(|| RemoteUrlError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: url.scheme().to_string(),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => match Self::parse_scp(raw) {
                Some(remote) => Ok(remote),
                None if raw.starts_with(':') => Err(invalid(raw, "missing host")),
                None => Ok(Self {
                    raw: raw.to_string(),
                    scheme: None,
                    host: None,
                }),
            },
            Err(err) => Err(invalid(raw, &err.to_string())),
        }
    }

    /// `[user@]host:path`, where host contains no slash
    fn parse_scp(raw: &str) -> Option<Self> {
        let (left, path) = raw.split_once(':')?;
        if left.contains('/') || path.is_empty() {
            return None;
        }
        let host = left.rsplit_once('@').map_or(left, |(_, host)| host);
        if host.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            scheme: Some("ssh".to_string()),
            host: Some(host.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Host name, if the remote has one (local paths do not)
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Whether the remote authenticates over HTTP(S)
    pub fn is_http(&self) -> bool {
        matches!(self.scheme.as_deref(), Some("http" | "https"))
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn invalid(raw: &str, reason: &str) -> RemoteUrlError {
    RemoteUrlError::Invalid {
        url: raw.to_string(),
        reason: reason.to_string(),
    }
}
