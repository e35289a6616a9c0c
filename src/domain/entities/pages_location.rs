//! Where the published site is served from

use std::fmt;

/// Metadata of the repository being built, as reported by the CI system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoMetadata {
    /// Browser link to the repository (`https://github.com/acme/widgets`)
    pub link: Option<String>,
    pub namespace: String,
    pub name: String,
}

/// How a pages URL was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagesSource {
    /// Content of a `CNAME` file
    Cname,
    /// `<namespace>.github.io` on github.com
    GitHub,
    /// `<host>/pages/<namespace>/<name>` on a self-hosted instance
    Enterprise,
}

/// Resolved public URL of the site, for reporting only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesLocation {
    pub url: String,
    pub source: PagesSource,
}

impl PagesLocation {
    pub fn new(url: impl Into<String>, source: PagesSource) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

impl fmt::Display for PagesLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
