//! ContentFetcher port - loads text from an HTTP(S) URL
//!
//! Used when the commit message names a URL instead of a literal string.

use thiserror::Error;

/// A URL could not be fetched
#[derive(Debug, Error)]
#[error("could not fetch {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Fetches the body of a URL as text
pub trait ContentFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: ContentFetcher + ?Sized> ContentFetcher for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}
