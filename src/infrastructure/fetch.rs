//! HTTP content fetcher

use crate::domain::ports::{ContentFetcher, FetchError};

const USER_AGENT: &str = concat!("ghpages/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP(S) GET through a shared `ureq` agent
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
        }
    }
}

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => FetchError::new(url, format!("status code {}", code)),
            ureq::Error::Transport(transport) => FetchError::new(url, transport.to_string()),
        })?;

        response
            .into_string()
            .map_err(|err| FetchError::new(url, format!("could not read response: {}", err)))
    }
}
