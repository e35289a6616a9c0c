//! Pages URL derivation
//!
//! Works out where the published site is served from. Only used for the
//! summary card, so every failure here is reported as a warning by the
//! caller.

use thiserror::Error;
use url::Url;

use crate::domain::entities::{PagesLocation, PagesSource, RepoMetadata};

const GITHUB_HOST: &str = "github.com";

#[derive(Debug, Error)]
pub enum PagesUrlError {
    #[error("cname file is empty")]
    EmptyCname,

    #[error("repo link not present")]
    MissingRepoLink,

    #[error("could not parse repo link {link}: {error}")]
    InvalidRepoLink { link: String, error: url::ParseError },

    #[error("could not build pages url: {0}")]
    Build(url::ParseError),
}

/// Resolve the public site URL
///
/// A `CNAME` file wins over everything. Otherwise github.com repositories
/// map to `https://<namespace>.github.io[/<name>]` and any other host to
/// `<scheme>://<host>/pages/<namespace>/<name>`.
pub fn resolve_pages_location(
    cname: Option<&str>,
    repo: &RepoMetadata,
) -> Result<PagesLocation, PagesUrlError> {
    if let Some(cname) = cname {
        let cname = cname.trim();
        if cname.is_empty() {
            return Err(PagesUrlError::EmptyCname);
        }
        return Ok(PagesLocation::new(cname, PagesSource::Cname));
    }

    let link = repo
        .link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or(PagesUrlError::MissingRepoLink)?;
    let link_url = Url::parse(link).map_err(|error| PagesUrlError::InvalidRepoLink {
        link: link.to_string(),
        error,
    })?;

    if link_url.host_str() == Some(GITHUB_HOST) {
        return github_pages(repo);
    }

    enterprise_pages(link_url, repo)
}

fn github_pages(repo: &RepoMetadata) -> Result<PagesLocation, PagesUrlError> {
    let root = format!("https://{}.github.io", repo.namespace);
    let base = Url::parse(&root).map_err(PagesUrlError::Build)?;

    // `<namespace>.github.io` repositories are served from the root
    let is_root_page = base
        .host_str()
        .is_some_and(|host| host.eq_ignore_ascii_case(&repo.name));
    if is_root_page {
        return Ok(PagesLocation::new(root, PagesSource::GitHub));
    }

    let pages = base.join(&repo.name).map_err(PagesUrlError::Build)?;
    Ok(PagesLocation::new(pages, PagesSource::GitHub))
}

fn enterprise_pages(mut link: Url, repo: &RepoMetadata) -> Result<PagesLocation, PagesUrlError> {
    link.set_path("");
    link.set_query(None);
    link.set_fragment(None);

    let relative = format!("pages/{}/{}", repo.namespace, repo.name);
    let pages = link.join(&relative).map_err(PagesUrlError::Build)?;
    Ok(PagesLocation::new(pages, PagesSource::Enterprise))
}
