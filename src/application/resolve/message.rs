//! Commit message loading
//!
//! A configured message may be literal text, a path to a file, a `file://`
//! URL or an `http(s)://` URL.

use std::path::Path;

use url::Url;

use crate::domain::ports::{ContentFetcher, FileSystem};
use crate::error::ConfigError;

/// Load the message text named by `source`
///
/// Relative paths are looked up against `cwd`. Text that does not name an
/// existing file is returned unchanged.
pub fn load_message<FS, F>(
    source: &str,
    cwd: &Path,
    file_system: &FS,
    fetcher: &F,
) -> Result<String, ConfigError>
where
    FS: FileSystem,
    F: ContentFetcher,
{
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetcher
            .fetch(source)
            .map_err(|err| source_error(source, err.reason));
    }

    if source.starts_with("file://") {
        let path = Url::parse(source)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| source_error(source, "not a valid file url"))?;
        return file_system
            .read(&path)
            .map_err(|err| source_error(source, err.to_string()));
    }

    let path = cwd.join(source);
    if file_system.exists(&path) {
        return file_system
            .read(&path)
            .map_err(|err| source_error(source, err.to_string()));
    }

    Ok(source.to_string())
}

/// Append `suffix` to `message` after a single space
pub fn compose_message(message: &str, suffix: Option<&str>) -> String {
    match suffix.filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{} {}", message.trim_end(), suffix),
        None => message.to_string(),
    }
}

fn source_error(location: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::MessageSource {
        location: location.to_string(),
        reason: reason.into(),
    }
}
