//! Report Use Case
//!
//! Resolves the public site URL and hands the summary card to the sink.
//! Nothing here can fail a run: every problem is logged as a warning.

use tracing::{info, warn};

use crate::domain::entities::{Card, PagesLocation, RepoMetadata};
use crate::domain::ports::{CardSink, FileSystem, FsError};
use crate::domain::services::resolve_pages_location;

pub const CNAME_FILE: &str = "CNAME";

pub struct ReportUseCase<FS, S>
where
    FS: FileSystem,
    S: CardSink,
{
    file_system: FS,
    sink: S,
}

impl<FS, S> ReportUseCase<FS, S>
where
    FS: FileSystem,
    S: CardSink,
{
    pub fn new(file_system: FS, sink: S) -> Self {
        Self { file_system, sink }
    }

    /// Returns the resolved location, or `None` when it could not be determined
    pub fn execute(&self, repo: &RepoMetadata, linter: &str) -> Option<PagesLocation> {
        let cname = self.read_cname();

        let location = match resolve_pages_location(cname.as_deref(), repo) {
            Ok(location) => location,
            Err(err) => {
                warn!("could not determine location for site, skipping card: {}", err);
                return None;
            }
        };
        info!("publishing at: {}", location);

        if let Err(err) = self.sink.write_card(&Card::new(location.url.clone(), linter)) {
            warn!("{}", err);
        }

        Some(location)
    }

    /// `CNAME` in the working directory, if there is one
    fn read_cname(&self) -> Option<String> {
        let path = self.file_system.current_dir().ok()?.join(CNAME_FILE);
        match self.file_system.read(&path) {
            Ok(content) => Some(content),
            Err(FsError::NotFound(_)) => None,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                None
            }
        }
    }
}
