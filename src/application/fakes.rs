//! In-memory port implementations shared by the use case tests

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::entities::Card;
use crate::domain::ports::{
    CardError, CardSink, CommandResult, CommandSpec, ContentFetcher, FetchError, FileSystem,
    FsError, FsResult, ProcessError, ProcessRunner,
};

pub const CWD: &str = "/drone/src";
pub const HOME: &str = "/root";

/// File system backed by maps, rooted at `CWD` with home `HOME`
pub struct MemoryFs {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub modes: RefCell<HashMap<PathBuf, u32>>,
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub removed: RefCell<Vec<PathBuf>>,
    pub read_only: RefCell<BTreeSet<PathBuf>>,
    pub home: Option<PathBuf>,
    temp_counter: Cell<u32>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        let fs = Self {
            files: RefCell::new(BTreeMap::new()),
            modes: RefCell::new(HashMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
            removed: RefCell::new(Vec::new()),
            read_only: RefCell::new(BTreeSet::new()),
            home: Some(PathBuf::from(HOME)),
            temp_counter: Cell::new(0),
        };
        fs.dirs.borrow_mut().insert(PathBuf::from(CWD));
        fs.dirs.borrow_mut().insert(PathBuf::from(HOME));
        fs
    }

    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), content.to_string());
        self
    }

    /// Writes below `path` fail with permission denied
    pub fn deny_writes(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.borrow_mut().insert(path.into());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn mode(&self, path: &str) -> Option<u32> {
        self.modes.borrow().get(Path::new(path)).copied()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn temp_dirs_created(&self) -> u32 {
        self.temp_counter.get()
    }

    fn check_writable(&self, path: &Path) -> FsResult<()> {
        if self.read_only.borrow().iter().any(|ro| path.starts_with(ro)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write_with_mode(&self, path: &Path, content: &str, mode: u32) -> FsResult<()> {
        self.check_writable(path)?;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self.modes.borrow_mut().insert(path.to_path_buf(), mode);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.check_writable(path)?;
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn create_dir_with_mode(&self, path: &Path, mode: u32) -> FsResult<()> {
        self.create_dir_all(path)?;
        self.modes.borrow_mut().insert(path.to_path_buf(), mode);
        Ok(())
    }

    fn create_temp_dir(&self, prefix: &str) -> FsResult<PathBuf> {
        let n = self.temp_counter.get() + 1;
        self.temp_counter.set(n);
        let path = PathBuf::from(format!("/tmp/{}{}", prefix, n));
        self.dirs.borrow_mut().insert(path.clone());
        Ok(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.removed.borrow_mut().push(path.to_path_buf());
        self.dirs.borrow_mut().retain(|d| !d.starts_with(path));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> FsResult<PathBuf> {
        Ok(PathBuf::from(CWD))
    }
}

/// Process runner that records every command and answers from a script
///
/// Scripted results are keyed by `"<program> <first arg>"`, e.g.
/// `"git status"`. Unscripted commands succeed with no output.
#[derive(Default)]
pub struct RecordingRunner {
    responses: RefCell<HashMap<String, CommandResult>>,
    spawn_failures: RefCell<BTreeSet<String>>,
    pub calls: RefCell<Vec<CommandSpec>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, key: &str, result: CommandResult) -> Self {
        self.responses.borrow_mut().insert(key.to_string(), result);
        self
    }

    /// The program behind `key` cannot be started
    pub fn fail_to_spawn(self, key: &str) -> Self {
        self.spawn_failures.borrow_mut().insert(key.to_string());
        self
    }

    /// Executed command lines, one per line
    pub fn transcript(&self) -> String {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.command_line())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn ran(&self, key: &str) -> bool {
        self.calls.borrow().iter().any(|c| key_of(c) == key)
    }
}

fn key_of(command: &CommandSpec) -> String {
    match command.args.first() {
        Some(first) => format!("{} {}", command.program, first),
        None => command.program.clone(),
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult, ProcessError> {
        self.calls.borrow_mut().push(command.clone());
        let key = key_of(command);

        if self.spawn_failures.borrow().contains(&key) {
            return Err(ProcessError::Spawn {
                program: command.program.clone(),
                error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        Ok(self
            .responses
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(CommandResult::success))
    }
}

/// Fetcher answering from a fixed URL table
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

impl ContentFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::new(url, "status code 404"))
    }
}

/// Card sink that keeps written cards, optionally failing every write
#[derive(Default)]
pub struct RecordingSink {
    pub cards: RefCell<Vec<Card>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            cards: RefCell::new(Vec::new()),
            fail: true,
        }
    }
}

impl CardSink for RecordingSink {
    fn write_card(&self, card: &Card) -> Result<(), CardError> {
        if self.fail {
            return Err(CardError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "broken pipe",
            )));
        }
        self.cards.borrow_mut().push(card.clone());
        Ok(())
    }
}
