//! Test environment for driving the ghpages binary end to end.
//!
//! `TestEnv` owns three temp directories:
//! - `workspace` - the build's working directory, holding the site
//! - `home` - home for credentials and the global git config
//! - `remote` - a bare repository with a seeded `gh-pages` branch

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::BRANCH_CNAME;

pub const BRANCH: &str = "gh-pages";

/// Result of running the ghpages binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// `git` and `rsync` are both on PATH
pub fn tools_available() -> bool {
    ["git", "rsync"].iter().all(|program| {
        Command::new(program)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

/// Set to a non-empty value to fail, rather than skip, tests needing git and rsync
pub const REQUIRE_TOOLS_VAR: &str = "GHPAGES_REQUIRE_TOOLS";

/// Whether a test needing the external tools should run
///
/// Missing tools skip the test with a message, or panic when they are
/// required.
pub fn check_tools(available: bool, required: bool) -> bool {
    if available {
        return true;
    }
    if required {
        panic!("git and rsync are required but missing ({} is set)", REQUIRE_TOOLS_VAR);
    }
    eprintln!(
        "skipping: git and rsync are required (set {} to fail instead)",
        REQUIRE_TOOLS_VAR
    );
    false
}

pub fn tools_required() -> bool {
    std::env::var_os(REQUIRE_TOOLS_VAR).is_some_and(|v| !v.is_empty())
}

/// Skip the calling test when the external tools are missing
#[macro_export]
macro_rules! require_tools {
    () => {
        if !$crate::common::env::check_tools(
            $crate::common::env::tools_available(),
            $crate::common::env::tools_required(),
        ) {
            return;
        }
    };
}

pub struct TestEnv {
    pub workspace: TempDir,
    pub home: TempDir,
    pub remote: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Fresh environment whose remote has a `gh-pages` branch holding a CNAME
    pub fn new() -> Self {
        let env = Self {
            workspace: TempDir::new().expect("Failed to create workspace"),
            home: TempDir::new().expect("Failed to create home"),
            remote: TempDir::new().expect("Failed to create remote"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ghpages")),
        };
        env.seed_remote();
        env
    }

    pub fn remote_url(&self) -> String {
        self.remote.path().join("site.git").display().to_string()
    }

    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Write a file into the workspace, creating parents
    pub fn write_site_file(&self, relative: &str, content: &[u8]) {
        let path = self.workspace_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Environment every child process gets: isolated home and git config
    fn isolate(&self, cmd: &mut Command) {
        for (key, _) in std::env::vars_os() {
            let key = key.to_string_lossy().to_string();
            if key.starts_with("PLUGIN_") || key.starts_with("DRONE_") || key.starts_with("GIT_") {
                cmd.env_remove(key);
            }
        }
        cmd.env("HOME", self.home.path())
            .env("GHPAGES_HOME", self.home.path())
            .env("GIT_CONFIG_GLOBAL", self.home.path().join(".gitconfig"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("RUST_LOG");
    }

    /// Run ghpages in the workspace with the given plugin settings
    pub fn run(&self, settings: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.workspace.path());
        self.isolate(&mut cmd);
        for (key, value) in settings {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ghpages");
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Minimal settings for a successful local publish
    pub fn base_settings(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PLUGIN_REMOTE_URL", self.remote_url()),
            ("PLUGIN_SSH_KEY", super::fixtures::SSH_KEY.to_string()),
            ("PLUGIN_USER_NAME", "Octo Cat".to_string()),
            ("PLUGIN_USER_EMAIL", "octocat@example.com".to_string()),
            ("PLUGIN_MESSAGE", "Publish site".to_string()),
        ]
    }

    pub fn run_with(&self, extra: &[(&'static str, &str)]) -> TestResult {
        let mut settings = self.base_settings();
        for &(key, value) in extra {
            settings.retain(|(k, _)| *k != key);
            settings.push((key, value.to_string()));
        }
        let borrowed: Vec<(&str, &str)> = settings.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.run(&borrowed)
    }

    /// Run git with the isolated environment
    pub fn git(&self, cwd: &Path, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.current_dir(cwd).args(args);
        self.isolate(&mut cmd);
        let output = cmd.output().expect("Failed to execute git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Commits on the remote pages branch
    pub fn commit_count(&self) -> usize {
        let out = self.git(
            &self.remote.path().join("site.git"),
            &["rev-list", "--count", BRANCH],
        );
        String::from_utf8_lossy(&out.stdout).trim().parse().unwrap_or(0)
    }

    pub fn last_commit_message(&self) -> String {
        let out = self.git(
            &self.remote.path().join("site.git"),
            &["log", "-1", "--format=%B", BRANCH],
        );
        String::from_utf8_lossy(&out.stdout).trim_end().to_string()
    }

    /// Clone the pages branch into a new temp dir for inspection
    pub fn checkout_branch(&self) -> TempDir {
        let dir = TempDir::new().expect("Failed to create checkout");
        let target = dir.path().join("site");
        self.git(
            dir.path(),
            &["clone", "--branch", BRANCH, &self.remote_url(), &target.display().to_string()],
        );
        dir
    }

    fn seed_remote(&self) {
        let bare = self.remote.path().join("site.git");
        self.git(self.remote.path(), &["init", "--bare", &bare.display().to_string()]);

        let seed = TempDir::new().expect("Failed to create seed");
        let root = seed.path();
        self.git(root, &["init"]);
        self.git(root, &["checkout", "-b", BRANCH]);
        std::fs::write(root.join("CNAME"), BRANCH_CNAME).expect("Failed to write CNAME");
        self.git(root, &["add", "."]);
        self.git(
            root,
            &[
                "-c",
                "user.name=Seed",
                "-c",
                "user.email=seed@example.com",
                "commit",
                "-m",
                "Initial pages",
            ],
        );
        self.git(root, &["push", &bare.display().to_string(), &format!("{}:{}", BRANCH, BRANCH)]);
    }
}
