//! Command builders for git and rsync
//!
//! Pure functions from configuration to `CommandSpec`. Nothing here runs a
//! process.

use std::path::Path;

use crate::domain::entities::PublishConfig;
use crate::domain::ports::CommandSpec;

/// `git clone --branch <branch> --origin <name> --single-branch <remote> <checkout>`
pub fn clone_branch(config: &PublishConfig) -> CommandSpec {
    CommandSpec::new("git").args([
        "clone".to_string(),
        "--branch".to_string(),
        config.branch.clone(),
        "--origin".to_string(),
        config.remote_name.clone(),
        "--single-branch".to_string(),
        config.remote.as_str().to_string(),
        config.checkout.display().to_string(),
    ])
}

/// `rsync -r --exclude .git [--exclude CNAME] [--delete] <source>[/] <destination>`
///
/// A trailing separator on the source makes rsync copy the directory's
/// contents instead of the directory itself.
pub fn rsync_pages(config: &PublishConfig) -> CommandSpec {
    let mut cmd = CommandSpec::new("rsync").args(["-r", "--exclude", ".git"]);

    if config.sync.exclude_cname {
        cmd = cmd.args(["--exclude", "CNAME"]);
    }

    if config.sync.delete {
        cmd = cmd.arg("--delete");
    }

    let mut source = config.source.display().to_string();
    if config.sync.copy_contents && !source.ends_with(std::path::MAIN_SEPARATOR) {
        source.push(std::path::MAIN_SEPARATOR);
    }

    cmd.arg(source).arg(config.destination().display().to_string())
}

/// `git status --porcelain`, captured
pub fn status_porcelain(checkout: &Path) -> CommandSpec {
    CommandSpec::new("git")
        .args(["status", "--porcelain"])
        .current_dir(checkout)
        .capture()
}

/// `git add .`
pub fn stage_all(checkout: &Path) -> CommandSpec {
    CommandSpec::new("git").args(["add", "."]).current_dir(checkout)
}

/// `git commit -m <message>`
pub fn commit(checkout: &Path, message: &str) -> CommandSpec {
    CommandSpec::new("git")
        .args(["commit", "-m", message])
        .current_dir(checkout)
}

/// `git push [--force] <remote> HEAD:<branch>`
pub fn push(checkout: &Path, remote_name: &str, branch: &str, force: bool) -> CommandSpec {
    let mut cmd = CommandSpec::new("git").arg("push");
    if force {
        cmd = cmd.arg("--force");
    }
    cmd.arg(remote_name)
        .arg(format!("HEAD:{}", branch))
        .current_dir(checkout)
}

/// `git config --global <key> <value>`
pub fn global_config(key: &str, value: &str) -> CommandSpec {
    CommandSpec::new("git").args(["config", "--global", key, value])
}
