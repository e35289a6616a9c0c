//! Advisory lint of the raw inputs
//!
//! Flags deprecated or contradictory settings. Never fails a run; the
//! summary is logged and attached to the card.

use std::fmt::Write as _;

use super::resolve::{present, RawArgs};

/// Outcome of a lint pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    warnings: Vec<String>,
}

impl LintReport {
    pub fn issues(&self) -> usize {
        self.warnings.len()
    }

    /// `lint: N issue(s) found` followed by one warning per line
    pub fn summary(&self) -> String {
        let mut out = format!("lint: {} issue(s) found\n", self.issues());
        for warning in &self.warnings {
            let _ = writeln!(out, "{}", warning);
        }
        out
    }

    fn flag(&mut self, warning: &str) {
        self.warnings.push(warning.to_string());
    }
}

pub fn lint_args(args: &RawArgs) -> LintReport {
    let mut report = LintReport::default();

    if present(&args.upstream_name).is_some() {
        report.flag("remove upstream_name from config, it is deprecated");
    }

    if present(&args.netrc_machine).is_some() {
        report.flag("remove netrc_machine from config, it is deprecated");
    }

    if present(&args.temporary_base).is_some() {
        report.flag("remove temporary_base from config, it is deprecated");
    }

    if let (Some(remote), Some(link)) = (present(&args.remote_url), present(&args.build.repo.link)) {
        if remote == link {
            report.flag("remove remote_url, its value is redundant");
        }
    }

    if present(&args.ssh_key).is_some() && present(&args.password).is_some() {
        report.flag("both key and password are set, choose one auth method");
    }

    if present(&args.pages_directory).is_some_and(|d| d.ends_with('/')) {
        report.flag(
            "remove trailing slash from pages_directory and set copy_contents to `true` to sync the contents of the directory",
        );
    }

    if present(&args.target_directory).is_some_and(|d| d.ends_with('/')) {
        report.flag(
            "remove trailing slash from target_directory and set copy_contents to `true` to sync the contents of the directory",
        );
    }

    report
}
