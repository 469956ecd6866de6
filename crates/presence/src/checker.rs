//! Presence checker implementation
//!
//! The check is a set difference between the expected files and the files present on
//! disk, computed by testing each expected entry directly. The base directory is never
//! listed, so the cost depends only on the number of expected files.
//!
//! # Existence Semantics
//!
//! An entry is present when `base_dir.join(entry)` exists. Symlinks are followed, and
//! a directory with a required file's name counts as present. Anything that prevents
//! the existence test from answering (permission errors, symlink loops) is reported as
//! missing; [`PresenceChecker::probe`] keeps the distinction for diagnostics.

use crate::config::{CheckConfig, ExpectedFileSet};
use crate::PresenceError;
use distcheck_types::RelativePath;
use std::io;
use std::path::Path;

/// Result of testing a single expected entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// The existence test itself failed
    Inaccessible(io::ErrorKind),
}

impl Presence {
    pub fn is_present(self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// Per-entry detail from a single probe pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProbe {
    pub path: RelativePath,
    pub presence: Presence,
}

/// Outcome of a presence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    AllPresent,
    /// Missing entries, in the order they were declared
    SomeMissing(Vec<RelativePath>),
}

impl CheckOutcome {
    fn from_missing(missing: Vec<RelativePath>) -> Self {
        if missing.is_empty() {
            CheckOutcome::AllPresent
        } else {
            CheckOutcome::SomeMissing(missing)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::AllPresent)
    }

    pub fn missing(&self) -> &[RelativePath] {
        match self {
            CheckOutcome::AllPresent => &[],
            CheckOutcome::SomeMissing(missing) => missing,
        }
    }

    /// Process exit status for this outcome: `0` when everything is present, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn into_result(self) -> Result<(), PresenceError> {
        match self {
            CheckOutcome::AllPresent => Ok(()),
            CheckOutcome::SomeMissing(missing) => Err(PresenceError::MissingRequiredFile(missing)),
        }
    }
}

/// Runs presence checks for one configured base directory
///
/// The checker holds no state beyond its configuration; every call to
/// [`check`](Self::check) re-tests the filesystem, so repeated calls against an
/// unchanged directory give identical outcomes.
#[derive(Debug)]
pub struct PresenceChecker {
    config: CheckConfig,
}

impl PresenceChecker {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Tests every expected entry and returns its status, in declared order.
    pub fn probe(&self) -> Vec<FileProbe> {
        probe_all(self.config.base_dir(), self.config.expected())
    }

    pub fn check(&self) -> CheckOutcome {
        let outcome = check(self.config.base_dir(), self.config.expected());
        match &outcome {
            CheckOutcome::AllPresent => tracing::info!(
                "all {} required files present in {}",
                self.config.expected().len(),
                self.config.base_dir().display()
            ),
            CheckOutcome::SomeMissing(missing) => tracing::info!(
                "{} of {} required files missing in {}",
                missing.len(),
                self.config.expected().len(),
                self.config.base_dir().display()
            ),
        }
        outcome
    }
}

/// Checks that every entry of `expected` exists under `base_dir`.
///
/// All missing entries are collected before returning; the check never stops at the
/// first absent file.
pub fn check(base_dir: &Path, expected: &ExpectedFileSet) -> CheckOutcome {
    let missing = probe_all(base_dir, expected)
        .into_iter()
        .filter(|probe| !probe.presence.is_present())
        .map(|probe| probe.path)
        .collect();
    CheckOutcome::from_missing(missing)
}

fn probe_all(base_dir: &Path, expected: &ExpectedFileSet) -> Vec<FileProbe> {
    expected
        .iter()
        .map(|entry| FileProbe {
            path: entry.clone(),
            presence: probe_one(base_dir, entry),
        })
        .collect()
}

fn probe_one(base_dir: &Path, entry: &RelativePath) -> Presence {
    let full_path = base_dir.join(entry.as_path());
    let presence = match full_path.try_exists() {
        Ok(true) => Presence::Present,
        Ok(false) => Presence::Absent,
        Err(e) => {
            tracing::warn!(
                "cannot determine whether {} exists, treating as missing: {}",
                full_path.display(),
                e
            );
            Presence::Inaccessible(e.kind())
        }
    };
    tracing::debug!("probe {} -> {:?}", full_path.display(), presence);
    presence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ERROR_HTML, INDEX_HTML};
    use std::fs;
    use tempfile::TempDir;

    /// Writes each named file into `dir` with placeholder content
    fn create_files(dir: &Path, names: &[&str]) {
        for name in names {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            fs::write(&path, "<html></html>").expect("Failed to write file");
        }
    }

    fn names(outcome: &CheckOutcome) -> Vec<&str> {
        outcome.missing().iter().map(RelativePath::as_str).collect()
    }

    #[test]
    fn test_all_present() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[INDEX_HTML, ERROR_HTML]);

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert_eq!(outcome, CheckOutcome::AllPresent);
        assert!(outcome.is_success());
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_error_page_missing() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[INDEX_HTML]);

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert_eq!(names(&outcome), vec!["error.html"]);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_both_missing_in_declared_order() {
        let temp = TempDir::new().unwrap();

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert_eq!(names(&outcome), vec!["index.html", "error.html"]);
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_extra_files_ignored() {
        let temp = TempDir::new().unwrap();
        create_files(
            temp.path(),
            &[INDEX_HTML, ERROR_HTML, "main.js", "assets/logo.svg", "robots.txt"],
        );

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert_eq!(outcome, CheckOutcome::AllPresent);
    }

    #[test]
    fn test_every_subset_reported_exactly() {
        let expected = ExpectedFileSet::from_strs(["a.html", "b.html", "c/d.html"]).unwrap();
        let all: Vec<&str> = expected.iter().map(RelativePath::as_str).collect();

        for mask in 0u8..(1 << all.len()) {
            let temp = TempDir::new().unwrap();
            let present: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| *name)
                .collect();
            create_files(temp.path(), &present);

            let outcome = check(temp.path(), &expected);
            let absent: Vec<&str> = all
                .iter()
                .filter(|name| !present.contains(*name))
                .copied()
                .collect();

            assert_eq!(names(&outcome), absent, "mask {mask:03b}");
            assert_eq!(outcome.exit_code() != 0, !absent.is_empty());
        }
    }

    #[test]
    fn test_empty_set_is_all_present() {
        let temp = TempDir::new().unwrap();

        let outcome = check(temp.path(), &ExpectedFileSet::default());

        assert_eq!(outcome, CheckOutcome::AllPresent);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_check_is_idempotent() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[ERROR_HTML]);

        let expected = ExpectedFileSet::frontend().unwrap();
        let config = CheckConfig::new(temp.path().to_path_buf(), expected).unwrap();
        let checker = PresenceChecker::new(config);

        let first = checker.check();
        let second = checker.check();

        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["index.html"]);
    }

    #[test]
    fn test_check_reflects_filesystem_changes() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[INDEX_HTML]);

        let expected = ExpectedFileSet::frontend().unwrap();
        let config = CheckConfig::new(temp.path().to_path_buf(), expected).unwrap();
        let checker = PresenceChecker::new(config);
        assert!(!checker.check().is_success());

        create_files(temp.path(), &[ERROR_HTML]);
        assert!(checker.check().is_success());
    }

    #[test]
    fn test_directory_with_required_name_counts_as_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(INDEX_HTML)).unwrap();
        create_files(temp.path(), &[ERROR_HTML]);

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert!(outcome.is_success());
    }

    #[test]
    fn test_duplicate_missing_entry_reported_twice() {
        let temp = TempDir::new().unwrap();
        let expected = ExpectedFileSet::from_strs([INDEX_HTML, INDEX_HTML]).unwrap();

        let outcome = check(temp.path(), &expected);

        assert_eq!(names(&outcome), vec!["index.html", "index.html"]);
    }

    #[test]
    fn test_probe_reports_each_entry() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[INDEX_HTML]);

        let expected = ExpectedFileSet::frontend().unwrap();
        let config = CheckConfig::new(temp.path().to_path_buf(), expected).unwrap();
        let probes = PresenceChecker::new(config).probe();

        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].path.as_str(), INDEX_HTML);
        assert_eq!(probes[0].presence, Presence::Present);
        assert_eq!(probes[1].path.as_str(), ERROR_HTML);
        assert_eq!(probes[1].presence, Presence::Absent);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_missing() {
        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &[INDEX_HTML]);
        std::os::unix::fs::symlink(temp.path().join("gone.html"), temp.path().join(ERROR_HTML))
            .unwrap();

        let outcome = check(temp.path(), &ExpectedFileSet::frontend().unwrap());

        assert_eq!(names(&outcome), vec!["error.html"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_parent_is_missing() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        create_files(temp.path(), &["locked/index.html"]);
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let expected = ExpectedFileSet::from_strs(["locked/index.html"]).unwrap();
        let config = CheckConfig::new(temp.path().to_path_buf(), expected.clone()).unwrap();
        let probes = PresenceChecker::new(config).probe();
        let outcome = check(temp.path(), &expected);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users bypass the mode bits and still see the file.
        if probes[0].presence.is_present() {
            assert!(outcome.is_success());
        } else {
            assert!(matches!(
                probes[0].presence,
                Presence::Inaccessible(_) | Presence::Absent
            ));
            assert_eq!(names(&outcome), vec!["locked/index.html"]);
        }
    }

    #[test]
    fn test_into_result() {
        assert!(CheckOutcome::AllPresent.into_result().is_ok());

        let missing = vec![RelativePath::new(ERROR_HTML).unwrap()];
        let result = CheckOutcome::SomeMissing(missing.clone()).into_result();
        match result {
            Err(PresenceError::MissingRequiredFile(found)) => assert_eq!(found, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
