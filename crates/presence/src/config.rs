//! Check configuration.
//!
//! Everything the checker needs is resolved once at process startup and then passed
//! in: the base directory and the ordered list of files expected beneath it. The
//! checker itself never looks at process-wide state.

use crate::constants::REQUIRED_FILES;
use crate::{PresenceError, PresenceResult};
use distcheck_types::RelativePath;
use std::path::{Path, PathBuf};

/// Ordered, immutable list of files that must exist under the base directory.
///
/// Entries are kept exactly as given, duplicates included. An empty set is allowed
/// and always checks as present.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExpectedFileSet {
    entries: Vec<RelativePath>,
}

impl ExpectedFileSet {
    pub fn new(entries: Vec<RelativePath>) -> Self {
        Self { entries }
    }

    /// Builds a set from raw strings, validating each one as a relative path.
    ///
    /// # Errors
    ///
    /// Returns `PresenceError::InvalidPath` for the first invalid entry, in input order.
    pub fn from_strs<I, S>(entries: I) -> PresenceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(RelativePath::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// The set a frontend build output directory must satisfy: `index.html`, then `error.html`.
    pub fn frontend() -> PresenceResult<Self> {
        Self::from_strs(REQUIRED_FILES)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RelativePath> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExpectedFileSet {
    type Item = &'a RelativePath;
    type IntoIter = std::slice::Iter<'a, RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Configuration for a single presence check.
#[derive(Clone, Debug)]
pub struct CheckConfig {
    base_dir: PathBuf,
    expected: ExpectedFileSet,
}

impl CheckConfig {
    /// Create a new `CheckConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PresenceError::InvalidBaseDirectory` if `base_dir` does not exist
    /// or is not a directory.
    pub fn new(base_dir: PathBuf, expected: ExpectedFileSet) -> PresenceResult<Self> {
        if !base_dir.exists() {
            return Err(PresenceError::InvalidBaseDirectory(format!(
                "Directory does not exist: {}",
                base_dir.display()
            )));
        }

        if !base_dir.is_dir() {
            return Err(PresenceError::InvalidBaseDirectory(format!(
                "Path is not a directory: {}",
                base_dir.display()
            )));
        }

        Ok(Self { base_dir, expected })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn expected(&self) -> &ExpectedFileSet {
        &self.expected
    }
}

/// Resolve the directory the check runs against.
///
/// If `override_dir` is provided it is returned as-is; validation happens in
/// [`CheckConfig::new`]. Otherwise this is the directory containing the running
/// executable, so the binary checks the build output it was dropped into.
pub fn resolve_base_dir(override_dir: Option<PathBuf>) -> PresenceResult<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    let exe = std::env::current_exe().map_err(PresenceError::BaseDirUnresolvable)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        PresenceError::BaseDirUnresolvable(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        ))
    })
}
