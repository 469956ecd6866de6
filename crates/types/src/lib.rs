use std::path::{Component, Path};

/// Errors that can occur when creating a validated relative path.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    /// The input was empty or contained only whitespace
    #[error("Path cannot be empty")]
    Empty,
    /// The input was an absolute path or carried a root/prefix
    #[error("Path must be relative: {0}")]
    Absolute(String),
    /// The input contained a `..` component
    #[error("Path must not leave its base directory: {0}")]
    EscapesBase(String),
}

/// A path string that is guaranteed to be relative and to stay inside the
/// directory it is joined onto.
///
/// The input is trimmed of leading and trailing whitespace during construction.
/// Absolute paths, rooted paths and paths containing `..` are rejected, so
/// `base.join(path)` never resolves outside `base`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Creates a new `RelativePath` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Empty` if the trimmed input is empty,
    /// `PathError::Absolute` if it is rooted, and `PathError::EscapesBase`
    /// if any component is `..`.
    pub fn new(input: impl AsRef<str>) -> Result<Self, PathError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let path = Path::new(trimmed);
        if path.has_root() || path.is_absolute() {
            return Err(PathError::Absolute(trimmed.to_owned()));
        }

        for component in path.components() {
            match component {
                Component::ParentDir => {
                    return Err(PathError::EscapesBase(trimmed.to_owned()));
                }
                Component::Prefix(_) | Component::RootDir => {
                    return Err(PathError::Absolute(trimmed.to_owned()));
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the entry as a `Path`, ready to be joined onto a base directory.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl std::str::FromStr for RelativePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
