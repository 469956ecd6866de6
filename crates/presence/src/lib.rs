//! Required-file presence checks
//!
//! This crate verifies that a frontend build output directory contains the files a
//! deployment depends on before anything is shipped.
//!
//! ## Design Principles
//!
//! - The file list is an explicit [`ExpectedFileSet`], not a literal buried in `main`
//! - Existence is tested per entry; the directory is never listed
//! - All missing entries are collected in declared order, never fail-fast
//! - The check returns a typed [`CheckOutcome`]; only the binary turns it into
//!   console output and an exit code
//!
//! ## Example Usage
//!
//! ```no_run
//! use distcheck_presence::{CheckConfig, ExpectedFileSet, PresenceChecker};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckConfig::new(PathBuf::from("dist"), ExpectedFileSet::frontend()?)?;
//! let outcome = PresenceChecker::new(config).check();
//!
//! if !outcome.is_success() {
//!     eprintln!("missing: {:?}", outcome.missing());
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod constants;
pub mod report;

pub use checker::{check, CheckOutcome, FileProbe, Presence, PresenceChecker};
pub use config::{resolve_base_dir, CheckConfig, ExpectedFileSet};
pub use constants::{ERROR_HTML, INDEX_HTML, MISSING_FILES_PREFIX, REQUIRED_FILES, SUCCESS_MESSAGE};
pub use distcheck_types::{PathError, RelativePath};

/// Errors that can occur while configuring or running a presence check
#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    /// One or more required files were not found under the base directory
    #[error("{}", report::missing_line(.0))]
    MissingRequiredFile(Vec<RelativePath>),

    /// Base directory does not exist or is not a directory
    #[error("Invalid base directory: {0}")]
    InvalidBaseDirectory(String),

    /// The directory of the running executable could not be determined
    #[error("Cannot resolve base directory: {0}")]
    BaseDirUnresolvable(std::io::Error),

    /// An expected file entry failed validation
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),
}

pub type PresenceResult<T> = std::result::Result<T, PresenceError>;
