//! Constants used throughout the presence crate.
//!
//! Filenames and console messages live here so the checker, the report
//! renderer and the tests agree on them.

/// Entry page of the frontend build.
pub const INDEX_HTML: &str = "index.html";

/// Error page served for unknown routes.
pub const ERROR_HTML: &str = "error.html";

/// Files a frontend build output directory must contain, in reporting order.
pub const REQUIRED_FILES: [&str; 2] = [INDEX_HTML, ERROR_HTML];

/// Printed on stdout when every required file exists.
pub const SUCCESS_MESSAGE: &str = "All required files exist!";

/// Leads the stderr line that lists missing files.
pub const MISSING_FILES_PREFIX: &str = "Missing required files:";
