//! Console rendering of check outcomes.
//!
//! Success goes to stdout as a single confirmation line. Failure goes to stderr as a
//! single line naming every missing file, e.g.
//! `Missing required files: [index.html, error.html]`.

use crate::checker::CheckOutcome;
use crate::constants::{MISSING_FILES_PREFIX, SUCCESS_MESSAGE};
use distcheck_types::RelativePath;
use std::io::{self, Write};

pub fn success_line() -> &'static str {
    SUCCESS_MESSAGE
}

/// Formats the failure line, listing `missing` in the order given.
pub fn missing_line(missing: &[RelativePath]) -> String {
    let names: Vec<&str> = missing.iter().map(RelativePath::as_str).collect();
    format!("{} [{}]", MISSING_FILES_PREFIX, names.join(", "))
}

/// Writes the line for `outcome` to the matching stream.
///
/// Nothing is written to `err` on success, and nothing to `out` on failure.
pub fn write_report<O: Write, E: Write>(
    outcome: &CheckOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        CheckOutcome::AllPresent => {
            writeln!(out, "{}", success_line())?;
            out.flush()
        }
        CheckOutcome::SomeMissing(missing) => {
            writeln!(err, "{}", missing_line(missing))?;
            err.flush()
        }
    }
}
