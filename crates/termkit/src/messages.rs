//! User-facing status messages
//!
//! Status lines go to stdout, warnings and errors to stderr.

use colored::Colorize;
use std::fmt::Display;

/// Print a success message
pub fn success(msg: impl Display) {
    println!("{} {msg}", "✓".green());
}

/// Print a warning message
pub fn warn(msg: impl Display) {
    eprintln!("{} {msg}", "⚠".yellow());
}

/// Print an error message
pub fn error(msg: impl Display) {
    eprintln!("{} {msg}", "✗".red());
}
