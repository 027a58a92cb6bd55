//! # termkit
//!
//! Terminal toolkit for the ciadmin CLI.
//!
//! This crate provides the terminal side of the CLI:
//! - **Messages**: Consistent warning, error, and success output
//! - **Layout**: Headers and key-value pairs
//! - **Style**: [`AnsiStyler`], the ANSI implementation of
//!   [`declarative::Styler`], and [`ColorMode`] control
//!
//! ## Quick Start
//!
//! ```no_run
//! use termkit::{messages, layout, AnsiStyler, ColorMode};
//! use declarative::{Style, Styler};
//!
//! ColorMode::Auto.apply();
//!
//! // Messages
//! messages::warn("--grep matched no resources");
//! messages::success("No differences");
//!
//! // Layout
//! layout::header("generated.json");
//! layout::kv("Resources", "42");
//!
//! // Styling
//! let line = AnsiStyler.paint(Style::Addition, "+ Role=admin");
//! assert_eq!(AnsiStyler.strip(&line), "+ Role=admin");
//! ```
//!
//! ## Design Philosophy
//!
//! termkit provides opinionated defaults for a consistent look:
//! - Success: green checkmark (✓)
//! - Error: red cross (✗)
//! - Warning: yellow warning sign (⚠)
//! - Additions green, removals red, changes yellow

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod layout;
pub mod messages;
pub mod style;

// Re-export commonly used items at crate root for convenience
pub use layout::{header, kv};
pub use messages::{error, success, warn};
pub use style::{AnsiStyler, ColorMode};
