//! ANSI styling
//!
//! [`AnsiStyler`] paints with `colored`, so it honours the global color
//! override set by [`ColorMode::apply`]. Stripping removes any ANSI escape
//! sequence, whoever produced it.

use colored::Colorize;
use declarative::{Style, Styler};
use std::fmt;
use std::str::FromStr;

/// When to emit colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the terminal supports it
    #[default]
    Auto,
    /// Always color, even when piped
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Set the process-wide color override
    pub fn apply(self) {
        let enabled = match self {
            Self::Auto => console::colors_enabled(),
            Self::Always => true,
            Self::Never => false,
        };
        colored::control::set_override(enabled);
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown color mode '{other}' (expected auto, always or never)")),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        };
        f.write_str(name)
    }
}

/// [`Styler`] emitting ANSI escape sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, style: Style, text: &str) -> String {
        match style {
            Style::Addition => text.green().to_string(),
            Style::Removal => text.red().to_string(),
            Style::Highlight => text.yellow().to_string(),
            Style::Bold => text.bold().to_string(),
            Style::Underline => text.underline().to_string(),
            Style::Normal => text.to_string(),
        }
    }

    fn strip(&self, text: &str) -> String {
        console::strip_ansi_codes(text).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_escapes() {
        assert_eq!(AnsiStyler.strip("\x1b[32m+ Role=a\x1b[0m"), "+ Role=a");
        assert_eq!(AnsiStyler.strip("\x1b[1mname\x1b[0m: x"), "name: x");
    }

    #[test]
    fn test_strip_plain_is_identity() {
        assert_eq!(AnsiStyler.strip("  Role=a:"), "  Role=a:");
    }

    #[test]
    fn test_paint_then_strip() {
        colored::control::set_override(true);
        let painted = AnsiStyler.paint(Style::Removal, "- Role=a");
        assert!(painted.contains("\x1b["));
        assert_eq!(AnsiStyler.strip(&painted), "- Role=a");
        assert_eq!(AnsiStyler.paint(Style::Normal, "x"), "x");
        colored::control::unset_override();
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!("ALWAYS".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
        assert_eq!(ColorMode::Never.to_string(), "never");
    }
}
