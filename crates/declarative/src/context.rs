//! Styling capability
//!
//! Rendering and diffing only need to color text by meaning and to remove
//! existing formatting. This trait lets the declarative crate do that without
//! depending on a specific terminal library.

/// Semantic category of a piece of rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Something the generated side adds
    Addition,
    /// Something the generated side removes
    Removal,
    /// Hunk headers and changed ids
    Highlight,
    /// Field labels
    Bold,
    /// Resource headers
    Underline,
    /// Unstyled text
    Normal,
}

/// Provider for text styling
///
/// Implement this trait to decide how each [`Style`] looks on the output
/// device.
pub trait Styler {
    /// Wrap `text` in the formatting for `style`
    fn paint(&self, style: Style, text: &str) -> String;

    /// Remove any formatting from `text`
    ///
    /// Must be idempotent: stripping plain text returns it unchanged.
    fn strip(&self, text: &str) -> String;
}

/// Styler that never adds formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Styler for PlainStyle {
    fn paint(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }

    fn strip(&self, text: &str) -> String {
        text.to_string()
    }
}
