//! Diff computation between a generated and a current collection
//!
//! Two modes:
//! - [`textual_diff`]: a colorized unified diff of the full renderings, with
//!   each hunk header labelled by the resource it starts in
//! - [`id_diff`]: one line per added, removed or changed resource id

use crate::context::{Style, Styler};
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::resources::{RESOURCES_ANCHOR, Resources};
use serde::{Deserialize, Serialize};
use similar::TextDiff;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Lines of context around each hunk in a textual diff
pub const DEFAULT_CONTEXT_LINES: usize = 8;

/// Options for textual diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Unchanged lines shown on either side of a change
    pub context_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// Unified diff from `current` to `generated`, with default options
pub fn textual_diff(
    generated: &Resources,
    current: &Resources,
    styler: &dyn Styler,
) -> Result<String> {
    textual_diff_with(generated, current, styler, DiffOptions::default())
}

/// Unified diff from `current` to `generated`
///
/// Returns an empty string when the renderings are identical.
pub fn textual_diff_with(
    generated: &Resources,
    current: &Resources,
    styler: &dyn Styler,
    options: DiffOptions,
) -> Result<String> {
    let old = current.render(styler)?;
    let new = generated.render(styler)?;
    let left: Vec<&str> = old.split('\n').collect();
    let anchor = left
        .iter()
        .position(|line| *line == RESOURCES_ANCHOR)
        .ok_or(Error::MissingAnchor)?;

    // terminate both sides so no hunk carries a missing-newline marker
    let old_text = format!("{old}\n");
    let new_text = format!("{new}\n");
    let diff = TextDiff::from_lines(&old_text, &new_text);
    let unified = diff
        .unified_diff()
        .context_radius(options.context_lines)
        .header("current", "generated")
        .to_string();

    let lines: Vec<String> = unified
        .lines()
        .map(|line| {
            let line = if line.is_empty() { " " } else { line };
            let styled = match line.chars().next() {
                Some('-') => styler.paint(Style::Removal, &styler.strip(line)),
                Some('+') => styler.paint(Style::Addition, &styler.strip(line)),
                Some('@') => format!(
                    "{} {}",
                    styler.paint(Style::Highlight, &styler.strip(line)),
                    context_label(line, &left, anchor, styler)
                ),
                _ => line.to_string(),
            };
            styled.trim_end().to_string()
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Id of the resource a hunk starts in
///
/// Scans backwards from the hunk's first line in the current rendering,
/// stopping at the resources anchor.
fn context_label(range: &str, left: &[&str], anchor: usize, styler: &dyn Styler) -> String {
    let Some(start) = hunk_start(&styler.strip(range)) else {
        return String::new();
    };

    let mut line = start.min(left.len());
    while line > anchor {
        line -= 1;
        if let Some(header) = resource_header(&styler.strip(left[line])) {
            return header.trim_end_matches(':').to_string();
        }
    }
    String::new()
}

/// First line of the old range in `@@ -start[,len] ...`
fn hunk_start(range: &str) -> Option<usize> {
    let rest = range.strip_prefix("@@ -")?;
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Text of a line indented by exactly two spaces
fn resource_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("  ")?;
    match rest.chars().next() {
        Some(c) if c != ' ' => Some(rest),
        _ => None,
    }
}

/// A single entry of an identity diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum IdChange {
    /// Only in the generated collection
    Added { id: String },
    /// Only in the current collection
    Removed { id: String },
    /// In both, with differences in the named fields (or `kind`)
    Changed { id: String, fields: Vec<String> },
}

impl IdChange {
    pub fn id(&self) -> &str {
        match self {
            Self::Added { id } | Self::Removed { id } | Self::Changed { id, .. } => id,
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Added { .. } => Style::Addition,
            Self::Removed { .. } => Style::Removal,
            Self::Changed { .. } => Style::Highlight,
        }
    }
}

impl fmt::Display for IdChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { id } => write!(f, "+ {id}"),
            Self::Removed { id } => write!(f, "- {id}"),
            Self::Changed { id, fields } => write!(f, "! {id} (changed: {})", fields.join(", ")),
        }
    }
}

/// Per-id differences between two collections, in ascending id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDiff {
    pub changes: Vec<IdChange>,
}

impl IdentityDiff {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// One styled line per change
    pub fn render(&self, styler: &dyn Styler) -> String {
        self.changes
            .iter()
            .map(|change| styler.paint(change.style(), &change.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for change in &self.changes {
            match change {
                IdChange::Added { .. } => summary.additions += 1,
                IdChange::Removed { .. } => summary.removals += 1,
                IdChange::Changed { .. } => summary.changes += 1,
            }
        }
        summary
    }
}

/// Diff summary statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Resources only in generated
    pub additions: usize,
    /// Resources only in current
    pub removals: usize,
    /// Resources in both that differ
    pub changes: usize,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.additions + self.removals + self.changes
    }
}

/// Compare ids and field values of `current` against `generated`
pub fn id_diff(generated: &Resources, current: &Resources) -> Result<IdentityDiff> {
    generated.verify()?;
    current.verify()?;

    let generated_by_id: BTreeMap<&str, &Resource> =
        generated.iter().map(|r| (r.id(), r)).collect();
    let current_by_id: BTreeMap<&str, &Resource> =
        current.iter().map(|r| (r.id(), r)).collect();
    let ids: BTreeSet<&str> = generated_by_id
        .keys()
        .chain(current_by_id.keys())
        .copied()
        .collect();

    let mut changes = Vec::new();
    for id in ids {
        let change = match (generated_by_id.get(id), current_by_id.get(id)) {
            (Some(g), Some(c)) => {
                if g == c {
                    continue;
                }
                let fields = if g.kind() == c.kind() {
                    c.changed_fields(g).into_iter().map(String::from).collect()
                } else {
                    vec!["kind".to_string()]
                };
                IdChange::Changed {
                    id: id.to_string(),
                    fields,
                }
            }
            (Some(_), None) => IdChange::Added { id: id.to_string() },
            (None, Some(_)) => IdChange::Removed { id: id.to_string() },
            (None, None) => continue,
        };
        changes.push(change);
    }

    Ok(IdentityDiff { changes })
}
