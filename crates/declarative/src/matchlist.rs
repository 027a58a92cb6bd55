//! Managed patterns
//!
//! A [`MatchList`] declares which resource ids a collection is authoritative
//! for. Each pattern is a regular expression matched against the whole id.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;

/// Ordered list of anchored id patterns
#[derive(Clone, Default)]
pub struct MatchList {
    patterns: Vec<String>,
    compiled: Vec<Regex>,
}

impl MatchList {
    /// Build a list from patterns, in order
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for pattern in patterns {
            list.add(pattern)?;
        }
        Ok(list)
    }

    /// Append a pattern; duplicates are allowed
    pub fn add(&mut self, pattern: impl Into<String>) -> Result<()> {
        let pattern = pattern.into();
        let compiled =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        self.patterns.push(pattern);
        self.compiled.push(compiled);
        Ok(())
    }

    /// True if any pattern matches the entire id
    pub fn matches(&self, id: &str) -> bool {
        self.compiled.iter().any(|re| re.is_match(id))
    }

    /// Patterns in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.patterns.clone()
    }
}

impl fmt::Debug for MatchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.patterns).finish()
    }
}

impl PartialEq for MatchList {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl Eq for MatchList {}
