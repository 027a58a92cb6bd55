//! Kind registry - maps kind tags to their schemas
//!
//! Applications build one registry at startup, registering every kind they
//! know about, and pass it to deserialization.

use crate::error::{Error, Result};
use crate::schema::{Kind, Schema};
use std::collections::BTreeMap;

/// Immutable lookup table from kind tag to [`Schema`]
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    kinds: BTreeMap<&'static str, Schema>,
}

impl KindRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the kind `T`, replacing any kind with the same tag
    pub fn register<T: Kind>(mut self) -> Self {
        self.kinds.insert(T::KIND, Schema::of::<T>());
        self
    }

    /// Look up a kind by its exact (case-sensitive) tag
    pub fn get(&self, kind: &str) -> Result<Schema> {
        self.kinds
            .get(kind)
            .copied()
            .ok_or_else(|| Error::UnknownKind(kind.to_string()))
    }

    /// Check whether a tag is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Registered tags in sorted order
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }
}
