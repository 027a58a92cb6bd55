//! Resource collections
//!
//! [`Resources`] is an ordered set of resources plus the [`MatchList`] that
//! authorizes them. Two invariants hold whenever a collection is serialized,
//! rendered or diffed:
//!
//! - no two resources share an id
//! - every id matches at least one managed pattern

use crate::context::Styler;
use crate::error::{Error, Result};
use crate::format::indent;
use crate::matchlist::MatchList;
use crate::registry::KindRegistry;
use crate::resource::Resource;
use crate::schema::Values;
use serde::{Deserialize, Serialize};

/// Line that separates the managed patterns from the resources when rendered
pub const RESOURCES_ANCHOR: &str = "resources:";

/// Structured form of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcesDocument {
    /// Structured resources, each with a `kind` key
    #[serde(default)]
    pub resources: Vec<Values>,
    /// Managed patterns, verbatim
    #[serde(default)]
    pub managed: Vec<String>,
}

/// A verified collection of resources, kept sorted by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    resources: Vec<Resource>,
    managed: MatchList,
}

impl Resources {
    /// Build a collection and verify it
    pub fn new(resources: impl IntoIterator<Item = Resource>, managed: MatchList) -> Result<Self> {
        let mut resources: Vec<Resource> = resources.into_iter().collect();
        resources.sort_by(|a, b| a.id().cmp(b.id()));
        let collection = Self { resources, managed };
        collection.verify()?;
        Ok(collection)
    }

    /// Add a resource, keeping the collection sorted
    ///
    /// Fails if the resource is not managed. Duplicates are reported by the
    /// next [`verify`](Self::verify).
    pub fn add(&mut self, resource: Resource) -> Result<()> {
        if !self.is_managed(resource.id()) {
            return Err(Error::UnmanagedResource(resource.id().to_string()));
        }
        let at = self.resources.partition_point(|r| r.id() <= resource.id());
        self.resources.insert(at, resource);
        Ok(())
    }

    /// Add a pattern to the managed list
    pub fn manage(&mut self, pattern: impl Into<String>) -> Result<()> {
        self.managed.add(pattern)
    }

    /// True if some managed pattern matches `id`
    pub fn is_managed(&self, id: &str) -> bool {
        self.managed.matches(id)
    }

    /// Check that there are no duplicates and every resource is managed
    pub fn verify(&self) -> Result<()> {
        // sort explicitly so the adjacent-pair scan never trusts container order
        let mut ids: Vec<&str> = self.resources.iter().map(Resource::id).collect();
        ids.sort_unstable();

        let mut dupes: Vec<String> = ids
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0].to_string())
            .collect();
        dupes.dedup();
        if !dupes.is_empty() {
            return Err(Error::DuplicateResources(dupes));
        }

        let unmanaged: Vec<String> = ids
            .iter()
            .filter(|id| !self.is_managed(id))
            .map(|id| (*id).to_string())
            .collect();
        if !unmanaged.is_empty() {
            return Err(Error::UnmanagedResources(unmanaged));
        }

        Ok(())
    }

    /// Resources in ascending id order
    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    /// Find a resource by id
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources
            .binary_search_by(|r| r.id().cmp(id))
            .ok()
            .map(|i| &self.resources[i])
    }

    pub fn managed(&self) -> &MatchList {
        &self.managed
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// New collection with only the resources matching `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Result<Self>
    where
        F: FnMut(&Resource) -> bool,
    {
        Self::new(
            self.resources.iter().filter(|r| predicate(*r)).cloned(),
            self.managed.clone(),
        )
    }

    /// New collection with every resource replaced by `f(resource)`
    pub fn try_map<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&Resource) -> Result<Resource>,
    {
        let resources = self.resources.iter().map(f).collect::<Result<Vec<_>>>()?;
        Self::new(resources, self.managed.clone())
    }

    /// Structured form, after verification
    pub fn to_structured(&self) -> Result<ResourcesDocument> {
        self.verify()?;
        Ok(ResourcesDocument {
            resources: self.resources.iter().map(Resource::to_structured).collect(),
            managed: self.managed.to_vec(),
        })
    }

    /// Rebuild a collection from its structured form
    pub fn from_structured(registry: &KindRegistry, document: ResourcesDocument) -> Result<Self> {
        let resources = document
            .resources
            .into_iter()
            .map(|r| Resource::from_structured(registry, r))
            .collect::<Result<Vec<_>>>()?;
        Self::new(resources, MatchList::new(document.managed)?)
    }

    /// Pretty-printed JSON of the structured form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_structured()?)?)
    }

    /// Parse JSON produced by [`to_json`](Self::to_json)
    pub fn from_json(registry: &KindRegistry, json: &str) -> Result<Self> {
        Self::from_structured(registry, serde_json::from_str(json)?)
    }

    /// Full textual rendering, used for display and textual diffs
    pub fn render(&self, styler: &dyn Styler) -> Result<String> {
        self.verify()?;
        let managed = self
            .managed
            .iter()
            .map(|pattern| format!("  - {pattern}"))
            .collect::<Vec<_>>()
            .join("\n");
        let resources = self
            .resources
            .iter()
            .map(|r| r.render(styler))
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(format!(
            "managed:\n{managed}\n\n{RESOURCES_ANCHOR}\n{}",
            indent(&resources, "  ")
        ))
    }
}

impl<'a> IntoIterator for &'a Resources {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}
