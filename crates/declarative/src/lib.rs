//! # Declarative
//!
//! Typed resource collections for declaratively managed configuration.
//!
//! A deployment's desired configuration is *generated* from code, its actual
//! configuration is *current*. Both are loaded into [`Resources`] and
//! compared, either as a textual diff of their renderings or as a per-id
//! summary.
//!
//! ## Core Concepts
//!
//! - **Kind**: a serde struct with an ordered field list, primary key first
//! - **Resource**: an immutable instance of a kind, identified by `Kind=key`
//! - **Resources**: a sorted collection plus the patterns it is authoritative
//!   for (the *managed* list)
//! - **Diff**: [`textual_diff`] and [`id_diff`]
//!
//! ## Example
//!
//! ```
//! use declarative::{Field, Kind, MatchList, PlainStyle, Resource, Resources, id_diff};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Role {
//!     #[serde(rename = "roleId")]
//!     role_id: String,
//!     scopes: Vec<String>,
//! }
//!
//! impl Kind for Role {
//!     const KIND: &'static str = "Role";
//!     const FIELDS: &'static [Field] = &[Field::new("roleId"), Field::new("scopes")];
//! }
//!
//! let managed = MatchList::new(["Role=.*"])?;
//! let admin = Resource::new(&Role { role_id: "admin".into(), scopes: vec![] })?;
//! let generated = Resources::new([admin], managed.clone())?;
//! let current = Resources::new([], managed)?;
//!
//! assert_eq!(id_diff(&generated, &current)?.render(&PlainStyle), "+ Role=admin");
//! # Ok::<(), declarative::Error>(())
//! ```
//!
//! ## Provider Traits
//!
//! Output styling is injected through [`Styler`], so the crate has no
//! dependency on a terminal library. [`PlainStyle`] renders without any
//! formatting.

pub mod context;
pub mod diff;
pub mod error;
pub mod format;
pub mod matchlist;
pub mod registry;
pub mod resource;
pub mod resources;
pub mod schema;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use context::{PlainStyle, Style, Styler};
pub use diff::{
    DEFAULT_CONTEXT_LINES, DiffOptions, DiffSummary, IdChange, IdentityDiff, id_diff,
    textual_diff, textual_diff_with,
};
pub use error::{Error, Result};
pub use matchlist::MatchList;
pub use registry::KindRegistry;
pub use resource::{KIND_KEY, Resource};
pub use resources::{RESOURCES_ANCHOR, Resources, ResourcesDocument};
pub use schema::{Field, Kind, Schema, Values};
