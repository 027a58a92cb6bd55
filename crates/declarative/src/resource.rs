//! Resource values
//!
//! A [`Resource`] is an immutable, type-erased instance of some [`Kind`]: its
//! schema, its derived id and its raw field values. Identity is the id
//! (`Kind=key`), equality is structural.

use crate::context::{PlainStyle, Style, Styler};
use crate::error::{Error, Result};
use crate::format::indent;
use crate::registry::KindRegistry;
use crate::schema::{Kind, Schema, Values, serialize_values};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Key carrying the kind tag in structured form
pub const KIND_KEY: &str = "kind";

/// A single named, typed configuration item
#[derive(Clone)]
pub struct Resource {
    schema: Schema,
    id: String,
    values: Values,
}

impl Resource {
    /// Build a resource from a typed kind
    pub fn new<T: Kind>(resource: &T) -> Result<Self> {
        Self::from_values(Schema::of::<T>(), serialize_values(resource)?)
    }

    /// Build a resource from raw values, validated against `schema`
    pub fn from_values(schema: Schema, values: Values) -> Result<Self> {
        let values = schema.normalize(values)?;
        let id = schema.id_for(&values)?;
        Ok(Self { schema, id, values })
    }

    /// Rebuild a resource from its structured form
    ///
    /// The `kind` key selects the schema from `registry`; the remaining keys
    /// are the field values.
    pub fn from_structured(registry: &KindRegistry, mut structured: Values) -> Result<Self> {
        let kind = match structured.remove(KIND_KEY) {
            Some(Value::String(kind)) => kind,
            Some(other) => return Err(Error::UnknownKind(other.to_string())),
            None => return Err(Error::UnknownKind(String::new())),
        };
        Self::from_values(registry.get(&kind)?, structured)
    }

    /// Field values plus a `kind` key
    pub fn to_structured(&self) -> Values {
        let mut structured = self.values.clone();
        structured.insert(KIND_KEY.to_string(), Value::String(self.kind().to_string()));
        structured
    }

    /// Convert back into the typed kind
    pub fn to_kind<T: Kind>(&self) -> Result<T> {
        if self.kind() != T::KIND {
            return Err(Error::InvalidResource {
                kind: T::KIND.to_string(),
                message: format!("{} is a {}", self.id, self.kind()),
            });
        }
        Ok(serde_json::from_value(Value::Object(self.values.clone()))?)
    }

    pub fn kind(&self) -> &'static str {
        self.schema.kind()
    }

    /// Globally unique id, `Kind=key`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw value of a declared field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Check whether the kind declares `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.schema.field(field).is_some()
    }

    /// Create a new resource like this one, with the named fields replaced
    pub fn evolve<'a, I>(&self, replacements: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut values = self.values.clone();
        for (name, value) in replacements {
            if !self.has_field(name) {
                return Err(Error::UnknownField {
                    kind: self.kind().to_string(),
                    field: name.to_string(),
                });
            }
            values.insert(name.to_string(), value);
        }
        Self::from_values(self.schema, values)
    }

    /// Names of declared fields whose values differ from `other`, sorted
    pub fn changed_fields(&self, other: &Resource) -> Vec<&'static str> {
        let mut changed: Vec<&'static str> = self
            .schema
            .fields()
            .iter()
            .map(|f| f.name)
            .filter(|name| self.values.get(*name) != other.values.get(*name))
            .collect();
        changed.sort_unstable();
        changed
    }

    /// Human-readable rendering, one field per line in declaration order
    pub fn render(&self, styler: &dyn Styler) -> String {
        let mut lines = vec![format!("{}:", styler.paint(Style::Underline, &self.id))];
        for field in self.schema.fields() {
            let label = format!("  {}:", styler.paint(Style::Bold, field.name));
            let formatted = field.format(self.values.get(field.name).unwrap_or(&Value::Null));
            if formatted.contains('\n') {
                lines.push(label);
                lines.push(indent(&formatted, "    "));
            } else {
                lines.push(format!("{label} {formatted}"));
            }
        }
        lines.join("\n")
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("id", &self.id)
            .field("values", &self.values)
            .finish()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&PlainStyle))
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.values == other.values
    }
}

impl Eq for Resource {}

impl Ord for Resource {
    // Ids decide; kind and values only break ties so Ord agrees with Eq
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.kind().cmp(other.kind()))
            .then_with(|| {
                Value::Object(self.values.clone())
                    .to_string()
                    .cmp(&Value::Object(other.values.clone()).to_string())
            })
    }
}

impl PartialOrd for Resource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Worker, pool, registry, worker};
    use serde_json::json;

    #[test]
    fn test_id_and_kind() {
        let w = worker("w1", 3, "");
        assert_eq!(w.kind(), "Worker");
        assert_eq!(w.id(), "Worker=w1");
    }

    #[test]
    fn test_to_structured_has_kind_and_raw_values() {
        let w = worker("w1", 3, "first");
        let structured = w.to_structured();
        assert_eq!(structured.get("kind"), Some(&json!("Worker")));
        assert_eq!(structured.get("id"), Some(&json!("w1")));
        assert_eq!(structured.get("count"), Some(&json!(3)));
        assert_eq!(structured.get("description"), Some(&json!("first")));
        assert_eq!(structured.len(), 4);
    }

    #[test]
    fn test_from_structured_dispatches_on_kind() {
        let structured = pool("p1", 2).to_structured();
        let rebuilt = Resource::from_structured(&registry(), structured).unwrap();
        assert_eq!(rebuilt.kind(), "Pool");
        assert_eq!(rebuilt, pool("p1", 2));
    }

    #[test]
    fn test_from_structured_unknown_kind() {
        let mut structured = worker("w1", 3, "").to_structured();
        structured.insert("kind".into(), json!("Sprocket"));
        let err = Resource::from_structured(&registry(), structured).unwrap_err();
        assert!(matches!(err, Error::UnknownKind(k) if k == "Sprocket"));
    }

    #[test]
    fn test_from_structured_missing_kind() {
        let mut structured = worker("w1", 3, "").to_structured();
        structured.remove("kind");
        let err = Resource::from_structured(&registry(), structured).unwrap_err();
        assert!(matches!(err, Error::UnknownKind(_)));
    }

    #[test]
    fn test_evolve_replaces_fields() {
        let w = worker("w1", 3, "old");
        let evolved = w.evolve([("description", json!(""))]).unwrap();
        assert_eq!(evolved.get("description"), Some(&json!("")));
        assert_eq!(evolved.get("count"), Some(&json!(3)));
        // the original is untouched
        assert_eq!(w.get("description"), Some(&json!("old")));
    }

    #[test]
    fn test_evolve_primary_key_changes_id() {
        let evolved = worker("w1", 3, "").evolve([("id", json!("w2"))]).unwrap();
        assert_eq!(evolved.id(), "Worker=w2");
    }

    #[test]
    fn test_evolve_unknown_field() {
        let err = worker("w1", 3, "").evolve([("colour", json!("red"))]).unwrap_err();
        match err {
            Error::UnknownField { kind, field } => {
                assert_eq!(kind, "Worker");
                assert_eq!(field, "colour");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(worker("w1", 3, "a"), worker("w1", 3, "a"));
        assert_ne!(worker("w1", 3, "a"), worker("w1", 5, "a"));
    }

    #[test]
    fn test_ordering_by_id() {
        let mut resources = vec![worker("b", 1, ""), pool("z", 1), worker("a", 1, "")];
        resources.sort();
        let ids: Vec<_> = resources.iter().map(Resource::id).collect();
        assert_eq!(ids, vec!["Pool=z", "Worker=a", "Worker=b"]);
    }

    #[test]
    fn test_changed_fields_sorted() {
        let a = worker("w1", 3, "a");
        let b = worker("w1", 5, "b");
        assert_eq!(a.changed_fields(&b), vec!["count", "description"]);
        assert!(a.changed_fields(&a).is_empty());
    }

    #[test]
    fn test_to_kind() {
        let typed: Worker = worker("w1", 3, "x").to_kind().unwrap();
        assert_eq!(typed.count, 3);
        assert!(worker("w1", 3, "x").to_kind::<crate::testing::Pool>().is_err());
    }

    #[test]
    fn test_render_single_line_fields() {
        assert_eq!(
            worker("w1", 3, "builds things").to_string(),
            "Worker=w1:\n  id: w1\n  count: 3\n  description: builds things"
        );
    }

    #[test]
    fn test_render_multi_line_field() {
        assert_eq!(
            worker("w1", 3, "line one\n\nline two").to_string(),
            "Worker=w1:\n  id: w1\n  count: 3\n  description:\n    line one\n\n    line two"
        );
    }
}
