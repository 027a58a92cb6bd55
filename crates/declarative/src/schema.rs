//! Schema descriptors for resource kinds
//!
//! A kind is a plain serde struct plus an explicit, ordered list of its
//! fields. The first field is the primary key.

use crate::error::{Error, Result};
use crate::format;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Turns a raw field value into display text
pub type Formatter = fn(&Value) -> String;

/// Raw field values keyed by field name
pub type Values = Map<String, Value>;

/// A declared field of a kind
#[derive(Clone, Copy)]
pub struct Field {
    /// Serialized field name
    pub name: &'static str,
    /// Display formatter, [`format::plain`] when unset
    pub formatter: Option<Formatter>,
}

impl Field {
    /// A field rendered with the default formatter
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            formatter: None,
        }
    }

    /// A field rendered with a custom formatter
    pub const fn formatted(name: &'static str, formatter: Formatter) -> Self {
        Self {
            name,
            formatter: Some(formatter),
        }
    }

    /// Format a value of this field for display
    pub fn format(&self, value: &Value) -> String {
        (self.formatter.unwrap_or(format::plain))(value)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("formatted", &self.formatter.is_some())
            .finish()
    }
}

/// A typed resource variant
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct Role {
///     role_id: String,
///     description: String,
///     scopes: Vec<String>,
/// }
///
/// impl Kind for Role {
///     const KIND: &'static str = "Role";
///     const FIELDS: &'static [Field] = &[
///         Field::new("roleId"),
///         Field::new("description"),
///         Field::formatted("scopes", format::bullet_list),
///     ];
/// }
/// ```
pub trait Kind: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Tag distinguishing this kind from all others
    const KIND: &'static str;

    /// Declared fields in display order, primary key first
    ///
    /// Names must match the serialized field names.
    const FIELDS: &'static [Field];

    /// Value used after `=` in the resource id
    ///
    /// Defaults to the first declared field. Returns `None` when the key is
    /// unset.
    fn primary_key(values: &Values) -> Option<String> {
        first_field_key(Self::FIELDS, values)
    }
}

/// Primary key taken from the first declared field
pub fn first_field_key(fields: &[Field], values: &Values) -> Option<String> {
    let field = fields.first()?;
    match values.get(field.name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Type-erased descriptor of a [`Kind`]
#[derive(Clone, Copy)]
pub struct Schema {
    kind: &'static str,
    fields: &'static [Field],
    key: fn(&Values) -> Option<String>,
    check: fn(Values) -> Result<Values>,
}

impl Schema {
    /// Descriptor for the kind `T`
    pub fn of<T: Kind>() -> Self {
        Self {
            kind: T::KIND,
            fields: T::FIELDS,
            key: T::primary_key,
            check: round_trip::<T>,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Look up a declared field by name
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reject undeclared names and coerce the values through `T`
    ///
    /// Missing fields take the kind's serde defaults.
    pub fn normalize(&self, values: Values) -> Result<Values> {
        if let Some(name) = values.keys().find(|k| self.field(k).is_none()) {
            return Err(Error::UnknownField {
                kind: self.kind.to_string(),
                field: name.clone(),
            });
        }
        (self.check)(values)
    }

    /// Derive the resource id, `Kind=key`
    pub fn id_for(&self, values: &Values) -> Result<String> {
        let Some(first) = self.fields.first() else {
            return Err(Error::EmptySchema(self.kind.to_string()));
        };
        match (self.key)(values) {
            Some(key) => Ok(format!("{}={}", self.kind, key)),
            None => Err(Error::MissingPrimaryKey {
                kind: self.kind.to_string(),
                field: first.name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Schema {}

fn round_trip<T: Kind>(values: Values) -> Result<Values> {
    let typed: T =
        serde_json::from_value(Value::Object(values)).map_err(|e| Error::InvalidResource {
            kind: T::KIND.to_string(),
            message: e.to_string(),
        })?;
    serialize_values(&typed)
}

/// Serialize a typed resource into its field map
pub(crate) fn serialize_values<T: Kind>(resource: &T) -> Result<Values> {
    match serde_json::to_value(resource)? {
        Value::Object(values) => Ok(values),
        other => Err(Error::InvalidResource {
            kind: T::KIND.to_string(),
            message: format!("expected an object, got {other}"),
        }),
    }
}
