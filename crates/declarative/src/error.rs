//! Error types for the declarative crate

use thiserror::Error;

/// Errors that can occur while building, verifying or diffing resources
#[derive(Error, Debug)]
pub enum Error {
    /// Two or more resources share an id
    #[error("duplicate resources: {}", .0.join(", "))]
    DuplicateResources(Vec<String>),

    /// Resources whose ids are not covered by any managed pattern
    #[error("unmanaged resources: {}", .0.join(", "))]
    UnmanagedResources(Vec<String>),

    /// A single resource added outside the managed patterns
    #[error("unmanaged resource: {0}")]
    UnmanagedResource(String),

    /// No kind is registered under this tag
    #[error("unknown resource kind: {0:?}")]
    UnknownKind(String),

    /// A field name that the kind does not declare
    #[error("{kind} has no field named {field:?}")]
    UnknownField { kind: String, field: String },

    /// The primary key field has no value
    #[error("{kind} is missing its primary key field {field:?}")]
    MissingPrimaryKey { kind: String, field: String },

    /// A kind that declares no fields cannot produce an id
    #[error("{0} declares no fields")]
    EmptySchema(String),

    /// Field values that do not fit the kind
    #[error("invalid {kind} resource: {message}")]
    InvalidResource { kind: String, message: String },

    /// A managed pattern that is not a valid regular expression
    #[error("invalid managed pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Rendered collection has no `resources:` line
    #[error("rendered collection has no resources anchor")]
    MissingAnchor,

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for declarative operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_id() {
        let err = Error::DuplicateResources(vec!["Role=a".into(), "Role=b".into()]);
        assert_eq!(err.to_string(), "duplicate resources: Role=a, Role=b");

        let err = Error::UnmanagedResources(vec!["Client=x".into()]);
        assert_eq!(err.to_string(), "unmanaged resources: Client=x");
    }
}
