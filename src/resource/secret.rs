//! Secret resource - a named secret value, never shown in renderings

use declarative::{Field, Kind, format};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A secret, identified by its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Secret {
    pub name: String,
    #[serde(default)]
    pub secret: Value,
}

impl Kind for Secret {
    const KIND: &'static str = "Secret";
    const FIELDS: &'static [Field] = &[
        Field::new("name"),
        Field::formatted("secret", format::masked),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use declarative::Resource;
    use serde_json::json;

    #[test]
    fn test_secret_value_is_masked() {
        let secret = Resource::new(&Secret {
            name: "project/releng/signing".into(),
            secret: json!({"token": "s3cr3t"}),
        })
        .unwrap();
        let rendered = secret.to_string();
        assert_eq!(
            rendered,
            "Secret=project/releng/signing:\n  name: project/releng/signing\n  secret: <hidden>"
        );
        assert!(!rendered.contains("s3cr3t"));
        // structured form keeps the raw value
        assert_eq!(secret.get("secret"), Some(&json!({"token": "s3cr3t"})));
    }

    #[test]
    fn test_secret_has_no_description() {
        let secret = Resource::new(&Secret {
            name: "x".into(),
            secret: Value::Null,
        })
        .unwrap();
        assert!(!secret.has_field("description"));
    }
}
