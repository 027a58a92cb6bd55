//! Role resource - a named bundle of scopes

use declarative::{Field, Kind, format};
use serde::{Deserialize, Serialize};

/// A role, identified by its role id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl Kind for Role {
    const KIND: &'static str = "Role";
    const FIELDS: &'static [Field] = &[
        Field::new("roleId"),
        Field::new("description"),
        Field::formatted("scopes", format::bullet_list),
    ];
}
