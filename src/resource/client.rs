//! Client resource - credentials holder with a scope set

use declarative::{Field, Kind, format};
use serde::{Deserialize, Serialize};

/// A client, identified by its client id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl Kind for Client {
    const KIND: &'static str = "Client";
    const FIELDS: &'static [Field] = &[
        Field::new("clientId"),
        Field::new("description"),
        Field::formatted("scopes", format::bullet_list),
    ];
}
