//! WorkerPool resource - a provider-backed pool of workers

use declarative::{Field, Kind, format};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A worker pool, identified by `provisioner/workerType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPool {
    pub worker_pool_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    pub provider_id: String,
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub email_on_error: bool,
}

impl Kind for WorkerPool {
    const KIND: &'static str = "WorkerPool";
    const FIELDS: &'static [Field] = &[
        Field::new("workerPoolId"),
        Field::new("description"),
        Field::new("owner"),
        Field::new("providerId"),
        Field::formatted("config", format::pretty_json),
        Field::new("emailOnError"),
    ];
}
