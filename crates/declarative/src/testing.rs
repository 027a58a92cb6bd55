//! Kinds and helpers shared by the unit tests

use crate::matchlist::MatchList;
use crate::registry::KindRegistry;
use crate::resource::Resource;
use crate::resources::Resources;
use crate::schema::{Field, Kind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub description: String,
}

impl Kind for Worker {
    const KIND: &'static str = "Worker";
    const FIELDS: &'static [Field] = &[
        Field::new("id"),
        Field::new("count"),
        Field::new("description"),
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub name: String,
    pub size: u32,
}

impl Kind for Pool {
    const KIND: &'static str = "Pool";
    const FIELDS: &'static [Field] = &[Field::new("name"), Field::new("size")];
}

pub fn registry() -> KindRegistry {
    KindRegistry::new().register::<Worker>().register::<Pool>()
}

pub fn worker(id: &str, count: u32, description: &str) -> Resource {
    Resource::new(&Worker {
        id: id.to_string(),
        count,
        description: description.to_string(),
    })
    .unwrap()
}

pub fn pool(name: &str, size: u32) -> Resource {
    Resource::new(&Pool {
        name: name.to_string(),
        size,
    })
    .unwrap()
}

/// Collection managing every Worker and Pool
pub fn collection(resources: impl IntoIterator<Item = Resource>) -> Resources {
    Resources::new(resources, managed()).unwrap()
}

pub fn managed() -> MatchList {
    MatchList::new(["Worker=.*", "Pool=.*"]).unwrap()
}
