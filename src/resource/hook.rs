//! Hook resource - a task template fired on a schedule or by pulse messages

use declarative::{Field, Kind, Values, format};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pulse exchange binding that fires a hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub exchange: String,
    pub routing_key_pattern: String,
}

/// A hook, identified by `hookGroupId/hookId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    pub hook_group_id: String,
    pub hook_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub email_on_error: bool,
    #[serde(default)]
    pub schedule: Vec<String>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub task: Value,
    #[serde(default)]
    pub trigger_schema: Value,
}

impl Kind for Hook {
    const KIND: &'static str = "Hook";
    const FIELDS: &'static [Field] = &[
        Field::new("hookGroupId"),
        Field::new("hookId"),
        Field::new("name"),
        Field::new("description"),
        Field::new("owner"),
        Field::new("emailOnError"),
        Field::formatted("schedule", format::bullet_list),
        Field::formatted("bindings", format::pretty_json),
        Field::formatted("task", format::pretty_json),
        Field::formatted("triggerSchema", format::pretty_json),
    ];

    fn primary_key(values: &Values) -> Option<String> {
        let group = values.get("hookGroupId")?.as_str()?;
        let id = values.get("hookId")?.as_str()?;
        Some(format!("{group}/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declarative::Resource;
    use serde_json::json;

    fn nightly() -> Hook {
        Hook {
            hook_group_id: "project-releng".into(),
            hook_id: "cron-task-mozilla-central".into(),
            name: "nightly".into(),
            description: "Nightly cron".into(),
            owner: "release@example.com".into(),
            email_on_error: true,
            schedule: vec!["0 0 * * * *".into()],
            bindings: vec![],
            task: json!({"provisionerId": "built-in", "workerType": "succeed"}),
            trigger_schema: json!({}),
        }
    }

    #[test]
    fn test_hook_id_joins_group_and_id() {
        let hook = Resource::new(&nightly()).unwrap();
        assert_eq!(hook.id(), "Hook=project-releng/cron-task-mozilla-central");
    }

    #[test]
    fn test_hook_evolve_group_changes_id() {
        let hook = Resource::new(&nightly()).unwrap();
        let moved = hook.evolve([("hookGroupId", json!("project-gecko"))]).unwrap();
        assert_eq!(moved.id(), "Hook=project-gecko/cron-task-mozilla-central");
    }

    #[test]
    fn test_hook_render_pretty_task() {
        let rendered = Resource::new(&nightly()).unwrap().to_string();
        assert!(rendered.contains("  emailOnError: true\n"));
        assert!(rendered.contains("  schedule: - 0 0 * * * *\n"));
        assert!(rendered.contains(
            "  task:
    {
      \"provisionerId\": \"built-in\",
      \"workerType\": \"succeed\"
    }"
        ));
        assert!(rendered.ends_with("  triggerSchema: {}"));
    }

    #[test]
    fn test_hook_bindings_round_trip() {
        let mut hook = nightly();
        hook.bindings.push(Binding {
            exchange: "exchange/taskcluster-github/v1/push".into(),
            routing_key_pattern: "primary.#".into(),
        });
        let resource = Resource::new(&hook).unwrap();
        assert_eq!(
            resource.get("bindings"),
            Some(&json!([{
                "exchange": "exchange/taskcluster-github/v1/push",
                "routingKeyPattern": "primary.#"
            }]))
        );
        assert_eq!(resource.to_kind::<Hook>().unwrap(), hook);
    }
}
