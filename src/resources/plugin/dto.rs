use serde::{Deserialize, Serialize};

// `Api` is the legacy API-scoped layout, the rest follow the current one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PluginScope {
    #[default]
    Global,
    Service(String),
    Route(String),
    Consumer(String),
    Api(String),
}

impl PluginScope {
    pub fn prefix(&self) -> String {
        match self {
            PluginScope::Global => String::new(),
            PluginScope::Service(id) => format!("services/{}/", id),
            PluginScope::Route(id) => format!("routes/{}/", id),
            PluginScope::Consumer(id) => format!("consumers/{}/", id),
            PluginScope::Api(id) => format!("apis/{}/", id),
        }
    }
}
