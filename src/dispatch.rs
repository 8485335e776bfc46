use crate::error::Result;
use crate::request::{Body, Headers, Params};
use crate::resources::plugin::{PluginResource, PluginScope};
use crate::transport::AdminTransport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// `scope`, when present, replaces `uri` as the path prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PluginCommand {
    Add {
        #[serde(default)]
        body: Body,
        #[serde(default)]
        headers: Headers,
    },
    Delete {
        #[serde(default)]
        uri: String,
        #[serde(default)]
        scope: Option<PluginScope>,
        id: String,
        #[serde(default)]
        headers: Headers,
    },
    Get {
        id: String,
        #[serde(default)]
        params: Params,
        #[serde(default)]
        headers: Headers,
    },
    GetEnabledPlugins {
        #[serde(default)]
        params: Params,
        #[serde(default)]
        headers: Headers,
    },
    GetPluginSchema {
        name: String,
        #[serde(default)]
        params: Params,
        #[serde(default)]
        headers: Headers,
    },
    List {
        #[serde(default)]
        params: Params,
        #[serde(default)]
        headers: Headers,
    },
    ListWithPrefix {
        #[serde(default)]
        uri: String,
        #[serde(default)]
        scope: Option<PluginScope>,
        #[serde(default)]
        params: Params,
        #[serde(default)]
        headers: Headers,
    },
    Update {
        #[serde(default)]
        uri: String,
        #[serde(default)]
        scope: Option<PluginScope>,
        id: String,
        #[serde(default)]
        body: Body,
        #[serde(default)]
        headers: Headers,
    },
    UpdateOrAdd {
        api_id: String,
        #[serde(default)]
        body: Body,
        #[serde(default)]
        headers: Headers,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommandReply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl CommandReply {
    fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
            status: None,
        }
    }

    fn failure(error: String, status: Option<u16>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error),
            status,
        }
    }
}

pub async fn dispatch<T>(resource: &PluginResource<T>, command: PluginCommand) -> Result<Value>
where
    T: AdminTransport + ?Sized,
{
    match command {
        PluginCommand::Add { body, headers } => resource.add(&body, &headers).await,
        PluginCommand::Delete {
            uri,
            scope,
            id,
            headers,
        } => match scope {
            Some(scope) => resource.delete_in(&scope, &id, &headers).await,
            None => resource.delete(&uri, &id, &headers).await,
        },
        PluginCommand::Get {
            id,
            params,
            headers,
        } => resource.get(&id, &params, &headers).await,
        PluginCommand::GetEnabledPlugins { params, headers } => {
            resource.get_enabled_plugins(&params, &headers).await
        }
        PluginCommand::GetPluginSchema {
            name,
            params,
            headers,
        } => resource.get_plugin_schema(&name, &params, &headers).await,
        PluginCommand::List { params, headers } => resource.list(&params, &headers).await,
        PluginCommand::ListWithPrefix {
            uri,
            scope,
            params,
            headers,
        } => match scope {
            Some(scope) => resource.list_in(&scope, &params, &headers).await,
            None => resource.list_with_prefix(&uri, &params, &headers).await,
        },
        PluginCommand::Update {
            uri,
            scope,
            id,
            body,
            headers,
        } => match scope {
            Some(scope) => resource.update_in(&scope, &id, &body, &headers).await,
            None => resource.update(&uri, &id, &body, &headers).await,
        },
        PluginCommand::UpdateOrAdd {
            api_id,
            body,
            headers,
        } => resource.update_or_add(&api_id, &body, &headers).await,
    }
}

pub async fn handle_line<T>(resource: &PluginResource<T>, line: &str) -> CommandReply
where
    T: AdminTransport + ?Sized,
{
    let command = match serde_json::from_str::<PluginCommand>(line) {
        Ok(command) => command,
        Err(e) => {
            tracing::error!("Failed to parse command: {}", e);
            return CommandReply::failure(format!("Parse error: {}", e), None);
        }
    };

    match dispatch(resource, command).await {
        Ok(result) => CommandReply::success(result),
        Err(e) => CommandReply::failure(e.to_string(), e.status()),
    }
}
