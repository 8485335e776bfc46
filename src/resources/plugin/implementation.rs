use super::dto::PluginScope;
use crate::error::{KongError, Result};
use crate::request::{
    filter_body, Body, Headers, Params, PLUGIN_ALLOWED_FIELDS, PLUGIN_UPSERT_FIELDS,
};
use crate::transport::AdminTransport;
use serde_json::Value;
use std::sync::Arc;

pub struct PluginResource<T: ?Sized> {
    transport: Arc<T>,
}

impl<T: ?Sized> Clone for PluginResource<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: AdminTransport + ?Sized> PluginResource<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub async fn add(&self, body: &Body, headers: &Headers) -> Result<Value> {
        let body = filter_body(body, PLUGIN_ALLOWED_FIELDS);
        self.transport.post("plugins", &body, headers).await
    }

    pub async fn delete(&self, uri: &str, identifier: &str, headers: &Headers) -> Result<Value> {
        require("plugin identifier", identifier)?;
        let path = format!("{}plugins/{}", uri, identifier);
        self.transport.delete(&path, headers).await
    }

    pub async fn get(&self, identifier: &str, params: &Params, headers: &Headers) -> Result<Value> {
        require("plugin identifier", identifier)?;
        let path = format!("plugins/{}", identifier);
        self.transport.get(&path, params, headers).await
    }

    pub async fn get_enabled_plugins(&self, params: &Params, headers: &Headers) -> Result<Value> {
        self.transport.get("plugins/enabled", params, headers).await
    }

    pub async fn get_plugin_schema(
        &self,
        name: &str,
        params: &Params,
        headers: &Headers,
    ) -> Result<Value> {
        require("plugin name", name)?;
        let path = format!("plugins/schema/{}", name);
        self.transport.get(&path, params, headers).await
    }

    pub async fn list(&self, params: &Params, headers: &Headers) -> Result<Value> {
        self.transport.get("plugins", params, headers).await
    }

    pub async fn list_with_prefix(
        &self,
        uri: &str,
        params: &Params,
        headers: &Headers,
    ) -> Result<Value> {
        let path = format!("{}plugins", uri);
        self.transport.get(&path, params, headers).await
    }

    pub async fn update(
        &self,
        uri: &str,
        identifier: &str,
        body: &Body,
        headers: &Headers,
    ) -> Result<Value> {
        require("plugin identifier", identifier)?;
        let body = filter_body(body, PLUGIN_ALLOWED_FIELDS);
        let path = format!("{}plugins/{}", uri, identifier);
        self.transport.patch(&path, &body, headers).await
    }

    pub async fn update_or_add(
        &self,
        api_identifier: &str,
        body: &Body,
        headers: &Headers,
    ) -> Result<Value> {
        require("api identifier", api_identifier)?;
        let body = filter_body(body, PLUGIN_UPSERT_FIELDS);
        let path = format!("apis/{}/plugins", api_identifier);
        self.transport.put(&path, &body, headers).await
    }

    pub async fn delete_in(
        &self,
        scope: &PluginScope,
        identifier: &str,
        headers: &Headers,
    ) -> Result<Value> {
        self.delete(&scope.prefix(), identifier, headers).await
    }

    pub async fn list_in(
        &self,
        scope: &PluginScope,
        params: &Params,
        headers: &Headers,
    ) -> Result<Value> {
        self.list_with_prefix(&scope.prefix(), params, headers).await
    }

    pub async fn update_in(
        &self,
        scope: &PluginScope,
        identifier: &str,
        body: &Body,
        headers: &Headers,
    ) -> Result<Value> {
        self.update(&scope.prefix(), identifier, body, headers).await
    }
}

fn require(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KongError::validation_error(format!("{} cannot be empty", what)));
    }
    Ok(())
}
