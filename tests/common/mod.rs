#![allow(dead_code)]

use async_trait::async_trait;
use kong_admin::request::{Body, Headers, Params};
use kong_admin::{AdminTransport, KongError, Result};
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub params: Option<Params>,
    pub body: Option<Body>,
    pub headers: Headers,
}

/// Records every call and answers with a canned response, or with a
/// simulated HTTP failure when `fail_with` is set.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<u16>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Call {
        self.calls().pop().expect("no call recorded")
    }

    fn record(&self, call: Call) -> Result<Value> {
        let echo = json!({ "method": call.method, "path": call.path });
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some(status) => Err(KongError::http_status(status, "simulated failure")),
            None => Ok(echo),
        }
    }
}

#[async_trait]
impl AdminTransport for RecordingTransport {
    async fn get(&self, path: &str, params: &Params, headers: &Headers) -> Result<Value> {
        self.record(Call {
            method: "GET",
            path: path.to_string(),
            params: Some(params.clone()),
            body: None,
            headers: headers.clone(),
        })
    }

    async fn post(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        self.record(Call {
            method: "POST",
            path: path.to_string(),
            params: None,
            body: Some(body.clone()),
            headers: headers.clone(),
        })
    }

    async fn patch(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        self.record(Call {
            method: "PATCH",
            path: path.to_string(),
            params: None,
            body: Some(body.clone()),
            headers: headers.clone(),
        })
    }

    async fn put(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        self.record(Call {
            method: "PUT",
            path: path.to_string(),
            params: None,
            body: Some(body.clone()),
            headers: headers.clone(),
        })
    }

    async fn delete(&self, path: &str, headers: &Headers) -> Result<Value> {
        self.record(Call {
            method: "DELETE",
            path: path.to_string(),
            params: None,
            body: None,
            headers: headers.clone(),
        })
    }
}

pub fn body(value: Value) -> Body {
    value.as_object().cloned().expect("body must be a JSON object")
}
