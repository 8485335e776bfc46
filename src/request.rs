use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type Body = Map<String, Value>;

pub type Params = BTreeMap<String, String>;

pub type Headers = BTreeMap<String, String>;

pub const PLUGIN_ALLOWED_FIELDS: &[&str] = &["name", "consumer_id"];
pub const PLUGIN_UPSERT_FIELDS: &[&str] = &["name", "consumer_id", "id"];

pub fn filter_body(body: &Body, allowed: &[&str]) -> Body {
    body.iter()
        .filter(|(key, _)| allowed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
