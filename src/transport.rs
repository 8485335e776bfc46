use crate::config::AdminConfig;
use crate::error::{KongError, Result};
use crate::request::{Body, Headers, Params};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait AdminTransport: Send + Sync {
    async fn get(&self, path: &str, params: &Params, headers: &Headers) -> Result<Value>;

    async fn post(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value>;

    async fn patch(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value>;

    async fn put(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value>;

    async fn delete(&self, path: &str, headers: &Headers) -> Result<Value>;
}

#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    default_headers: Headers,
}

impl HttpTransport {
    pub fn new(config: &AdminConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(KongError::NetworkError)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            default_headers: config.default_headers.clone(),
        })
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value> {
        tracing::debug!("{} {}", method, path);
        let response = request.send().await.map_err(KongError::NetworkError)?;

        let status = response.status();
        let text = response.text().await.map_err(KongError::NetworkError)?;
        if !status.is_success() {
            tracing::warn!("{} {} failed with status {}", method, path, status.as_u16());
            return Err(KongError::http_status(status.as_u16(), text));
        }

        decode_body(&text)
    }

    fn request(&self, method: Method, path: &str, headers: &Headers) -> Result<RequestBuilder> {
        let url = build_url(&self.base_url, path);
        let headers = merge_headers(&self.default_headers, headers)?;
        Ok(self.http.request(method, url).headers(headers))
    }
}

#[async_trait]
impl AdminTransport for HttpTransport {
    async fn get(&self, path: &str, params: &Params, headers: &Headers) -> Result<Value> {
        let mut req = self.request(Method::GET, path, headers)?;
        if !params.is_empty() {
            req = req.query(params);
        }
        self.send(Method::GET, path, req).await
    }

    async fn post(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        let req = self.request(Method::POST, path, headers)?.json(body);
        self.send(Method::POST, path, req).await
    }

    async fn patch(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        let req = self.request(Method::PATCH, path, headers)?.json(body);
        self.send(Method::PATCH, path, req).await
    }

    async fn put(&self, path: &str, body: &Body, headers: &Headers) -> Result<Value> {
        let req = self.request(Method::PUT, path, headers)?.json(body);
        self.send(Method::PUT, path, req).await
    }

    async fn delete(&self, path: &str, headers: &Headers) -> Result<Value> {
        let req = self.request(Method::DELETE, path, headers)?;
        self.send(Method::DELETE, path, req).await
    }
}

pub(crate) fn build_url(base: &str, path: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push('/');
    url.push_str(path.trim_start_matches('/'));
    url
}

fn merge_headers(defaults: &Headers, extra: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    // Later inserts replace earlier ones, so per-call headers override defaults
    for (name, value) in defaults.iter().chain(extra.iter()) {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| KongError::validation_error(format!("Invalid header name: {}", name)))?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            KongError::validation_error(format!("Invalid value for header {}", name))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        // 204 No Content and friends
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_url_joins_with_single_slash() {
        assert_eq!(
            build_url("http://localhost:8001/", "plugins/123"),
            "http://localhost:8001/plugins/123"
        );
        assert_eq!(
            build_url("http://localhost:8001", "/routes/r1/plugins/p1"),
            "http://localhost:8001/routes/r1/plugins/p1"
        );
    }

    #[test]
    fn call_headers_override_defaults() {
        let defaults = Headers::from([
            ("apikey".to_string(), "default".to_string()),
            ("x-team".to_string(), "infra".to_string()),
        ]);
        let extra = Headers::from([("apikey".to_string(), "override".to_string())]);
        let map = merge_headers(&defaults, &extra).unwrap();
        assert_eq!(map.get("apikey").unwrap(), "override");
        assert_eq!(map.get("x-team").unwrap(), "infra");
    }

    #[test]
    fn bad_header_name_is_validation_error() {
        let extra = Headers::from([("bad header".to_string(), "v".to_string())]);
        let err = merge_headers(&Headers::new(), &extra).unwrap_err();
        assert!(matches!(err, KongError::ValidationError(_)));
    }

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
        assert_eq!(decode_body(r#"{"id":"p1"}"#).unwrap(), json!({"id": "p1"}));
        assert!(matches!(
            decode_body("<html>").unwrap_err(),
            KongError::SerializationError(_)
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = AdminConfig {
            base_url: "ftp://kong".to_string(),
            ..AdminConfig::default()
        };
        assert!(HttpTransport::new(&config).is_err());

        let config = AdminConfig {
            user_agent: "bad\nagent".to_string(),
            ..AdminConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(&config),
            Err(KongError::ConfigError(_))
        ));
    }
}
