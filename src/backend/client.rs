#![cfg(feature = "server")]
use dioxus::logger::tracing::{debug, error};
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::error::Error as _;

use crate::backend::config::ApiConfig;
use crate::backend::error::{ApiError, Result};

pub static GLOBAL_API: OnceCell<ApiClient> = OnceCell::new();

/// JSON client bound to one backend base URL. Every request goes through
/// [`ApiClient::execute`], which owns the error logging.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Response> {
        let url = self.url(path);
        let method_s = method.as_str().to_string();
        debug!("[api] {} {}", method_s, url);

        let mut req = self.http.request(method, &url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                error!("[api] request error on {} {}: {}", method_s, url, e);
                if e.is_timeout() {
                    error!("[api] hint: request timed out (client timeout ~10s)");
                }
                if e.is_connect() {
                    error!("[api] hint: connection failed. Check API_BASE_URL and that the backend is up");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    error!("[api] error chain: {}", chain.join(" -> "));
                }
                return Err(ApiError::Transport {
                    method: method_s,
                    url,
                    message: e.to_string(),
                });
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let snip = body.chars().take(300).collect::<String>();
            error!("[api] {} {} failed: status={} body={}", method_s, url, status, snip);
            return Err(ApiError::Http {
                method: method_s,
                url,
                status: status.as_u16(),
                body: snip,
            });
        }
        Ok(res)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let res = self.execute(Method::GET, path, query).await?;
        let url = res.url().to_string();
        let bytes = res.bytes().await.map_err(|e| {
            error!("[api] reading body from GET {} failed: {}", url, e);
            ApiError::Transport {
                method: "GET".into(),
                url: url.clone(),
                message: e.to_string(),
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let snip = String::from_utf8_lossy(&bytes);
            let snip = snip.chars().take(300).collect::<String>();
            error!("[api] decoding JSON from GET {} failed: {}\nBody snippet: {}", url, e, snip);
            ApiError::Decode {
                method: "GET".into(),
                url,
                message: e.to_string(),
            }
        })
    }

    /// POST without a request body. Any 2xx counts as success; the response
    /// body is not read.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.execute(Method::POST, path, &[]).await?;
        Ok(())
    }
}
