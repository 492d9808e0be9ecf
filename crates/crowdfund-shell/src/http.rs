//! 预置响应的 HTTP 客户端桩。
//!
//! # 教案式注释
//! - **意图 (Why)**：真实传输不在本仓库范围内，但视图的取数逻辑需要端到端验证，
//!   命令行宿主也需要可离线运行的数据源；
//! - **契约 (What)**：按“方法 + 完整 URL”查表返回响应，未登记的地址返回 `404`；
//!   最近的 [`REQUEST_LOG_LIMIT`] 条请求按顺序记录，便于断言，更早的被丢弃；
//! - **夹具格式**：JSON 对象，键为相对接口根的路径，值为 `GET` 时返回的 JSON 体，
//!   例如 `{"/projects": [...], "/projects/1": {...}}`。

use std::collections::VecDeque;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde_json::Value;

use crowdfund_core::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

/// 请求日志保留的条数上限。
pub const REQUEST_LOG_LIMIT: usize = 256;

/// 内存中的响应表。
#[derive(Debug, Default)]
pub struct StubHttpClient {
    responses: DashMap<(HttpMethod, String), HttpResponse>,
    requests: Mutex<VecDeque<HttpRequest>>,
    offline: Mutex<Option<String>>,
}

impl StubHttpClient {
    /// 创建空响应表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 从夹具 JSON 构建，所有键都登记为 `GET {api_base}{key}`。
    pub fn from_fixture_json(api_base: &str, fixture: &str) -> Result<Self, serde_json::Error> {
        let entries: serde_json::Map<String, Value> = serde_json::from_str(fixture)?;
        let client = Self::new();
        for (path, body) in entries {
            client.insert(
                HttpMethod::Get,
                format!("{}{path}", api_base.trim_end_matches('/')),
                HttpResponse::ok(body.to_string()),
            );
        }
        Ok(client)
    }

    /// 登记一条响应。
    pub fn insert(&self, method: HttpMethod, url: impl Into<String>, response: HttpResponse) {
        self.responses.insert((method, url.into()), response);
    }

    /// Builder 风格登记 `GET` 的 JSON 响应。
    pub fn with_json(self, url: impl Into<String>, body: &Value) -> Self {
        self.insert(HttpMethod::Get, url, HttpResponse::ok(body.to_string()));
        self
    }

    /// 让后续所有请求以传输错误失败；传入 `None` 恢复。
    pub fn set_offline(&self, reason: Option<&str>) {
        *self.offline.lock() = reason.map(str::to_owned);
    }

    /// 最近收到的请求，按时间顺序。
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().iter().cloned().collect()
    }
}

impl HttpClient for StubHttpClient {
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        {
            let mut requests = self.requests.lock();
            if requests.len() == REQUEST_LOG_LIMIT {
                requests.pop_front();
            }
            requests.push_back(request.clone());
        }

        if let Some(reason) = self.offline.lock().clone() {
            return Err(HttpError::Transport {
                method: request.method,
                url: request.url.clone(),
                reason,
            });
        }

        let key = (request.method, request.url.clone());
        Ok(self
            .responses
            .get(&key)
            .map(|entry| entry.value().clone())
            .unwrap_or(HttpResponse {
                status: 404,
                body: String::new(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_url_is_not_found() {
        let client = StubHttpClient::new();
        let err = client
            .fetch(&HttpRequest::get("http://api/projects"))
            .unwrap_err();
        assert_eq!(
            err,
            HttpError::Status {
                method: HttpMethod::Get,
                url: "http://api/projects".into(),
                status: 404,
            }
        );
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn request_log_keeps_only_recent_entries() {
        let client = StubHttpClient::new();
        for index in 0..REQUEST_LOG_LIMIT + 10 {
            let _ = client.request(&HttpRequest::get(format!("http://api/projects/{index}")));
        }
        let requests = client.requests();
        assert_eq!(requests.len(), REQUEST_LOG_LIMIT);
        assert_eq!(requests[0].url, "http://api/projects/10");
        assert_eq!(
            requests.last().map(|request| request.url.as_str()),
            Some(format!("http://api/projects/{}", REQUEST_LOG_LIMIT + 9).as_str())
        );
    }

    #[test]
    fn fixture_keys_are_joined_to_api_base() {
        let client =
            StubHttpClient::from_fixture_json("http://api/", r#"{"/projects": [{"id": 1}]}"#)
                .unwrap();
        let response = client
            .fetch(&HttpRequest::get("http://api/projects"))
            .unwrap();
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!([{"id": 1}]));
    }

    #[test]
    fn offline_mode_fails_with_transport_error() {
        let client = StubHttpClient::new().with_json("http://api/projects", &json!([]));
        client.set_offline(Some("connection refused"));
        assert!(matches!(
            client.request(&HttpRequest::get("http://api/projects")),
            Err(HttpError::Transport { .. })
        ));
        client.set_offline(None);
        assert!(client.fetch(&HttpRequest::get("http://api/projects")).is_ok());
    }
}
