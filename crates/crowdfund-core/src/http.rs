//! HTTP 协作方契约。
//!
//! 路由层本身不发起请求；视图在渲染时通过 [`HttpClient`] 拉取项目与用户数据。
//! 传输实现（浏览器 fetch、测试桩等）不在本 Crate 范围内。

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// 请求方法。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// 大写方法名。
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次请求：方法、URL 与可选请求体。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    /// 构造无请求体的 `GET`。
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    /// 构造带请求体的 `POST`。
    pub fn post<S: Into<String>, B: Into<String>>(url: S, body: B) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body.into()),
        }
    }
}

/// 响应：状态码与文本体。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 构造 `200` 响应。
    pub fn ok<B: Into<String>>(body: B) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// 状态码是否落在 2xx。
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 请求失败。
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HttpError {
    /// 传输层失败，未拿到响应。
    #[error("{method} {url} failed: {reason}")]
    Transport {
        method: HttpMethod,
        url: String,
        reason: String,
    },

    /// 拿到了非 2xx 响应。
    #[error("{method} {url} returned status {status}")]
    Status {
        method: HttpMethod,
        url: String,
        status: u16,
    },
}

/// HTTP 客户端抽象。
///
/// # 教案级说明
/// - **契约 (What)**：`request` 同步返回响应或失败；非 2xx 响应由实现自行决定
///   是作为 `Ok` 返回还是转换成 [`HttpError::Status`]，调用方应使用 [`HttpClient::fetch`]
///   获得统一的“成功才返回”语义；
/// - **线程安全**：实现需 `Send + Sync`，外壳以 `Arc<dyn HttpClient>` 共享。
pub trait HttpClient: Send + Sync {
    /// 发送请求。
    fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError>;

    /// 发送请求，并把非 2xx 响应折叠为 [`HttpError::Status`]。
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self.request(request)?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(HttpError::Status {
                method: request.method,
                url: request.url.clone(),
                status: response.status,
            })
        }
    }
}
