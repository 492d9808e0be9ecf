//! # 会话存储与登录身份
//!
//! ## 核心意图（Why）
//! - 用户页与登录页需要在多次导航之间保留已登录身份；
//! - [`MemorySessionStore`] 以 `DashMap` 提供并发安全的键值存储，契约与浏览器会话存储插件一致。
//!
//! ## 行为契约（What）
//! - 身份以 JSON 形式保存在 [`USER_KEY`] 下；
//! - [`sign_in`] 覆盖已有身份，[`sign_out`] 清空整个会话；
//! - 读取到无法解析的身份时视为未登录并记录告警，不向视图抛错。

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crowdfund_core::SessionStore;

/// 会话中保存登录身份的键。
pub const USER_KEY: &str = "user";

/// 基于 `DashMap` 的会话存储。
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, String>,
}

impl MemorySessionStore {
    /// 创建空会话。
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前键数量。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 会话是否为空。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    fn clear(&self) {
        self.entries.clear();
    }
}

/// 已登录用户的身份。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Identity {
    /// 仅包含用户名的身份。
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
        }
    }

    /// 展示用名称，缺省回退到用户名。
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// 把身份写入会话。
pub fn sign_in(store: &dyn SessionStore, identity: &Identity) -> Result<(), serde_json::Error> {
    let encoded = serde_json::to_string(identity)?;
    store.set(USER_KEY, encoded);
    info!(username = %identity.username, "signed in");
    Ok(())
}

/// 清空会话。
pub fn sign_out(store: &dyn SessionStore) {
    store.clear();
    info!("signed out");
}

/// 读取当前身份。
pub fn current_identity(store: &dyn SessionStore) -> Option<Identity> {
    let raw = store.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable session identity");
            None
        }
    }
}
