//! 外壳配置：挂载锚点、路由器参数、接口地址与日志过滤。
//!
//! # 教案级说明
//! - **意图 (Why)**：部署差异（部署前缀、接口域名、日志级别）集中在一份 TOML 中，
//!   代码里不出现环境相关常量；
//! - **契约 (What)**：所有分节与字段都有默认值，空文件即合法配置；未知字段直接报错，
//!   避免拼写错误被静默忽略；
//! - **格式示例**：
//!
//! ```toml
//! [app]
//! anchor = "#app"
//!
//! [router]
//! mode = "path"
//! base = "/"
//! case_sensitive = false
//!
//! [api]
//! base_url = "http://localhost:8080/api"
//!
//! [logging]
//! filter = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crowdfund_core::RouterConfig;
use serde::Deserialize;
use thiserror::Error;

/// 配置加载失败。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
}

/// 完整的外壳配置。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub app: AppSection,
    pub router: RouterConfig,
    pub api: ApiSection,
    pub logging: LoggingSection,
}

/// `[app]` 分节。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSection {
    /// 渲染根节点选择器。
    pub anchor: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            anchor: String::from("#app"),
        }
    }
}

/// `[api]` 分节。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSection {
    /// 接口根地址，不带末尾 `/`。
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080/api"),
        }
    }
}

/// `[logging]` 分节。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// `EnvFilter` 指令；设置了 `RUST_LOG` 时以环境变量为准。
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: String::from("info"),
        }
    }
}

impl ShellConfig {
    /// 从 TOML 文本解析。
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// 从文件加载。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
