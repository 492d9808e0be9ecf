//! 路由器配置。
//!
//! # 教案级说明
//! - **意图 (Why)**：历史模式、部署前缀与大小写规则属于部署环境决定的参数，
//!   不应硬编码在路由器里；以 `serde` 描述后可直接嵌入外壳的 TOML 配置；
//! - **契约 (What)**：所有字段都有默认值，缺省配置等价于“路径模式、根部署、忽略大小写”；
//! - **部署约束**：[`HistoryMode::Path`] 要求宿主服务器把所有未命中的路径转发到应用入口，
//!   这一点路由器自身无法保证。

use alloc::format;
use alloc::string::String;

use serde::Deserialize;

/// 浏览历史的地址表示方式。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// 使用真实路径（`/projects/42`），依赖服务器回退到入口页。
    #[default]
    Path,
    /// 使用片段（`#/projects/42`），无需服务器配合。
    Fragment,
}

/// 路由器运行参数。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// 历史模式。
    pub mode: HistoryMode,
    /// 部署前缀，例如 `/app`；`/` 表示部署在根路径。
    pub base: String,
    /// 字面量段是否区分大小写。
    pub case_sensitive: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Path,
            base: String::from("/"),
            case_sensitive: false,
        }
    }
}

impl RouterConfig {
    /// 把应用内路径渲染成链接地址。
    ///
    /// - 路径模式：拼接部署前缀，`/app` + `/user` → `/app/user`；
    /// - 片段模式：前缀 `#`，部署前缀不参与。
    pub fn href(&self, path: &str) -> String {
        match self.mode {
            HistoryMode::Fragment => format!("#{path}"),
            HistoryMode::Path => {
                let base = self.base.trim_end_matches('/');
                if base.is_empty() {
                    String::from(path)
                } else if path == "/" {
                    format!("{base}/")
                } else {
                    format!("{base}{path}")
                }
            }
        }
    }
}
