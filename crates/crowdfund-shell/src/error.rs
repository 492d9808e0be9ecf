//! # error 模块说明
//!
//! 外壳把装配期与运行期可能遇到的失败统一为 [`ShellError`]，
//! 以便宿主入口用一个 `?` 链路处理配置、日志、路由表与导航错误。

use crowdfund_core::{NavigationError, RouteTableError};
use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// 外壳错误域。
#[derive(Debug, Error)]
pub enum ShellError {
    /// 渲染根节点已被挂载，外壳在进程生命周期内只初始化一次。
    #[error("render root `{anchor}` is already mounted")]
    AlreadyMounted { anchor: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install logging: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    RouteTable(#[from] RouteTableError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("failed to load HTTP fixtures: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
