//! 日志安装入口。

use std::sync::OnceLock;

use thiserror::Error;
use tracing::dispatcher::{self, SetGlobalDefaultError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

/// 安装标记，确保进程内只安装一次。
static INSTALLED: OnceLock<()> = OnceLock::new();

/// 日志安装失败。
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// 本进程已经调用过 [`install`]。
    #[error("logging is already installed for this process")]
    AlreadyInstalled,

    /// 宿主在外壳之前设置了自己的全局 Subscriber，外壳不覆盖它。
    #[error("another global tracing subscriber is already in place")]
    SubscriberAlreadySet,

    #[error("could not register the shell log subscriber")]
    Register(#[source] SetGlobalDefaultError),
}

/// 安装 `fmt + EnvFilter` 全局 Subscriber。
///
/// # 教案式说明
/// - **逻辑（How）**：`RUST_LOG` 存在时优先采用，否则使用配置里的 `filter` 指令；
/// - **契约（What）**：重复调用返回 [`TelemetryError::AlreadyInstalled`]；外部已设置 Subscriber 时返回
///   [`TelemetryError::SubscriberAlreadySet`]。
pub fn install(filter: &str) -> Result<(), TelemetryError> {
    if INSTALLED.get().is_some() {
        return Err(TelemetryError::AlreadyInstalled);
    }
    if dispatcher::has_been_set() {
        return Err(TelemetryError::SubscriberAlreadySet);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(TelemetryError::Register)?;

    INSTALLED
        .set(())
        .map_err(|_| TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn errors_describe_the_shell_logging_state() {
        assert_eq!(
            TelemetryError::AlreadyInstalled.to_string(),
            "logging is already installed for this process"
        );
        assert!(TelemetryError::SubscriberAlreadySet.source().is_none());
    }
}
