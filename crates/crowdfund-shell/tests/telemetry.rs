//! 日志安装只允许一次。
//!
//! 全局 Subscriber 是进程级状态，本文件只放一个测试，避免与其他测试互相干扰。

use crowdfund_shell::telemetry::{self, TelemetryError};

#[test]
fn install_succeeds_once() {
    telemetry::install("warn").expect("首次安装成功");
    assert!(matches!(
        telemetry::install("debug"),
        Err(TelemetryError::AlreadyInstalled)
    ));
}
