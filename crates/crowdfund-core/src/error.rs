//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 路由层的失败分为两类：构造路由表时的声明错误（[`RouteTableError`]），
//!   以及单次导航尝试的失败（[`NavigationError`]）；
//! - 两者都只影响当次调用：导航失败不会改动路由器持有的当前视图状态。
//!
//! ## 设计要求（What）
//! - 所有错误类型派生 `thiserror::Error`，`no_std` 构建下落到 `core::error::Error`；
//! - 变体携带可读上下文（路径、路由名、参数名），便于日志直接定位。

use alloc::string::String;

use thiserror::Error;

/// 路由表构造错误。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RouteTableError {
    /// 模式字符串不合法。
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// 逻辑名在表内重复，按名导航将产生歧义。
    #[error("route name `{name}` is declared more than once")]
    DuplicateRouteName { name: String },
}

/// 单次导航尝试的失败原因。
///
/// # 教案式说明
/// - **意图 (Why)**：区分“用户可见的未命中”与“开发期的编程错误”，
///   前者应展示给用户，后者应在开发阶段尽早暴露；
/// - **契约 (What)**：
///   - `NoMatchingRoute`：路径不匹配任何声明的模式，当前表未声明兜底路由；
///   - `MissingParameter`：按名导航时缺少某个命名段的值，属于编程错误；
///   - `InvalidParameter`：参数值含 `/`，无法放入单个路径段；
///   - `UnknownRouteName`：按名导航引用了表内不存在的逻辑名；
///   - `NotStarted`：尚无任何历史记录时请求后退/前进。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum NavigationError {
    #[error("no route matches path `{path}`")]
    NoMatchingRoute { path: String },

    #[error("route `{route}` requires parameter `{parameter}`")]
    MissingParameter { route: String, parameter: String },

    #[error("value `{value}` for parameter `{parameter}` of route `{route}` spans multiple segments")]
    InvalidParameter {
        route: String,
        parameter: String,
        value: String,
    },

    #[error("no route is named `{name}`")]
    UnknownRouteName { name: String },

    #[error("router has not been started")]
    NotStarted,
}

impl NavigationError {
    /// 是否属于编程错误（开发阶段应直接暴露，而非展示给终端用户）。
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            NavigationError::MissingParameter { .. }
                | NavigationError::InvalidParameter { .. }
                | NavigationError::UnknownRouteName { .. }
        )
    }
}
