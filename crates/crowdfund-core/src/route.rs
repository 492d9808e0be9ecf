//! 路由模式与单条路由记录。
//!
//! # 教案级说明（Why）
//! - 路由声明以字符串书写（`/projects/:projectID`），但匹配与回填都需要逐段比较，
//!   因此在构造期一次性解析为 [`RoutePattern`]，热路径只做切片比较；
//! - `:name` 前缀表示命名参数，按位置绑定到 [`PathParams`]。
//!
//! # 契约（What）
//! - 模式必须以 `/` 开头，不允许空段（`//`）、匿名参数（单独的 `:`）或同名参数重复出现；
//! - 末尾单个 `/` 会被忽略，`/projects/` 与 `/projects` 解析结果一致；
//! - `/` 解析为空段序列，仅匹配根路径；`//` 含空段，不视为根；
//! - 路径中的段按百分号编码书写：回填时参数值被编码，匹配时目标段先解码再比较。

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::{NavigationError, RouteTableError};
use crate::location::PathParams;
use crate::view::ViewId;

/// 路由段的组成单元。
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum RouteSegment {
    /// 字面量段，要求目标完全一致（大小写规则由调用方决定）。
    Literal(Cow<'static, str>),
    /// 命名参数，匹配任意非空单段。
    Parameter(Cow<'static, str>),
}

/// 解析后的路由模式。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    source: Cow<'static, str>,
    segments: Vec<RouteSegment>,
}

impl RoutePattern {
    /// 解析模式字符串。
    ///
    /// # 教案级说明
    /// - **输入 (What)**：形如 `/projects/:projectID/pledge` 的声明；
    /// - **流程 (How)**：去掉首个 `/` 与末尾单个 `/` 后按 `/` 切分，`:` 开头的段视为参数；
    /// - **错误 (Contract)**：违反模块级契约时返回 [`RouteTableError::InvalidPattern`]。
    pub fn parse<S>(source: S) -> Result<Self, RouteTableError>
    where
        S: Into<Cow<'static, str>>,
    {
        let source = source.into();
        let invalid = |reason: &str| RouteTableError::InvalidPattern {
            pattern: source.to_string(),
            reason: reason.to_string(),
        };

        let body = source
            .strip_prefix('/')
            .ok_or_else(|| invalid("pattern must start with `/`"))?;
        let body = match body.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => body,
        };

        let mut segments = Vec::new();
        if body.is_empty() {
            return Ok(Self { source, segments });
        }

        for raw in body.split('/') {
            if raw.is_empty() {
                return Err(invalid("empty path segment"));
            }
            match raw.strip_prefix(':') {
                Some("") => return Err(invalid("parameter segment without a name")),
                Some(name) => {
                    let duplicated = segments.iter().any(|segment| {
                        matches!(segment, RouteSegment::Parameter(existing) if existing == name)
                    });
                    if duplicated {
                        return Err(RouteTableError::InvalidPattern {
                            pattern: source.to_string(),
                            reason: alloc::format!("duplicate parameter `{name}`"),
                        });
                    }
                    segments.push(RouteSegment::Parameter(Cow::Owned(name.to_string())));
                }
                None => segments.push(RouteSegment::Literal(Cow::Owned(raw.to_string()))),
            }
        }

        Ok(Self { source, segments })
    }

    /// 原始声明字符串。
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// 访问段迭代器。
    pub fn segments(&self) -> core::slice::Iter<'_, RouteSegment> {
        self.segments.iter()
    }

    /// 模式中声明的参数名，按出现顺序。
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            RouteSegment::Parameter(name) => Some(name.as_ref()),
            RouteSegment::Literal(_) => None,
        })
    }

    /// 将目标路径的段序列与模式逐段比较，命中时返回提取出的参数。
    ///
    /// - 目标段先做百分号解码，解码结果不是合法 UTF-8 时视为未命中；
    /// - 字面量段在 `case_sensitive == false` 时按 ASCII 忽略大小写比较；
    /// - 参数段不接受空值，`/projects//pledge` 不会把空串绑定到 `projectID`；
    /// - 段数必须完全一致，多余或缺失都视为未命中。
    pub fn matches<'a, I>(&self, target: I, case_sensitive: bool) -> Option<PathParams>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut params = PathParams::new();
        let mut target_iter = target.into_iter();

        for segment in &self.segments {
            let actual = urlencoding::decode(target_iter.next()?).ok()?;
            match segment {
                RouteSegment::Literal(expected) => {
                    let equal = if case_sensitive {
                        actual == expected.as_ref()
                    } else {
                        actual.eq_ignore_ascii_case(expected.as_ref())
                    };
                    if !equal {
                        return None;
                    }
                }
                RouteSegment::Parameter(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.to_string(), actual.into_owned());
                }
            }
        }

        if target_iter.next().is_some() {
            return None;
        }

        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// 路由表中的单条记录：模式、唯一逻辑名与视图标识。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    name: Cow<'static, str>,
    pattern: RoutePattern,
    view: ViewId,
}

impl Route {
    /// 解析模式并构造路由记录。
    pub fn new<P, N>(pattern: P, name: N, view: ViewId) -> Result<Self, RouteTableError>
    where
        P: Into<Cow<'static, str>>,
        N: Into<Cow<'static, str>>,
    {
        Ok(Self {
            name: name.into(),
            pattern: RoutePattern::parse(pattern)?,
            view,
        })
    }

    /// 逻辑名。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 匹配模式。
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// 绑定的视图单元。
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// 用参数回填模式，生成具体路径。
    ///
    /// # 教案级说明
    /// - **意图 (Why)**：按逻辑名导航时，调用方只提供参数表，路径由路由自身合成；
    /// - **契约 (What)**：每个命名段都必须有非空值，否则返回 [`NavigationError::MissingParameter`]；
    ///   值中出现 `/` 会破坏段结构，返回 [`NavigationError::InvalidParameter`]；多余参数被忽略；
    /// - **编码**：其余字符一律百分号编码，`?`、`#`、`%` 不会截断或改写路径；
    /// - **后置条件**：对返回路径调用 [`RoutePattern::matches`] 会得到相同的参数值。
    pub fn path_for(&self, params: &PathParams) -> Result<String, NavigationError> {
        let mut path = String::new();
        for segment in &self.pattern.segments {
            path.push('/');
            match segment {
                RouteSegment::Literal(text) => path.push_str(text),
                RouteSegment::Parameter(name) => {
                    let value = params
                        .get(name)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| NavigationError::MissingParameter {
                            route: self.name.to_string(),
                            parameter: name.to_string(),
                        })?;
                    if value.contains('/') {
                        return Err(NavigationError::InvalidParameter {
                            route: self.name.to_string(),
                            parameter: name.to_string(),
                            value: value.to_string(),
                        });
                    }
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}
