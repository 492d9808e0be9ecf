//! 请求位置的拆解：路径、查询串与参数表。
//!
//! # 教案级说明（Why）
//! - 浏览器交给路由器的是完整位置（可能带 `?query`、`#fragment` 与部署前缀），
//!   而路由表只关心应用内路径；
//! - 将归一化集中在 [`Location::parse`]，路由器的匹配逻辑就只需面对干净的段序列。
//!
//! # 归一化规则（What）
//! 1. Fragment 模式下先去掉开头的 `#`；
//! 2. 丢弃 `#` 之后的片段，按首个 `?` 拆出查询串；
//! 3. 空路径视为 `/`，缺失的前导 `/` 会被补齐；
//! 4. 若路径以部署前缀 `base` 开头则剥离；
//! 5. 非根路径末尾的单个 `/` 被忽略。
//!
//! 路由器自身生成的应用内路径（按名回填、历史记录）已经不含前缀与 `#`，
//! 由 [`Location::internal`] 解析，不再剥离部署前缀。

use alloc::collections::{BTreeMap, btree_map};
use alloc::string::{String, ToString};
use core::fmt;

use crate::config::HistoryMode;

/// 从匹配的命名段中提取出的参数表。
///
/// 使用 `BTreeMap` 保证迭代顺序确定，便于日志与断言。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    /// 创建空参数表。
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder 风格插入，便于构造导航目标。
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// 插入或覆盖参数。
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
    }

    /// 读取参数值。
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 按键名有序遍历。
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// 参数个数。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// 查询串键值表。
///
/// - 没有 `=` 的键映射到空串；
/// - 同名键以最后一次出现为准；
/// - 键与值以百分号编码传输：解析时解码，渲染时编码，`&`、`=`、`#` 不会拆分或截断值；
/// - 渲染时按键名排序，保证同一组参数只有一种字面表示。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    /// 创建空查询表。
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// 解析 `a=1&b` 形式的查询串（不含 `?`）。
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::new();
        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                continue;
            }
            query.insert(decode_lossy(key), decode_lossy(value));
        }
        query
    }

    /// Builder 风格插入。
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// 插入或覆盖键值。
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into());
    }

    /// 读取键值。
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// 按键名有序遍历。
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// 是否为空。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Query {
    /// 渲染为带前导 `?` 的查询串；空表渲染为空串。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            f.write_str(if index == 0 { "?" } else { "&" })?;
            f.write_str(&urlencoding::encode(key))?;
            if !value.is_empty() {
                write!(f, "={}", urlencoding::encode(value))?;
            }
        }
        Ok(())
    }
}

/// 解码查询串片段；解码结果不是合法 UTF-8 时保留原文。
fn decode_lossy(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |decoded| decoded.into_owned())
}

/// 归一化后的请求位置。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Query,
}

impl Location {
    /// 按模块级规则拆解原始位置。
    pub fn parse(raw: &str, mode: HistoryMode, base: &str) -> Self {
        let raw = match mode {
            HistoryMode::Fragment => raw.strip_prefix('#').unwrap_or(raw),
            HistoryMode::Path => raw,
        };
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Query::parse(query)),
            None => (raw, Query::new()),
        };

        let mut normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            alloc::format!("/{path}")
        };

        let base = base.trim_end_matches('/');
        if !base.is_empty() {
            if normalized == base {
                normalized = String::from("/");
            } else if normalized.starts_with(base) && normalized[base.len()..].starts_with('/') {
                normalized.replace_range(..base.len(), "");
            }
        }

        if normalized.len() > 1 && normalized.ends_with('/') {
            normalized.pop();
        }

        Self {
            path: normalized,
            query,
        }
    }

    /// 解析路由器自身生成的应用内路径：不识别 `#` 前缀，也不剥离部署前缀。
    pub fn internal(path: &str) -> Self {
        Self::parse(path, HistoryMode::Path, "/")
    }

    /// 应用内路径，始终以 `/` 开头。
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 查询参数。
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// 路径段序列；根路径没有段。
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let body = &self.path[1..];
        body.split('/').filter(move |_| !body.is_empty())
    }

    /// 路径与查询串拼接后的完整表示，用于历史记录与重复导航判定。
    pub fn full_path(&self) -> String {
        alloc::format!("{}{}", self.path, self.query)
    }
}
