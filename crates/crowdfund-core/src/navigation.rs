//! 导航目标与视图状态。

use alloc::string::{String, ToString};

use crate::location::{Location, PathParams, Query};
use crate::route::Route;
use crate::view::ViewId;

/// 一次导航请求：字面路径，或“逻辑名 + 参数”。
///
/// # 教案级说明
/// - **意图 (Why)**：浏览器地址栏、站内链接与程序化跳转最终都归结为这两种形态；
/// - **契约 (What)**：`Named` 形态在解析时才回填路径，缺参会得到
///   [`NavigationError::MissingParameter`](crate::NavigationError::MissingParameter)；
/// - **生命周期**：目标只在一次导航中使用，从不持久化。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// 字面路径，可带查询串。
    Path(String),
    /// 逻辑名导航。
    Named {
        name: String,
        params: PathParams,
        query: Query,
    },
}

impl NavigationTarget {
    /// 构造字面路径目标。
    pub fn path<S: Into<String>>(path: S) -> Self {
        NavigationTarget::Path(path.into())
    }

    /// 构造逻辑名目标，参数与查询为空。
    pub fn named<S: Into<String>>(name: S) -> Self {
        NavigationTarget::Named {
            name: name.into(),
            params: PathParams::new(),
            query: Query::new(),
        }
    }

    /// 追加路径参数；对字面路径目标无效果。
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        if let NavigationTarget::Named { params, .. } = &mut self {
            params.insert(key, value);
        }
        self
    }

    /// 追加查询参数；对字面路径目标无效果，字面路径请直接写入 `?`。
    pub fn query<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        if let NavigationTarget::Named { query, .. } = &mut self {
            query.insert(key, value);
        }
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(value: &str) -> Self {
        NavigationTarget::Path(value.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(value: String) -> Self {
        NavigationTarget::Path(value)
    }
}

/// 一次成功解析的结果，也是路由器持有的“当前视图状态”。
///
/// 每次命中都会生成全新的实例，上一次导航的参数不会残留。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    route: Route,
    params: PathParams,
    location: Location,
}

impl ViewState {
    /// 组装视图状态。
    pub fn new(route: Route, params: PathParams, location: Location) -> Self {
        Self {
            route,
            params,
            location,
        }
    }

    /// 命中的路由。
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// 命中路由的逻辑名。
    pub fn name(&self) -> &str {
        self.route.name()
    }

    /// 命中路由的视图单元。
    pub fn view(&self) -> ViewId {
        self.route.view()
    }

    /// 提取出的路径参数。
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// 查询参数。
    pub fn query(&self) -> &Query {
        self.location.query()
    }

    /// 归一化后的应用内路径。
    pub fn path(&self) -> &str {
        self.location.path()
    }

    /// 路径加查询串。
    pub fn full_path(&self) -> String {
        self.location.full_path()
    }

    /// 是否指向同一目的地：同一路由、相同参数与查询。
    ///
    /// 字面量段忽略大小写时 `/Projects` 与 `/projects` 路径不同但目的地相同，
    /// 重复导航判定以此为准，而不是比较路径原文。
    pub fn same_destination(&self, other: &ViewState) -> bool {
        self.name() == other.name() && self.params == other.params && self.query() == other.query()
    }
}
