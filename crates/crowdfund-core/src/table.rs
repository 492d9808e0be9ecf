//! 声明式路由表。
//!
//! # 教案级说明（Why）
//! - 路由表是一份有序、构造后不可变的记录集合；匹配采用线性扫描、先声明先命中，
//!   不依赖动态分派或反射；
//! - 构造期完成全部校验（模式合法、逻辑名唯一），运行期的匹配路径只有切片比较。
//!
//! # 使用契约（What）
//! - 若两条模式都能匹配同一路径，排在前面的生效，这是唯一的歧义消解规则；
//! - 路由表不提供任何修改方法，热替换由路由器整表交换完成。

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::config::RouterConfig;
use crate::error::{NavigationError, RouteTableError};
use crate::location::Location;
use crate::navigation::{NavigationTarget, ViewState};
use crate::route::Route;

/// 有序路由表。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// 以声明顺序构造路由表。
    ///
    /// # 教案级说明
    /// - **前置条件 (Contract)**：逻辑名必须唯一，否则返回 [`RouteTableError::DuplicateRouteName`]；
    /// - **后置条件 (Contract)**：迭代顺序即匹配优先级。
    pub fn new<I>(routes: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = Route>,
    {
        let mut collected: Vec<Route> = Vec::new();
        for route in routes {
            if collected.iter().any(|existing| existing.name() == route.name()) {
                return Err(RouteTableError::DuplicateRouteName {
                    name: route.name().to_string(),
                });
            }
            collected.push(route);
        }
        Ok(Self { routes: collected })
    }

    /// 空表：任何路径都不命中。
    pub fn empty() -> Self {
        Self::default()
    }

    /// 按声明顺序遍历。
    pub fn iter(&self) -> core::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// 路由条数。
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// 是否为空表。
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// 按逻辑名查找。
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// 将原始位置解析为视图状态，不改变任何外部状态。
    ///
    /// # 行为概览（How）
    /// 1. 依据 [`RouterConfig`] 归一化位置（去查询串、片段、部署前缀与末尾 `/`）；
    /// 2. 按声明顺序逐条匹配，首个命中者生效；
    /// 3. 全部未命中时返回 [`NavigationError::NoMatchingRoute`]，不会合成兜底路由。
    pub fn resolve(&self, raw: &str, config: &RouterConfig) -> Result<ViewState, NavigationError> {
        self.resolve_location(Location::parse(raw, config.mode, &config.base), config)
    }

    /// 解析应用内路径（[`Self::path_for`] 的产物或历史条目），不剥离部署前缀。
    ///
    /// 部署前缀与某个应用内路径的首段同名时（如 `base = "/user"`），
    /// 按名导航必须走这里，否则 `/user/login` 会被误剥成 `/login`。
    pub fn resolve_internal(
        &self,
        path: &str,
        config: &RouterConfig,
    ) -> Result<ViewState, NavigationError> {
        self.resolve_location(Location::internal(path), config)
    }

    fn resolve_location(
        &self,
        location: Location,
        config: &RouterConfig,
    ) -> Result<ViewState, NavigationError> {
        for route in &self.routes {
            if let Some(params) = route
                .pattern()
                .matches(location.segments(), config.case_sensitive)
            {
                return Ok(ViewState::new(route.clone(), params, location));
            }
        }

        Err(NavigationError::NoMatchingRoute {
            path: location.path().to_string(),
        })
    }

    /// 把导航目标转换为应用内路径（含查询串）。
    ///
    /// - 字面路径原样返回；
    /// - 逻辑名目标先查表（未知名返回 [`NavigationError::UnknownRouteName`]），
    ///   再回填参数并拼接查询串。
    pub fn path_for(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        match target {
            NavigationTarget::Path(path) => Ok(path.clone()),
            NavigationTarget::Named {
                name,
                params,
                query,
            } => {
                let route = self
                    .by_name(name)
                    .ok_or_else(|| NavigationError::UnknownRouteName { name: name.clone() })?;
                let mut path = route.path_for(params)?;
                path.push_str(&query.to_string());
                Ok(path)
            }
        }
    }

    /// 生成导航目标对应的链接地址（考虑历史模式与部署前缀）。
    pub fn href(
        &self,
        target: &NavigationTarget,
        config: &RouterConfig,
    ) -> Result<String, NavigationError> {
        let path = self.path_for(target)?;
        Ok(config.href(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewId;

    fn route(pattern: &'static str, name: &'static str, view: ViewId) -> Route {
        Route::new(pattern, name, view).expect("合法路由")
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = RouteTable::new([
            route("/user", "user", ViewId::User),
            route("/account", "user", ViewId::User),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteTableError::DuplicateRouteName {
                name: "user".into()
            }
        );
    }

    #[test]
    fn first_declared_wins_on_overlap() {
        let table = RouteTable::new([
            route("/projects/:projectID", "project", ViewId::Project),
            route("/projects/featured", "featured", ViewId::Projects),
        ])
        .expect("合法路由表");

        let state = table
            .resolve("/projects/featured", &RouterConfig::default())
            .expect("应命中");
        assert_eq!(state.name(), "project");
        assert_eq!(state.params().get("projectID"), Some("featured"));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let err = RouteTable::empty()
            .resolve("/", &RouterConfig::default())
            .unwrap_err();
        assert_eq!(err, NavigationError::NoMatchingRoute { path: "/".into() });
    }

    #[test]
    fn path_for_appends_query_and_rejects_unknown_names() {
        let table = RouteTable::new([route("/projects/:projectID", "project", ViewId::Project)])
            .expect("合法路由表");
        let target = NavigationTarget::named("project")
            .param("projectID", "9")
            .query("tab", "rewards");
        assert_eq!(table.path_for(&target).unwrap(), "/projects/9?tab=rewards");

        let unknown = NavigationTarget::named("nope");
        assert_eq!(
            table.path_for(&unknown).unwrap_err(),
            NavigationError::UnknownRouteName {
                name: "nope".into()
            }
        );
    }

    #[test]
    fn internal_paths_ignore_base_that_matches_first_segment() {
        let table = RouteTable::new([
            route("/user", "user", ViewId::User),
            route("/user/login", "login", ViewId::Login),
        ])
        .expect("合法路由表");
        let config = RouterConfig {
            base: "/user".into(),
            ..RouterConfig::default()
        };

        let path = table.path_for(&NavigationTarget::named("login")).unwrap();
        let state = table.resolve_internal(&path, &config).expect("应命中");
        assert_eq!(state.name(), "login");

        let href = table.href(&NavigationTarget::named("login"), &config).unwrap();
        assert_eq!(href, "/user/user/login");
        assert_eq!(table.resolve(&href, &config).unwrap().name(), "login");
    }
}
