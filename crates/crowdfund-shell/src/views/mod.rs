//! 视图单元与视图注册表。
//!
//! # 教案级说明（Why）
//! - 路由表只引用 [`ViewId`]，真正的渲染逻辑在这里按标识注册，
//!   `project` 与 `pledge` 两条路由因此共享同一个 [`ProjectView`]；
//! - 视图通过 [`ViewContext`] 拿到当前视图状态与协作方句柄，自身不持有任何跨导航状态。
//!
//! # 契约（What）
//! - [`View::render`] 同步返回标记或 [`ViewError`]；失败由外壳渲染为错误面板；
//! - 链接一律通过 [`ViewContext::link`] 生成，保证与路由器的历史模式与部署前缀一致。

use std::collections::BTreeMap;
use std::sync::Arc;

use crowdfund_core::{
    HttpClient, HttpError, HttpRequest, Markup, NavigationError, NavigationTarget, RouteTable,
    RouterConfig, SessionStore, ViewId, ViewState,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

mod home;
mod login;
mod project;
mod projects;
mod user;

pub use home::HomeView;
pub use login::LoginView;
pub use project::ProjectView;
pub use projects::ProjectsView;
pub use user::UserView;

/// 视图渲染失败。
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    #[error("unexpected payload from `{url}`: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("route provides no `{parameter}` parameter")]
    MissingParameter { parameter: String },

    #[error("failed to build link: {0}")]
    Link(#[from] NavigationError),

    #[error("no view is registered for `{view}`")]
    Unregistered { view: ViewId },
}

/// 视图单元。
pub trait View: Send + Sync {
    /// 以当前上下文渲染标记。
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError>;
}

/// 视图可使用的协作方句柄。
#[derive(Clone)]
pub struct Services {
    pub http: Arc<dyn HttpClient>,
    pub session: Arc<dyn SessionStore>,
    pub api_base: String,
}

impl Services {
    /// 拼接接口地址，`path` 需以 `/` 开头。
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }
}

/// 链接生成器：路由表快照 + 路由器配置。
///
/// 外壳挂载后路由表不再变化，持有快照即可，不需要反向引用路由器。
#[derive(Clone, Debug)]
pub struct Links {
    table: Arc<RouteTable>,
    config: RouterConfig,
}

impl Links {
    pub fn new(table: Arc<RouteTable>, config: RouterConfig) -> Self {
        Self { table, config }
    }

    /// 生成目标的链接地址。
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        self.table.href(target, &self.config)
    }
}

/// 单次渲染的上下文。
pub struct ViewContext<'a> {
    state: &'a ViewState,
    services: &'a Services,
    links: &'a Links,
}

impl<'a> ViewContext<'a> {
    pub fn new(state: &'a ViewState, services: &'a Services, links: &'a Links) -> Self {
        Self {
            state,
            services,
            links,
        }
    }

    /// 当前视图状态。
    pub fn state(&self) -> &ViewState {
        self.state
    }

    /// 协作方句柄。
    pub fn services(&self) -> &Services {
        self.services
    }

    /// 读取必需的路径参数。
    pub fn param(&self, name: &str) -> Result<&str, ViewError> {
        self.state
            .params()
            .get(name)
            .ok_or_else(|| ViewError::MissingParameter {
                parameter: name.to_owned(),
            })
    }

    /// 生成可直接写入 `href`/`action` 属性的链接地址（已做标记转义）。
    pub fn link(&self, target: NavigationTarget) -> Result<String, ViewError> {
        let href = self.links.href(&target)?;
        Ok(Markup::escape(&href))
    }

    /// `GET` 接口并把 JSON 响应解码为 `T`。
    pub fn fetch_json<T>(&self, path: &str) -> Result<T, ViewError>
    where
        T: DeserializeOwned,
    {
        let url = self.services.api_url(path);
        let response = self.services.http.fetch(&HttpRequest::get(url.clone()))?;
        serde_json::from_str(&response.body).map_err(|source| ViewError::Decode { url, source })
    }
}

/// 视图标识到视图单元的固定映射，启动时创建一次。
#[derive(Clone, Default)]
pub struct ViewRegistry {
    views: BTreeMap<ViewId, Arc<dyn View>>,
}

impl ViewRegistry {
    /// 空注册表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册全部五个标准视图。
    pub fn standard() -> Self {
        Self::new()
            .with(ViewId::Home, HomeView)
            .with(ViewId::Projects, ProjectsView)
            .with(ViewId::Project, ProjectView)
            .with(ViewId::User, UserView)
            .with(ViewId::Login, LoginView)
    }

    /// 注册或替换某个视图。
    pub fn with<V>(mut self, id: ViewId, view: V) -> Self
    where
        V: View + 'static,
    {
        self.views.insert(id, Arc::new(view));
        self
    }

    /// 查找视图。
    pub fn get(&self, id: ViewId) -> Option<&Arc<dyn View>> {
        self.views.get(&id)
    }

    /// 已注册的标识。
    pub fn ids(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.keys().copied()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// 接口路径中的单个段，按百分号编码。
pub(crate) fn api_segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// 金额展示。
pub(crate) fn money(amount: u64) -> String {
    format!("${amount}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StubHttpClient;
    use crate::routes::route_table;
    use crate::session::MemorySessionStore;

    #[test]
    fn links_are_escaped_for_attributes() {
        let table = Arc::new(route_table().unwrap());
        let links = Links::new(Arc::clone(&table), RouterConfig::default());
        let services = Services {
            http: Arc::new(StubHttpClient::new()),
            session: Arc::new(MemorySessionStore::new()),
            api_base: "http://api".into(),
        };
        let state = table.resolve("/projects", &RouterConfig::default()).unwrap();
        let ctx = ViewContext::new(&state, &services, &links);

        let href = ctx
            .link(
                NavigationTarget::named("projects")
                    .query("page", "2")
                    .query("sort", "new"),
            )
            .unwrap();
        assert_eq!(href, "/projects?page=2&amp;sort=new");

        let href = ctx
            .link(NavigationTarget::named("project").param("projectID", "\"<x>\""))
            .unwrap();
        assert!(!href.contains(['"', '<', '>']));
    }
}
