//! # ShellBuilder：外壳装配入口
//!
//! # 教案级注释
//! - **设计目标 (Why)**
//!   - 把配置、协作方（HTTP、会话、渲染根节点）与视图注册表的装配集中到一处，
//!     宿主入口与测试都以同样的链式步骤得到一个已挂载的 [`Application`]；
//! - **关键流程 (How)**
//!   1. `with_config`：指定路由器参数、挂载锚点与接口地址；
//!   2. `with_*`：替换默认协作方，未替换的使用内存实现；
//!   3. `build`：构造路由器与路由表并挂载外壳。
//! - **契约说明 (What)**
//!   - `build` 不会解析任何地址，外壳保持“尚未解析”状态，由调用方决定何时 `start`；
//!   - 同一渲染根节点上第二次 `build` 返回 [`ShellError::AlreadyMounted`]。

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crowdfund_core::{HttpClient, RenderRoot, SessionStore};
use crowdfund_router::DefaultRouter;

use crate::app::Application;
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::http::StubHttpClient;
use crate::render::MemoryRoot;
use crate::routes::route_table;
use crate::session::MemorySessionStore;
use crate::views::{Services, ViewRegistry};

/// 外壳装配器。
#[derive(Default)]
pub struct ShellBuilder {
    config: ShellConfig,
    http: Option<Arc<dyn HttpClient>>,
    session: Option<Arc<dyn SessionStore>>,
    root: Option<Arc<dyn RenderRoot>>,
    views: Option<ViewRegistry>,
}

impl fmt::Debug for ShellBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellBuilder")
            .field("config", &self.config)
            .field("custom_http", &self.http.is_some())
            .field("custom_session", &self.session.is_some())
            .field("custom_root", &self.root.is_some())
            .field("views", &self.views)
            .finish()
    }
}

impl ShellBuilder {
    /// 以默认配置开始装配。
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定外壳配置。
    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    /// 指定 HTTP 客户端；缺省为空响应表的 [`StubHttpClient`]。
    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// 指定会话存储；缺省为 [`MemorySessionStore`]。
    pub fn with_session_store(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// 指定渲染根节点；缺省以配置中的锚点创建 [`MemoryRoot`]。
    pub fn with_render_root(mut self, root: Arc<dyn RenderRoot>) -> Self {
        self.root = Some(root);
        self
    }

    /// 指定视图注册表；缺省为 [`ViewRegistry::standard`]。
    pub fn with_views(mut self, views: ViewRegistry) -> Self {
        self.views = Some(views);
        self
    }

    /// 构造路由器并挂载外壳。
    pub fn build(self) -> Result<Application, ShellError> {
        let ShellBuilder {
            config,
            http,
            session,
            root,
            views,
        } = self;

        let table = route_table()?;
        let root = root.unwrap_or_else(|| Arc::new(MemoryRoot::new(config.app.anchor.clone())));
        let services = Services {
            http: http.unwrap_or_else(|| Arc::new(StubHttpClient::new())),
            session: session.unwrap_or_else(|| Arc::new(MemorySessionStore::new())),
            api_base: config.api.base_url.clone(),
        };
        let router = Arc::new(DefaultRouter::new(config.router.clone()));

        let app = Application::mount(
            router,
            table,
            root,
            views.unwrap_or_else(ViewRegistry::standard),
            services,
        )?;
        info!(
            anchor = %config.app.anchor,
            mode = ?config.router.mode,
            base = %config.router.base,
            "shell mounted"
        );
        Ok(app)
    }
}
