//! # Application：应用外壳
//!
//! ## 核心意图（Why）
//! - 持有唯一的“当前视图”槽位，订阅路由器状态变化，在每次变化后用最新参数重渲染；
//! - 外壳只在进程启动时挂载一次，负责把路由表登记到路由器并独占一个渲染根节点。
//!
//! ## 状态（What）
//! - 初始为“尚未解析”（槽位为空，根节点无内容）；
//! - 每次成功导航进入“已解析”，槽位被新状态整体替换；
//! - 视图渲染失败时在同一槽位渲染错误面板并记录告警，不保留过期视图。
//!
//! ## 风险提示（Trade-offs）
//! - 监听器闭包持有外壳内部状态的 `Arc`；[`Application`] 在 `Drop` 时退订，
//!   否则路由器会一直保留这份状态。

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crowdfund_core::{Markup, NavigationTarget, RenderRoot, RouteTable, ViewState};
use crowdfund_router::{DefaultRouter, Subscription};

use crate::error::ShellError;
use crate::views::{Links, Services, ViewContext, ViewError, ViewRegistry};

/// 顶部导航中的入口：逻辑名与文字。
const NAV_ENTRIES: [(&str, &str); 3] = [
    ("home", "Home"),
    ("projects", "Projects"),
    ("user", "Account"),
];

/// 当前视图槽位。
#[derive(Debug, Default)]
struct Slot {
    state: Option<ViewState>,
    markup: Markup,
}

/// 外壳内部状态，被路由器监听器共享。
struct Shell {
    root: Arc<dyn RenderRoot>,
    registry: ViewRegistry,
    services: Services,
    links: Links,
    slot: Mutex<Slot>,
}

impl Shell {
    fn render(&self, state: &ViewState) {
        let ctx = ViewContext::new(state, &self.services, &self.links);
        let body = self
            .registry
            .get(state.view())
            .ok_or(ViewError::Unregistered { view: state.view() })
            .and_then(|view| view.render(&ctx))
            .unwrap_or_else(|err| {
                warn!(path = state.path(), view = %state.view(), error = %err, "view failed to render");
                error_panel(&err)
            });

        let markup = self.layout(state, &body);
        self.root.update(&markup);
        debug!(path = state.path(), route = state.name(), "view rendered");

        let mut slot = self.slot.lock();
        slot.state = Some(state.clone());
        slot.markup = markup;
    }

    fn layout(&self, state: &ViewState, body: &Markup) -> Markup {
        let mut nav = String::from("<nav>");
        for (name, label) in NAV_ENTRIES {
            if let Ok(href) = self.links.href(&NavigationTarget::named(name)) {
                nav.push_str(&format!("<a href=\"{}\">{label}</a>", Markup::escape(&href)));
            }
        }
        nav.push_str("</nav>");

        Markup::new(format!(
            "<div id=\"{anchor}\">{nav}<main data-route=\"{route}\" data-view=\"{view}\">{body}</main></div>",
            anchor = self.root.anchor().trim_start_matches('#'),
            route = state.name(),
            view = state.view(),
        ))
    }
}

fn error_panel(err: &ViewError) -> Markup {
    Markup::new(format!(
        "<section class=\"error\"><h1>Something went wrong</h1><p>{}</p></section>",
        Markup::escape(&err.to_string())
    ))
}

/// 已挂载的应用外壳。
pub struct Application {
    router: Arc<DefaultRouter>,
    shell: Arc<Shell>,
    subscription: Subscription,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

impl Application {
    /// 挂载外壳。
    ///
    /// # 教案式注释
    /// - **流程 (How)**：
    ///   1. 抢占渲染根节点，已挂载时返回 [`ShellError::AlreadyMounted`]；
    ///   2. 把路由表登记到路由器；
    ///   3. 订阅路由器，之后每次状态变化都会同步重渲染；
    ///   4. 若路由器已有当前状态，立即渲染一次。
    /// - **契约 (What)**：外壳是根节点的唯一使用者，其他组件不挂载或卸载它。
    pub fn mount(
        router: Arc<DefaultRouter>,
        table: RouteTable,
        root: Arc<dyn RenderRoot>,
        registry: ViewRegistry,
        services: Services,
    ) -> Result<Self, ShellError> {
        if !root.try_mount() {
            return Err(ShellError::AlreadyMounted {
                anchor: root.anchor().to_owned(),
            });
        }

        router.update(table);
        let links = Links::new(router.table(), router.config().clone());
        let shell = Arc::new(Shell {
            root,
            registry,
            services,
            links,
            slot: Mutex::new(Slot::default()),
        });

        let listener = Arc::clone(&shell);
        let subscription = router.subscribe(move |state| listener.render(state));

        if let Some(current) = router.current() {
            shell.render(&current);
        }

        Ok(Self {
            router,
            shell,
            subscription,
        })
    }

    /// 外壳使用的路由器。
    pub fn router(&self) -> &Arc<DefaultRouter> {
        &self.router
    }

    /// 槽位中的当前视图状态；尚未解析时为 `None`。
    pub fn current(&self) -> Option<ViewState> {
        self.shell.slot.lock().state.clone()
    }

    /// 最近一次渲染的完整标记。
    pub fn markup(&self) -> Markup {
        self.shell.slot.lock().markup.clone()
    }

    /// 视图可用的协作方。
    pub fn services(&self) -> &Services {
        &self.shell.services
    }

    /// 启动时解析初始地址。
    pub fn start(&self, initial: &str) -> Result<Arc<ViewState>, ShellError> {
        Ok(self.router.start(initial)?)
    }

    /// 导航。
    pub fn navigate<T>(&self, target: T) -> Result<Arc<ViewState>, ShellError>
    where
        T: Into<NavigationTarget>,
    {
        Ok(self.router.navigate(target)?)
    }

    /// 重新渲染当前视图，例如登录状态变化之后。
    pub fn refresh(&self) {
        if let Some(current) = self.router.current() {
            self.shell.render(&current);
        }
    }

    /// 卸载外壳：退订路由器并释放渲染根节点。
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.router.unsubscribe(self.subscription);
        self.shell.root.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StubHttpClient;
    use crate::render::MemoryRoot;
    use crate::routes::route_table;
    use crate::session::MemorySessionStore;
    use crowdfund_core::RouterConfig;
    use tracing_test::traced_test;

    fn mount(root: Arc<MemoryRoot>) -> Application {
        let services = Services {
            http: Arc::new(StubHttpClient::new()),
            session: Arc::new(MemorySessionStore::new()),
            api_base: "http://api".into(),
        };
        Application::mount(
            Arc::new(DefaultRouter::new(RouterConfig::default())),
            route_table().unwrap(),
            root,
            ViewRegistry::standard(),
            services,
        )
        .unwrap()
    }

    #[test]
    #[traced_test]
    fn render_failure_is_logged_and_shown() {
        let app = mount(Arc::new(MemoryRoot::new("#app")));
        app.start("/projects").unwrap();
        assert!(app.markup().contains("<section class=\"error\">"));
        assert!(logs_contain("view failed to render"));
    }

    #[test]
    fn mount_renders_existing_state() {
        let router = Arc::new(DefaultRouter::new(RouterConfig::default()));
        router.update(route_table().unwrap());
        router.start("/user/login").unwrap();

        let root = Arc::new(MemoryRoot::new("#app"));
        let app = Application::mount(
            router,
            route_table().unwrap(),
            root.clone(),
            ViewRegistry::standard(),
            Services {
                http: Arc::new(StubHttpClient::new()),
                session: Arc::new(MemorySessionStore::new()),
                api_base: "http://api".into(),
            },
        )
        .unwrap();

        assert_eq!(app.current().unwrap().name(), "login");
        assert_eq!(root.render_count(), 1);
        assert!(root.content().contains("data-view=\"login\""));
    }

    #[test]
    fn error_panel_escapes_message() {
        let panel = error_panel(&ViewError::MissingParameter {
            parameter: "<id>".into(),
        });
        assert!(panel.contains("&lt;id&gt;"));
    }
}
