//! # crowdfund-router
//!
//! ## 定位与职责（Why）
//! - 把请求路径解析为路由表中的一条记录与参数，并把结果保存为唯一的“当前视图状态”；
//! - 按逻辑名导航时回填路径、写入浏览历史，再走同一条解析流程；
//! - 状态变化后同步通知订阅者（应用外壳），取代框架层的隐式响应式机制。
//!
//! ## 状态所有权（What）
//! - 当前视图状态保存在路由器内部的 [`ArcSwapOption`] 中，只有导航流程会写入；
//!   外部只能通过 [`DefaultRouter::current`] 读取快照或通过订阅接收变更；
//! - 任何导航失败都不会改写当前视图状态，它保留上一次成功解析的值。
//!
//! ## 部署约束（Trade-offs）
//! - 默认的路径历史模式不带 `#` 前缀，宿主服务器必须把所有未命中的路径转发到应用入口，
//!   这一点无法由路由器自身保证。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::{ArcSwap, ArcSwapOption};
use crowdfund_core::{
    History, NavigationError, NavigationTarget, RouteTable, RouterConfig, ViewState,
};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

mod history;
mod subscription;

pub use history::MemoryHistory;
pub use subscription::{Listener, Subscription};

use subscription::Listeners;

/// 写入历史的方式。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryAction {
    Push,
    Replace,
}

/// 在历史中移动的方向。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Back,
    Forward,
}

/// `DefaultRouter` 提供基于 `ArcSwap` 的客户端路由实现。
///
/// # 设计动机（Why）
/// - **整表替换**：[`Self::update`] 一次 `store` 换入新路由表，正在读取旧表的调用自然过渡；
/// - **读路径零锁**：`resolve`/`current` 只做 `load`，不争用互斥锁；
/// - **单写者**：当前视图状态只在导航流程中写入，订阅者只读。
///
/// # 行为概览（How）
/// 1. 导航目标先转换为应用内路径（逻辑名目标在此回填参数）；
/// 2. 在路由表快照上解析，失败直接返回，历史与状态都不变；
/// 3. 与当前状态的完整路径相同则视为重复导航，直接返回当前状态；
/// 4. 写入历史，换入新状态，最后在锁外按订阅顺序同步通知。
///
/// # 使用契约（What）
/// - **前置条件**：调用方需先通过 [`Self::update`] 装载路由表，空表下任何路径都不命中；
/// - **后置条件**：成功返回的 `Arc<ViewState>` 与 [`Self::current`] 读到的是同一实例。
pub struct DefaultRouter {
    config: RouterConfig,
    table: ArcSwap<RouteTable>,
    current: ArcSwapOption<ViewState>,
    history: Mutex<Box<dyn History>>,
    listeners: Mutex<Listeners>,
    revision: AtomicU64,
}

impl DefaultRouter {
    /// 以内存历史构建空路由器。
    pub fn new(config: RouterConfig) -> Self {
        Self::with_history(config, MemoryHistory::new())
    }

    /// 以自定义历史实现构建空路由器。
    pub fn with_history<H>(config: RouterConfig, history: H) -> Self
    where
        H: History + 'static,
    {
        Self {
            config,
            table: ArcSwap::from_pointee(RouteTable::empty()),
            current: ArcSwapOption::empty(),
            history: Mutex::new(Box::new(history)),
            listeners: Mutex::new(Listeners::default()),
            revision: AtomicU64::new(0),
        }
    }

    /// 路由器配置。
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// 整表替换路由表，返回新的修订号。
    ///
    /// # 教案级说明
    /// - **意图 (Why)**：外壳在初始化时把路由表登记到路由器，之后路由表不再变化；
    ///   保留整表替换能力以便测试与热更新复用同一入口；
    /// - **后置条件 (Contract)**：新表立即对后续解析可见；当前视图状态不受影响，
    ///   直到下一次导航。
    pub fn update(&self, table: RouteTable) -> u64 {
        let routes = table.len();
        self.table.store(Arc::new(table));
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        info!(revision, routes, "route table installed");
        revision
    }

    /// 当前路由表快照。
    pub fn table(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    /// 路由表修订号，未装载时为 `0`。
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// 解析浏览器位置，不写历史、不改状态、不通知。
    ///
    /// 输入按历史模式与部署前缀归一化；路由器自身生成的应用内路径走内部解析，不经过这里。
    pub fn resolve(&self, path: &str) -> Result<ViewState, NavigationError> {
        let outcome = self.table.load().resolve(path, &self.config);
        log_resolution(path, outcome)
    }

    /// 启动时解析初始地址（浏览器加载时的 URL），替换历史的首个条目。
    pub fn start(&self, initial: &str) -> Result<Arc<ViewState>, NavigationError> {
        self.transition(NavigationTarget::from(initial), HistoryAction::Replace)
    }

    /// 导航到目标并压入一条历史。
    pub fn navigate<T>(&self, target: T) -> Result<Arc<ViewState>, NavigationError>
    where
        T: Into<NavigationTarget>,
    {
        self.transition(target.into(), HistoryAction::Push)
    }

    /// 导航到目标并替换当前历史条目。
    pub fn replace<T>(&self, target: T) -> Result<Arc<ViewState>, NavigationError>
    where
        T: Into<NavigationTarget>,
    {
        self.transition(target.into(), HistoryAction::Replace)
    }

    /// 后退一步；已在最早条目时返回 `Ok(None)`。
    pub fn back(&self) -> Result<Option<Arc<ViewState>>, NavigationError> {
        self.traverse(Direction::Back)
    }

    /// 前进一步；已在最新条目时返回 `Ok(None)`。
    pub fn forward(&self) -> Result<Option<Arc<ViewState>>, NavigationError> {
        self.traverse(Direction::Forward)
    }

    /// 生成目标的链接地址（考虑历史模式与部署前缀）。
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        self.table.load().href(target, &self.config)
    }

    /// 当前视图状态；首次成功解析前为 `None`。
    pub fn current(&self) -> Option<Arc<ViewState>> {
        self.current.load_full()
    }

    /// 历史条目数。
    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }

    /// 订阅视图状态变更。
    ///
    /// 监听器在状态换入之后被同步调用，调用顺序即订阅顺序。
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ViewState) + Send + Sync + 'static,
    {
        self.listeners.lock().insert(Arc::new(listener))
    }

    /// 取消订阅；凭据无效时返回 `false`。
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.lock().remove(subscription)
    }

    /// 当前订阅者数量。
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }

    fn transition(
        &self,
        target: NavigationTarget,
        action: HistoryAction,
    ) -> Result<Arc<ViewState>, NavigationError> {
        let state = self.resolve_target(&target)?;

        if let Some(current) = self.current.load_full() {
            if current.same_destination(&state) {
                debug!(path = current.path(), "duplicate navigation ignored");
                return Ok(current);
            }
        }

        {
            let mut history = self.history.lock();
            match action {
                HistoryAction::Push => history.push(state.full_path()),
                HistoryAction::Replace => history.replace(state.full_path()),
            }
        }

        let state = Arc::new(state);
        self.publish(Arc::clone(&state));
        info!(path = state.path(), route = state.name(), ?action, "navigated");
        Ok(state)
    }

    /// 字面路径按浏览器位置解析；逻辑名目标回填后按应用内路径解析。
    fn resolve_target(&self, target: &NavigationTarget) -> Result<ViewState, NavigationError> {
        match target {
            NavigationTarget::Path(raw) => self.resolve(raw),
            NavigationTarget::Named { .. } => {
                let table = self.table.load();
                let path = table
                    .path_for(target)
                    .inspect_err(report_programmer_error)?;
                log_resolution(&path, table.resolve_internal(&path, &self.config))
            }
        }
    }

    /// 在历史中移动并解析到达的条目。
    ///
    /// 解析失败（例如路由表已被替换）时游标退回原位，历史与当前视图状态保持一致。
    fn traverse(&self, direction: Direction) -> Result<Option<Arc<ViewState>>, NavigationError> {
        let state = {
            let mut history = self.history.lock();
            if history.is_empty() {
                return Err(NavigationError::NotStarted);
            }
            let reached = match direction {
                Direction::Back => history.back(),
                Direction::Forward => history.forward(),
            };
            let Some(path) = reached else {
                debug!(?direction, "history edge reached");
                return Ok(None);
            };

            let table = self.table.load();
            match log_resolution(&path, table.resolve_internal(&path, &self.config)) {
                Ok(state) => state,
                Err(err) => {
                    let _ = match direction {
                        Direction::Back => history.forward(),
                        Direction::Forward => history.back(),
                    };
                    return Err(err);
                }
            }
        };

        let state = Arc::new(state);
        self.publish(Arc::clone(&state));
        info!(path = state.path(), route = state.name(), ?direction, "history traversed");
        Ok(Some(state))
    }

    fn publish(&self, state: Arc<ViewState>) {
        self.current.store(Some(Arc::clone(&state)));
        let listeners = self.listeners.lock().snapshot();
        for listener in listeners {
            listener(&state);
        }
    }
}

impl Default for DefaultRouter {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

fn log_resolution(
    path: &str,
    outcome: Result<ViewState, NavigationError>,
) -> Result<ViewState, NavigationError> {
    match &outcome {
        Ok(state) => debug!(
            path = state.path(),
            route = state.name(),
            view = %state.view(),
            "route resolved"
        ),
        Err(err) => warn!(path, error = %err, "navigation path matched no route"),
    }
    outcome
}

fn report_programmer_error(err: &NavigationError) {
    if err.is_programmer_error() {
        error!(error = %err, "invalid navigation target");
    }
}
