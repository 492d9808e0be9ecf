use std::sync::Arc;

use crowdfund_core::ViewState;

/// 视图状态变更监听器。
pub type Listener = Arc<dyn Fn(&ViewState) + Send + Sync>;

/// 订阅凭据，用于 [`DefaultRouter::unsubscribe`](crate::DefaultRouter::unsubscribe)。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// 凭据编号，按订阅先后单调递增。
    pub fn id(self) -> u64 {
        self.0
    }
}

/// 按订阅顺序保存的监听器列表。
///
/// - 通知时先在锁内克隆出 `Arc` 快照，再在锁外逐个调用，
///   因此监听器内部可以安全地读取路由器或再次订阅；
/// - 编号不复用，已退订的凭据再次退订返回 `false`。
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(Subscription, Listener)>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, listener: Listener) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, listener));
        subscription
    }

    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != subscription);
        self.entries.len() != before
    }

    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
