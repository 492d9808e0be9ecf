use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crowdfund_core::{Markup, RenderRoot};

/// 内存渲染根节点：保存最近一次标记与渲染次数。
///
/// 浏览器环境中对应 `#app` 元素；这里用于测试与命令行宿主输出。
#[derive(Debug)]
pub struct MemoryRoot {
    anchor: String,
    mounted: AtomicBool,
    content: Mutex<Markup>,
    renders: AtomicU64,
}

impl MemoryRoot {
    /// 以锚点选择器创建未挂载的根节点。
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            mounted: AtomicBool::new(false),
            content: Mutex::new(Markup::default()),
            renders: AtomicU64::new(0),
        }
    }

    /// 最近一次写入的标记。
    pub fn content(&self) -> Markup {
        self.content.lock().clone()
    }

    /// 累计渲染次数。
    pub fn render_count(&self) -> u64 {
        self.renders.load(Ordering::Acquire)
    }

    /// 是否已挂载。
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

impl RenderRoot for MemoryRoot {
    fn anchor(&self) -> &str {
        &self.anchor
    }

    fn try_mount(&self) -> bool {
        self.mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
        *self.content.lock() = Markup::default();
    }

    fn update(&self, markup: &Markup) {
        *self.content.lock() = markup.clone();
        self.renders.fetch_add(1, Ordering::AcqRel);
    }
}
