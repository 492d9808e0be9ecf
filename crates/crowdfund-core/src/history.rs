//! 浏览历史协作方契约。

use alloc::string::String;

/// 浏览历史栈的抽象，对应浏览器的 `pushState` / `replaceState` / 前进 / 后退。
///
/// # 教案级说明
/// - **意图 (Why)**：路由器只需要“记录一条”“替换当前条”“移动游标”四种能力，
///   抽象成 Trait 后，浏览器环境与测试环境可以各自提供实现；
/// - **契约 (What)**：条目存储应用内完整路径（含查询串）；`back`/`forward` 到达边界时返回 `None`
///   且不移动游标；`push` 会丢弃游标之后的所有条目；
/// - **线程模型**：实现需 `Send`，由路由器在互斥锁内独占访问。
pub trait History: Send {
    /// 追加新条目并把游标移到末尾。
    fn push(&mut self, path: String);

    /// 替换游标处的条目；历史为空时等价于 `push`。
    fn replace(&mut self, path: String);

    /// 后退一步，返回到达的条目。
    fn back(&mut self) -> Option<String>;

    /// 前进一步，返回到达的条目。
    fn forward(&mut self) -> Option<String>;

    /// 游标处的条目。
    fn current(&self) -> Option<&str>;

    /// 条目总数。
    fn len(&self) -> usize;

    /// 历史是否为空。
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
