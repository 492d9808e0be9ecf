//! 内存历史栈。
//!
//! 行为对齐浏览器会话历史：`push` 截断游标之后的条目，`back`/`forward` 在边界处原地不动。
//! 用于测试与命令行宿主；浏览器环境应以 `pushState` 实现同一 [`History`] 契约。

use crowdfund_core::History;

/// 以 `Vec` + 游标实现的历史栈。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// 创建空历史。
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部条目，按时间顺序。
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: String) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, path: String) {
        match self.entries.get_mut(self.cursor) {
            Some(slot) => *slot = path,
            None => self.push(path),
        }
    }

    fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
