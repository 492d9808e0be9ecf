//! 渲染协作方契约。

use alloc::string::String;
use core::fmt;

/// 视图渲染产物。
///
/// 外壳只负责把它交给渲染根节点，不解释其内容。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// 包装已拼好的标记文本。
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    /// 读取文本。
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否包含给定片段，测试断言常用。
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// 转义文本中的标记特殊字符，用于插入来自接口的数据。
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                other => escaped.push(other),
            }
        }
        escaped
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 应用外壳挂载的唯一渲染根节点（例如 `#app`）。
///
/// # 教案级说明
/// - **契约 (What)**：`try_mount` 只在第一次调用时返回 `true`，此后同一根节点拒绝再次挂载；
///   `update` 用新标记整体替换根节点内容；
/// - **线程安全**：实现以内部可变性支持 `&self` 调用，外壳以 `Arc<dyn RenderRoot>` 共享。
pub trait RenderRoot: Send + Sync {
    /// 锚点选择器。
    fn anchor(&self) -> &str;

    /// 尝试挂载；已挂载时返回 `false`。
    fn try_mount(&self) -> bool;

    /// 解除挂载，之后允许重新挂载。
    fn unmount(&self);

    /// 用新标记替换根节点内容。
    fn update(&self, markup: &Markup);
}
