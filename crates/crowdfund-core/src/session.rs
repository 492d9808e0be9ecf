use alloc::string::String;

/// 会话存储协作方契约。
///
/// 用户页与登录页借助它在多次导航之间保留已登录身份。
/// 方法均以 `&self` 暴露，实现自行处理内部可变性，以便通过 `Arc<dyn SessionStore>` 共享。
pub trait SessionStore: Send + Sync {
    /// 读取键值。
    fn get(&self, key: &str) -> Option<String>;

    /// 写入或覆盖键值。
    fn set(&self, key: &str, value: String);

    /// 删除键并返回旧值。
    fn remove(&self, key: &str) -> Option<String>;

    /// 清空整个会话。
    fn clear(&self);
}
