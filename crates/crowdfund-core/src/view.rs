use core::fmt;

/// 视图单元标识，对应应用中五个可渲染页面。
///
/// 路由表只引用标识，具体的渲染实现由外壳的视图注册表提供，
/// 因此同一视图可以挂在多条路由上（`project` 与 `pledge` 共用 [`ViewId::Project`]）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewId {
    /// 首页。
    Home,
    /// 项目列表。
    Projects,
    /// 单个项目，兼作认捐页。
    Project,
    /// 当前用户。
    User,
    /// 登录。
    Login,
}

impl ViewId {
    /// 全部视图，按声明顺序。
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Projects,
        ViewId::Project,
        ViewId::User,
        ViewId::Login,
    ];

    /// 稳定的小写名称，用于日志与标记属性。
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Projects => "projects",
            ViewId::Project => "project",
            ViewId::User => "user",
            ViewId::Login => "login",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
