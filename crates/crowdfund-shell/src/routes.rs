//! 应用的路由声明。
//!
//! 顺序即优先级。`project` 排在 `pledge` 与 `projects` 之前，三者段数不同，
//! 因此不存在实际的匹配冲突；`pledge` 与 `project` 共用项目视图，只靠逻辑名区分。

use crowdfund_core::{Route, RouteTable, RouteTableError, ViewId};

/// 声明：模式、逻辑名、视图。
const DECLARATIONS: [(&str, &str, ViewId); 6] = [
    ("/", "home", ViewId::Home),
    ("/projects/:projectID", "project", ViewId::Project),
    ("/projects/:projectID/pledge", "pledge", ViewId::Project),
    ("/projects", "projects", ViewId::Projects),
    ("/user", "user", ViewId::User),
    ("/user/login", "login", ViewId::Login),
];

/// 构造应用路由表。
pub fn route_table() -> Result<RouteTable, RouteTableError> {
    let routes = DECLARATIONS
        .iter()
        .map(|&(pattern, name, view)| Route::new(pattern, name, view))
        .collect::<Result<Vec<_>, _>>()?;
    RouteTable::new(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_build_a_valid_table() {
        let table = route_table().expect("声明应合法");
        let names: Vec<_> = table.iter().map(Route::name).collect();
        assert_eq!(names, ["home", "project", "pledge", "projects", "user", "login"]);
    }

    #[test]
    fn every_view_is_reachable() {
        let table = route_table().unwrap();
        for view in ViewId::ALL {
            assert!(
                table.iter().any(|route| route.view() == view),
                "{view} 没有对应路由"
            );
        }
    }
}
