//! 应用路由表上的链接往返性质
//!
//! 对任意合法的 `projectID`，外壳生成的项目页与认捐页链接交给路由器解析后，
//! 必须分别命中 `project` 与 `pledge` 并还原出同一参数值。`projectID` 取任意不含 `/` 的非空串，
//! 含 `?`、`#`、`%` 等保留字符。

use crowdfund_core::{NavigationTarget, RouterConfig, ViewId};
use crowdfund_router::DefaultRouter;
use crowdfund_shell::route_table;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_project_links_resolve_to_same_id(id in "[^/]{1,16}") {
        let router = DefaultRouter::new(RouterConfig::default());
        router.update(route_table().unwrap());

        for name in ["project", "pledge"] {
            let target = NavigationTarget::named(name).param("projectID", id.clone());
            let href = router.href(&target).unwrap();
            let state = router.resolve(&href).unwrap();
            prop_assert_eq!(state.name(), name);
            prop_assert_eq!(state.view(), ViewId::Project);
            prop_assert_eq!(state.params().get("projectID"), Some(id.as_str()));
        }
    }

    #[test]
    fn prop_navigation_slot_holds_latest_id(first in 1u64..10_000, second in 1u64..10_000) {
        let router = DefaultRouter::new(RouterConfig::default());
        router.update(route_table().unwrap());

        router.navigate(format!("/projects/{first}")).unwrap();
        let state = router.navigate(format!("/projects/{second}/pledge")).unwrap();
        let expected = second.to_string();
        prop_assert_eq!(state.params().get("projectID"), Some(expected.as_str()));
        let current = router.current().unwrap();
        prop_assert_eq!(current.name(), "pledge");
    }
}
