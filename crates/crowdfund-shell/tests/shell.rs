//! 应用外壳端到端测试
//!
//! 以夹具数据驱动 HTTP 桩，覆盖挂载、每个视图的渲染、认捐变体、错误面板、
//! 登录状态对视图的影响以及连续导航后的槽位替换。

use std::sync::Arc;

use crowdfund_core::{
    HistoryMode, HttpMethod, HttpResponse, NavigationError, NavigationTarget, RenderRoot, ViewId,
};
use crowdfund_shell::{
    Application, Identity, MemoryRoot, MemorySessionStore, ShellBuilder, ShellConfig, ShellError,
    StubHttpClient, ViewRegistry, sign_in, sign_out, views::HomeView,
};

const FIXTURES: &str = include_str!("../fixtures/projects.json");

struct Harness {
    app: Application,
    root: Arc<MemoryRoot>,
    http: Arc<StubHttpClient>,
    session: Arc<MemorySessionStore>,
}

fn harness_with(config: ShellConfig) -> Harness {
    let http = Arc::new(
        StubHttpClient::from_fixture_json(&config.api.base_url, FIXTURES).expect("夹具合法"),
    );
    let root = Arc::new(MemoryRoot::new(config.app.anchor.clone()));
    let session = Arc::new(MemorySessionStore::new());
    let app = ShellBuilder::new()
        .with_config(config)
        .with_http_client(http.clone())
        .with_session_store(session.clone())
        .with_render_root(root.clone())
        .build()
        .expect("外壳挂载成功");
    Harness {
        app,
        root,
        http,
        session,
    }
}

fn harness() -> Harness {
    harness_with(ShellConfig::default())
}

#[test]
fn mounted_shell_starts_unresolved() {
    let h = harness();
    assert!(h.root.is_mounted());
    assert!(h.app.current().is_none());
    assert_eq!(h.root.render_count(), 0);
    assert_eq!(h.app.router().subscriber_count(), 1);
}

#[test]
fn home_renders_inside_layout() {
    let h = harness();
    h.app.start("/").unwrap();

    let markup = h.app.markup();
    assert_eq!(h.root.content(), markup);
    assert!(markup.contains("<div id=\"app\">"));
    assert!(markup.contains("data-route=\"home\" data-view=\"home\""));
    assert!(markup.contains("<section class=\"home\">"));
    assert!(markup.contains("<a href=\"/projects\">Projects</a>"));
    assert!(markup.contains("<a href=\"/user\">Account</a>"));
}

#[test]
fn projects_lists_fixture_entries_with_links() {
    let h = harness();
    h.app.start("/projects").unwrap();

    let markup = h.app.markup();
    assert!(markup.contains("data-view=\"projects\""));
    assert!(markup.contains("<a href=\"/projects/1\">Solar Kiosk</a>"));
    assert!(markup.contains("<a href=\"/projects/42\">Community Darkroom</a>"));
    assert!(markup.contains("$3200 of $5000 (64%)"));

    let requests = h.http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://localhost:8080/api/projects");
}

#[test]
fn empty_project_list_renders_placeholder() {
    let config = ShellConfig::default();
    let http = Arc::new(StubHttpClient::new().with_json(
        format!("{}/projects", config.api.base_url),
        &serde_json::json!([]),
    ));
    let app = ShellBuilder::new()
        .with_config(config)
        .with_http_client(http)
        .build()
        .unwrap();
    app.start("/projects").unwrap();
    assert!(app.markup().contains("No projects yet."));
}

#[test]
fn project_view_receives_route_parameter() {
    let h = harness();
    h.app.start("/projects/42").unwrap();

    let markup = h.app.markup();
    assert!(markup.contains("data-route=\"project\" data-view=\"project\""));
    assert!(markup.contains("data-project=\"42\""));
    assert!(markup.contains("<h1>Community Darkroom</h1>"));
    assert!(markup.contains("Film development space &amp; open lab nights."));
    assert!(markup.contains("<a class=\"back-this\" href=\"/projects/42/pledge\">"));
    assert!(!markup.contains("<form class=\"pledge\""));
    assert_eq!(
        h.http.requests()[0].url,
        "http://localhost:8080/api/projects/42"
    );
}

#[test]
fn pledge_route_renders_project_view_with_form() {
    let h = harness();
    h.app.start("/projects/1/pledge").unwrap();

    let markup = h.app.markup();
    assert!(markup.contains("data-route=\"pledge\" data-view=\"project\""));
    assert!(markup.contains("<h1>Solar Kiosk</h1>"));
    assert!(markup.contains("<p class=\"creator\">by ada</p>"));
    assert!(markup.contains("<form class=\"pledge\" method=\"post\" action=\"/projects/1/pledge\">"));
    assert!(markup.contains("<a href=\"/projects/1\">Cancel</a>"));
    assert!(!markup.contains("back-this"));
}

#[test]
fn second_navigation_replaces_first_view() {
    let h = harness();
    h.app.start("/projects/1").unwrap();
    h.app.navigate("/user").unwrap();

    let current = h.app.current().unwrap();
    assert_eq!(current.view(), ViewId::User);
    assert!(current.params().is_empty());

    let markup = h.app.markup();
    assert!(markup.contains("data-view=\"user\""));
    assert!(!markup.contains("data-project"));
    assert!(!markup.contains("Solar Kiosk"));
    assert_eq!(h.root.render_count(), 2);
}

#[test]
fn failed_navigation_keeps_rendered_view() {
    let h = harness();
    h.app.start("/").unwrap();
    let before = h.app.markup();

    let err = h.app.navigate("/does-not-exist").unwrap_err();
    assert!(matches!(
        err,
        ShellError::Navigation(NavigationError::NoMatchingRoute { .. })
    ));

    let err = h
        .app
        .navigate(NavigationTarget::named("project"))
        .unwrap_err();
    assert!(matches!(
        err,
        ShellError::Navigation(NavigationError::MissingParameter { .. })
    ));

    assert_eq!(h.app.markup(), before);
    assert_eq!(h.root.render_count(), 1);
    assert_eq!(h.app.current().unwrap().name(), "home");
}

#[test]
fn unknown_project_renders_error_panel() {
    let h = harness();
    h.app.start("/projects/7").unwrap();

    let markup = h.app.markup();
    assert!(markup.contains("data-route=\"project\""));
    assert!(markup.contains("<section class=\"error\">"));
    assert!(markup.contains("404"));
    assert_eq!(h.app.current().unwrap().params().get("projectID"), Some("7"));
}

#[test]
fn offline_api_renders_error_panel_then_recovers() {
    let h = harness();
    h.http.set_offline(Some("connection refused"));
    h.app.start("/projects").unwrap();
    assert!(h.app.markup().contains("<section class=\"error\">"));
    assert!(h.app.markup().contains("connection refused"));

    h.http.set_offline(None);
    h.app.refresh();
    assert!(!h.app.markup().contains("class=\"error\""));
    assert!(h.app.markup().contains("Solar Kiosk"));
}

#[test]
fn unregistered_view_renders_error_panel() {
    let app = ShellBuilder::new()
        .with_views(ViewRegistry::new().with(ViewId::Home, HomeView))
        .build()
        .unwrap();
    app.start("/user").unwrap();
    assert!(app.markup().contains("<section class=\"error\">"));
    assert!(app.markup().contains("no view is registered for `user`"));
}

#[test]
fn user_and_login_follow_session_identity() {
    let h = harness();
    h.app.start("/user").unwrap();
    assert!(h.app.markup().contains("You are not signed in."));
    assert!(h.app.markup().contains("<a href=\"/user/login\">Sign in</a>"));

    sign_in(
        h.session.as_ref(),
        &Identity {
            username: "ada".into(),
            display_name: Some("Ada <L>".into()),
        },
    )
    .unwrap();
    h.app.refresh();
    assert!(h.app.markup().contains("<h1>Ada &lt;L&gt;</h1>"));
    assert!(h.app.markup().contains("Signed in as ada"));

    h.app.navigate("/user/login").unwrap();
    assert!(h.app.markup().contains("Already signed in as Ada &lt;L&gt;."));

    sign_out(h.session.as_ref());
    h.app.refresh();
    assert!(h.app.markup().contains("<form method=\"post\" action=\"/user/login\">"));
}

#[test]
fn back_and_forward_rerender() {
    let h = harness();
    h.app.start("/").unwrap();
    h.app.navigate("/projects").unwrap();

    h.app.router().back().unwrap();
    assert!(h.app.markup().contains("data-view=\"home\""));

    h.app.router().forward().unwrap();
    assert!(h.app.markup().contains("data-view=\"projects\""));
}

#[test]
fn links_follow_deployment_base_and_mode() {
    let mut config = ShellConfig::default();
    config.router.base = "/fund".into();
    let h = harness_with(config);
    h.app.start("/fund/projects").unwrap();
    let markup = h.app.markup();
    assert!(markup.contains("<a href=\"/fund/\">Home</a>"));
    assert!(markup.contains("<a href=\"/fund/projects/1\">Solar Kiosk</a>"));

    let mut config = ShellConfig::default();
    config.router.mode = HistoryMode::Fragment;
    let h = harness_with(config);
    h.app.start("#/projects/42").unwrap();
    assert!(h.app.markup().contains("href=\"#/projects/42/pledge\""));
}

#[test]
fn render_root_mounts_only_once() {
    let root = Arc::new(MemoryRoot::new("#app"));
    let first = ShellBuilder::new()
        .with_render_root(root.clone())
        .build()
        .unwrap();

    let err = ShellBuilder::new()
        .with_render_root(root.clone())
        .build()
        .unwrap_err();
    match err {
        ShellError::AlreadyMounted { anchor } => assert_eq!(anchor, "#app"),
        other => panic!("unexpected error: {other}"),
    }

    first.start("/").unwrap();
    assert!(root.content().contains("data-view=\"home\""));
}

#[test]
fn unmount_releases_root_and_subscription() {
    let h = harness();
    h.app.start("/").unwrap();
    let router = h.app.router().clone();
    let root = h.root.clone();

    h.app.unmount();
    assert_eq!(router.subscriber_count(), 0);
    assert!(!root.is_mounted());
    assert!(root.content().as_str().is_empty());

    router.navigate("/projects").unwrap();
    assert_eq!(root.render_count(), 1);
    assert!(root.try_mount());
}

#[test]
fn reserved_characters_in_project_id_reach_pledge_view() {
    let h = harness();
    h.http.insert(
        HttpMethod::Get,
        "http://localhost:8080/api/projects/a%3Fb",
        HttpResponse::ok(r#"{"id": 5, "title": "Question & Answer"}"#),
    );

    h.app
        .navigate(NavigationTarget::named("pledge").param("projectID", "a?b"))
        .unwrap();

    let markup = h.app.markup();
    assert!(markup.contains("data-route=\"pledge\" data-view=\"project\""));
    assert!(markup.contains("<h1>Question &amp; Answer</h1>"));
    assert!(markup.contains("action=\"/projects/a%3Fb/pledge\""));
    assert!(markup.contains("<a href=\"/projects/a%3Fb\">Cancel</a>"));
    assert_eq!(
        h.http.requests().last().unwrap().url,
        "http://localhost:8080/api/projects/a%3Fb"
    );
}
