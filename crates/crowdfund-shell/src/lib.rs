#![deny(unsafe_code)]
#![doc = "crowdfund-shell: 众筹客户端的应用外壳。"]
#![doc = ""]
#![doc = "外壳在启动时挂载一次，把路由表交给 `crowdfund-router`，订阅视图状态变化，"]
#![doc = "并按视图标识把当前状态渲染到唯一的渲染根节点。"]
#![doc = "本 Crate 同时提供配置加载、日志安装，以及 HTTP、会话、渲染根节点的内存实现，"]
#![doc = "供命令行宿主与测试使用。"]

pub mod app;
pub mod builder;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod render;
pub mod routes;
pub mod session;
pub mod telemetry;
pub mod views;

pub use app::Application;
pub use builder::ShellBuilder;
pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
pub use http::StubHttpClient;
pub use render::MemoryRoot;
pub use routes::route_table;
pub use session::{Identity, MemorySessionStore, current_identity, sign_in, sign_out};
pub use views::{Links, Services, View, ViewContext, ViewError, ViewRegistry};
