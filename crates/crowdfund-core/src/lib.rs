#![deny(unsafe_code)]
#![doc = "crowdfund-core: 众筹客户端路由层的核心契约。"]
#![doc = ""]
#![doc = "本 Crate 只定义数据结构与协作方接口：路由模式、路由表、导航目标、视图状态、"]
#![doc = "错误分类，以及 HTTP、会话存储、渲染根节点、浏览历史四类外部协作方的 Trait。"]
#![doc = "具体的路由器实现位于 `crowdfund-router`，应用外壳位于 `crowdfund-shell`。"]

extern crate alloc;

pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod location;
pub mod navigation;
pub mod render;
pub mod route;
pub mod session;
pub mod table;
pub mod view;

pub use config::{HistoryMode, RouterConfig};
pub use error::{NavigationError, RouteTableError};
pub use history::History;
pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
pub use location::{Location, PathParams, Query};
pub use navigation::{NavigationTarget, ViewState};
pub use render::{Markup, RenderRoot};
pub use route::{Route, RoutePattern, RouteSegment};
pub use session::SessionStore;
pub use table::RouteTable;
pub use view::ViewId;
