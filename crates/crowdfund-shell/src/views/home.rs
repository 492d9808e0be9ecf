use crowdfund_core::{Markup, NavigationTarget};

use super::{View, ViewContext, ViewError};

/// 首页：静态欢迎语与入口链接。
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError> {
        let projects = ctx.link(NavigationTarget::named("projects"))?;
        let user = ctx.link(NavigationTarget::named("user"))?;
        Ok(Markup::new(format!(
            "<section class=\"home\">\
             <h1>Back the projects you believe in</h1>\
             <p><a href=\"{projects}\">Browse projects</a></p>\
             <p><a href=\"{user}\">Your account</a></p>\
             </section>"
        )))
    }
}
