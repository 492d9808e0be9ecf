use crowdfund_core::{Markup, NavigationTarget};

use super::{View, ViewContext, ViewError};
use crate::session::current_identity;

/// 用户页：展示会话中的身份，未登录时引导到登录页。
#[derive(Clone, Copy, Debug, Default)]
pub struct UserView;

impl View for UserView {
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError> {
        let html = match current_identity(ctx.services().session.as_ref()) {
            Some(identity) => format!(
                "<section class=\"user\"><h1>{}</h1><p>Signed in as {}</p></section>",
                Markup::escape(identity.label()),
                Markup::escape(&identity.username),
            ),
            None => {
                let login = ctx.link(NavigationTarget::named("login"))?;
                format!(
                    "<section class=\"user\"><p>You are not signed in.</p>\
                     <p><a href=\"{login}\">Sign in</a></p></section>"
                )
            }
        };
        Ok(Markup::new(html))
    }
}
