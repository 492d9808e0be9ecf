use crowdfund_core::{Markup, NavigationTarget};

use super::{View, ViewContext, ViewError};
use crate::session::current_identity;

/// 登录页：渲染登录表单；已登录时改为提示并链接到用户页。
#[derive(Clone, Copy, Debug, Default)]
pub struct LoginView;

impl View for LoginView {
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError> {
        let user = ctx.link(NavigationTarget::named("user"))?;
        let html = match current_identity(ctx.services().session.as_ref()) {
            Some(identity) => format!(
                "<section class=\"login\"><p>Already signed in as {}.</p>\
                 <p><a href=\"{user}\">Go to your account</a></p></section>",
                Markup::escape(identity.label()),
            ),
            None => {
                let action = ctx.link(NavigationTarget::named("login"))?;
                format!(
                    "<section class=\"login\"><h1>Sign in</h1>\
                     <form method=\"post\" action=\"{action}\">\
                     <label>Username <input name=\"username\"></label>\
                     <label>Password <input type=\"password\" name=\"password\"></label>\
                     <button type=\"submit\">Sign in</button>\
                     </form></section>"
                )
            }
        };
        Ok(Markup::new(html))
    }
}
