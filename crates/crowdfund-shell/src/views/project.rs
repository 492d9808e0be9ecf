use crowdfund_core::{Markup, NavigationTarget};

use super::{View, ViewContext, ViewError, api_segment, money};
use crate::model::{Project, funded_percent};

/// 认捐变体对应的路由逻辑名。
const PLEDGE_ROUTE: &str = "pledge";

/// 单个项目页，同时承担认捐页。
///
/// 两条路由共用本视图：逻辑名为 `pledge` 时在详情之后追加认捐表单，
/// 否则追加指向认捐页的入口链接。
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectView;

impl View for ProjectView {
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError> {
        let id = ctx.param("projectID")?;
        let project: Project = ctx.fetch_json(&format!("/projects/{}", api_segment(id)))?;

        let title = Markup::escape(&project.title);
        let description = Markup::escape(&project.description);
        let creator = project
            .creator
            .as_deref()
            .map(|name| format!("<p class=\"creator\">by {}</p>", Markup::escape(name)))
            .unwrap_or_default();
        let mut html = format!(
            "<article class=\"project\" data-project=\"{id}\">\
             <h1>{title}</h1>{creator}<p>{description}</p>\
             <p class=\"progress\">{pledged} of {goal} ({percent}%)</p>",
            id = project.id,
            pledged = money(project.pledged),
            goal = money(project.goal),
            percent = funded_percent(project.pledged, project.goal),
        );

        let pledge_href =
            ctx.link(NavigationTarget::named(PLEDGE_ROUTE).param("projectID", id))?;
        if ctx.state().name() == PLEDGE_ROUTE {
            let back_href = ctx.link(NavigationTarget::named("project").param("projectID", id))?;
            html.push_str(&format!(
                "<form class=\"pledge\" method=\"post\" action=\"{pledge_href}\">\
                 <label>Amount <input type=\"number\" name=\"amount\" min=\"1\"></label>\
                 <button type=\"submit\">Pledge</button>\
                 <a href=\"{back_href}\">Cancel</a>\
                 </form>"
            ));
        } else {
            html.push_str(&format!(
                "<p><a class=\"back-this\" href=\"{pledge_href}\">Back this project</a></p>"
            ));
        }

        html.push_str("</article>");
        Ok(Markup::new(html))
    }
}
