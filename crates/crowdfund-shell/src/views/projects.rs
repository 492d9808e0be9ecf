use std::fmt::Write as _;

use crowdfund_core::{Markup, NavigationTarget};

use super::{View, ViewContext, ViewError, money};
use crate::model::{ProjectSummary, funded_percent};

/// 项目列表：`GET /projects`，每项链接到对应的项目页。
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectsView;

impl View for ProjectsView {
    fn render(&self, ctx: &ViewContext<'_>) -> Result<Markup, ViewError> {
        let projects: Vec<ProjectSummary> = ctx.fetch_json("/projects")?;

        let mut html = String::from("<section class=\"projects\"><h1>Projects</h1>");
        if projects.is_empty() {
            html.push_str("<p class=\"empty\">No projects yet.</p>");
        } else {
            html.push_str("<ul>");
            for project in &projects {
                let href = ctx.link(
                    NavigationTarget::named("project").param("projectID", project.id.to_string()),
                )?;
                // 写入 String 不会失败
                let _ = write!(
                    html,
                    "<li><a href=\"{href}\">{title}</a> \
                     <span class=\"progress\">{pledged} of {goal} ({percent}%)</span></li>",
                    title = Markup::escape(&project.title),
                    pledged = money(project.pledged),
                    goal = money(project.goal),
                    percent = funded_percent(project.pledged, project.goal),
                );
            }
            html.push_str("</ul>");
        }
        html.push_str("</section>");
        Ok(Markup::new(html))
    }
}
