// Page Renderer: turns a loaded resume into a complete HTML document.
// Rendering is pure; the route owns the filter state and passes it in via PageView.

pub mod html;
pub mod sections;

use std::fmt;
use std::str::FromStr;

use crate::resume::filter::ProjectQuery;
use crate::resume::model::ResumeDocument;

/// Which page variant to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Search box and tag selector over a filtered project list.
    #[default]
    Interactive,
    /// Full project list, no controls, two-column skills.
    Static,
}

impl FromStr for RenderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(RenderMode::Interactive),
            "static" => Ok(RenderMode::Static),
            other => anyhow::bail!("RENDER_MODE must be 'interactive' or 'static', got '{other}'"),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Interactive => f.write_str("interactive"),
            RenderMode::Static => f.write_str("static"),
        }
    }
}

/// Everything besides the document that affects the rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub mode: RenderMode,
    pub query: ProjectQuery,
}

const STYLE: &str = r#"
body { font-family: ui-sans-serif, system-ui, -apple-system, sans-serif; margin: 0; }
main { padding: 2rem; max-width: 960px; margin: 0 auto; }
header { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 2rem; }
header h1 { margin: 0; font-size: 2rem; }
.subtitle, .dates, .phone { opacity: 0.8; }
.contact { display: flex; gap: 12px; flex-wrap: wrap; }
.project-filter { display: flex; gap: 8px; margin-bottom: 16px; flex-wrap: wrap; }
.project-filter input { flex: 1; min-width: 200px; padding: 6px 10px; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; }
.project-card, .skill-group { border: 1px solid #eee; border-radius: 12px; padding: 16px; }
.card-head { display: flex; justify-content: space-between; gap: 12px; align-items: flex-start; }
.card-head h3 { margin: 0; }
.badges, .tags, .links { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px; }
.badge { border: 1px solid #ddd; border-radius: 999px; padding: 2px 8px; font-size: 12px; }
.tag { font-size: 12px; opacity: 0.5; }
.media { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-top: 12px; }
.media img { width: 100%; border-radius: 8px; border: 1px solid #eee; }
.embed { width: 100%; height: 20rem; border: 1px solid #eee; border-radius: 12px; margin-top: 12px; }
.no-results { opacity: 0.7; font-style: italic; }
.skill-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.skill-grid.two-column { grid-template-columns: 1fr 1fr; }
.skill-group h3 { margin-top: 0; }
.skill-items { display: flex; flex-wrap: wrap; gap: 8px; padding: 0; margin: 0; list-style: none; }
.skill-items li { border: 1px solid #ddd; border-radius: 8px; padding: 6px 10px; }
footer { margin-top: 40px; opacity: 0.6; }
"#;

/// Renders the full page. Sections with no backing data are left out.
pub fn render_page(doc: &ResumeDocument, view: &PageView) -> String {
    let title = if doc.name.is_empty() {
        "Portfolio".to_string()
    } else {
        html::escape(&doc.name)
    };

    let body = [
        sections::header(&doc.name, &doc.contact),
        sections::projects(&doc.projects, view),
        sections::experience(&doc.experience),
        sections::education(&doc.education),
        sections::skills(&doc.skills, view.mode),
        r#"<footer>Built from <code>resume.json</code>. <a href="/api/resume">View JSON</a></footer>"#
            .to_string(),
    ]
    .concat();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title><style>{style}</style></head>",
            "<body><main>{body}</main></body></html>\n"
        ),
        title = title,
        style = STYLE,
        body = body
    )
}
