//! Page sections. Each function returns an empty string when its data is empty
//! so the page simply omits the section.

use crate::render::html::{bullet_list, escape, external_link};
use crate::render::{PageView, RenderMode};
use crate::resume::filter::{available_tags, filter_projects};
use crate::resume::model::{Contact, Education, Experience, Project, SkillSet};

/// Number of media images shown per project card.
const MEDIA_PREVIEW_LIMIT: usize = 2;

pub const NO_RESULTS_MESSAGE: &str = "No projects match your search.";

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

pub fn header(name: &str, contact: &Contact) -> String {
    let mut links = Vec::new();
    if let Some(email) = non_empty(&contact.email) {
        links.push(format!(
            r#"<a href="mailto:{}">Email</a>"#,
            escape(email)
        ));
    }
    if let Some(github) = non_empty(&contact.github) {
        links.push(external_link(github, "GitHub"));
    }
    if let Some(linkedin) = non_empty(&contact.linkedin) {
        links.push(external_link(linkedin, "LinkedIn"));
    }
    if let Some(phone) = non_empty(&contact.phone) {
        links.push(format!(r#"<span class="phone">{}</span>"#, escape(phone)));
    }

    let nav = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<nav class="contact">{}</nav>"#, links.join(""))
    };

    format!(
        r#"<header><div><h1>{}</h1><p class="subtitle">Portfolio generated from resume.json</p></div>{nav}</header>"#,
        escape(name)
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn projects(projects: &[Project], view: &PageView) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<section id="projects"><h2>Projects</h2>"#);

    let shown: Vec<&Project> = match view.mode {
        RenderMode::Interactive => {
            out.push_str(&filter_controls(projects, view));
            filter_projects(projects, &view.query.q, &view.query.tag)
        }
        RenderMode::Static => projects.iter().collect(),
    };

    if shown.is_empty() {
        out.push_str(&format!(
            r#"<p class="no-results">{NO_RESULTS_MESSAGE}</p>"#
        ));
    } else {
        out.push_str(r#"<div class="project-grid">"#);
        for project in shown {
            out.push_str(&project_card(project));
        }
        out.push_str("</div>");
    }

    out.push_str("</section>");
    out
}

fn filter_controls(projects: &[Project], view: &PageView) -> String {
    let mut options = String::from(r#"<option value="">All tags</option>"#);
    for tag in available_tags(projects) {
        let selected = if tag == view.query.tag { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{0}"{selected}>{0}</option>"#,
            escape(&tag)
        ));
    }

    let clear = if view.query.filter().is_active() {
        r#"<a class="clear" href="/#projects">Clear</a>"#
    } else {
        ""
    };

    format!(
        concat!(
            r#"<form class="project-filter" method="get" action="/#projects">"#,
            r#"<input type="search" name="q" placeholder="Search projects" value="{}">"#,
            r#"<select name="tag" onchange="this.form.submit()">{}</select>"#,
            r#"<button type="submit">Filter</button>{}"#,
            r#"</form>"#
        ),
        escape(&view.query.q),
        options,
        clear
    )
}

fn project_card(project: &Project) -> String {
    let mut out = String::from(r#"<article class="project-card"><div class="card-head">"#);
    out.push_str(&format!(
        "<h3>{}</h3>",
        escape(project.name.as_deref().unwrap_or_default())
    ));
    if let Some(dates) = non_empty(&project.dates) {
        out.push_str(&format!(r#"<span class="dates">{}</span>"#, escape(dates)));
    }
    out.push_str("</div>");

    if !project.tech.is_empty() {
        out.push_str(r#"<div class="badges">"#);
        for tech in &project.tech {
            out.push_str(&format!(r#"<span class="badge">{}</span>"#, escape(tech)));
        }
        out.push_str("</div>");
    }

    out.push_str(&bullet_list("achievements", &project.achievements));

    if !project.media.is_empty() {
        out.push_str(r#"<div class="media">"#);
        for src in project.media.iter().take(MEDIA_PREVIEW_LIMIT) {
            out.push_str(&format!(r#"<img src="{}" alt="">"#, escape(src)));
        }
        out.push_str("</div>");
    }

    let demo = non_empty(&project.demo);
    let repo = non_empty(&project.repo);
    if demo.is_some() || repo.is_some() {
        out.push_str(r#"<div class="links">"#);
        if let Some(demo) = demo {
            out.push_str(&external_link(demo, "Demo"));
        }
        if let Some(repo) = repo {
            out.push_str(&external_link(repo, "Code"));
        }
        out.push_str("</div>");
    }

    if let Some(embed) = non_empty(&project.embed_url) {
        out.push_str(&format!(
            r#"<iframe class="embed" src="{}" loading="lazy" allow="fullscreen; clipboard-read; clipboard-write"></iframe>"#,
            escape(embed)
        ));
    }

    if !project.tags.is_empty() {
        out.push_str(r#"<div class="tags">"#);
        for tag in &project.tags {
            out.push_str(&format!(r#"<span class="tag">#{}</span>"#, escape(tag)));
        }
        out.push_str("</div>");
    }

    out.push_str("</article>");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Experience / Education
// ────────────────────────────────────────────────────────────────────────────

pub fn experience(entries: &[Experience]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<section id="experience"><h2>Experience</h2><ul>"#);
    for e in entries {
        out.push_str(&format!(
            r#"<li><div><strong>{}</strong> @ {} — {}</div><div class="dates">{}</div>{}</li>"#,
            escape(&e.title),
            escape(&e.company),
            escape(&e.location),
            escape(&e.dates),
            bullet_list("achievements", &e.achievements)
        ));
    }
    out.push_str("</ul></section>");
    out
}

pub fn education(entries: &[Education]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<section id="education"><h2>Education</h2><ul>"#);
    for ed in entries {
        out.push_str(&format!(
            "<li><strong>{}</strong>, {}<br>{}",
            escape(&ed.institution),
            escape(&ed.location),
            escape(&ed.degree)
        ));
        if !ed.concentration.is_empty() {
            out.push_str(&format!(
                " — Concentration: {}",
                escape(&ed.concentration.join(", "))
            ));
        }
        if !ed.graduation_date.is_empty() {
            out.push_str(&format!(" — <em>{}</em>", escape(&ed.graduation_date)));
        }
        if !ed.coursework.is_empty() {
            out.push_str(&format!(
                r#"<div class="coursework"><span class="label">Coursework:</span> {}</div>"#,
                escape(&ed.coursework.join(", "))
            ));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></section>");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn skills(skills: &SkillSet, mode: RenderMode) -> String {
    let groups = skills.groups();
    if groups.is_empty() {
        return String::new();
    }

    let grid = match mode {
        RenderMode::Interactive => "skill-grid",
        RenderMode::Static => "skill-grid two-column",
    };

    let mut out = format!(r#"<section id="skills"><h2>Skills</h2><div class="{grid}">"#);
    for (title, items) in groups {
        out.push_str(&format!(
            r#"<section class="skill-group"><h3>{}</h3>{}</section>"#,
            escape(title),
            bullet_list("skill-items", items)
        ));
    }
    out.push_str("</div></section>");
    out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
