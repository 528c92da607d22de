//! Project Filter: narrows the project list by free-text query and tag.
//!
//! Pure functions only: the page route owns the query/tag state and passes it in
//! on every request, so the result depends on nothing but the current inputs.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::resume::model::Project;

/// Filter state carried in the page query string (`?q=...&tag=...`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectQuery {
    pub q: String,
    pub tag: String,
}

impl ProjectQuery {
    pub fn new(q: impl Into<String>, tag: impl Into<String>) -> Self {
        ProjectQuery {
            q: q.into(),
            tag: tag.into(),
        }
    }

    pub fn filter(&self) -> ProjectFilter<'_> {
        ProjectFilter::new(&self.q, &self.tag)
    }
}

/// A compiled query: lower-cased search needle plus exact tag.
#[derive(Debug, Clone)]
pub struct ProjectFilter<'a> {
    needle: Option<String>,
    tag: Option<&'a str>,
}

impl<'a> ProjectFilter<'a> {
    /// Blank queries and empty tags mean "no filter" on that axis.
    pub fn new(query: &str, tag: &'a str) -> Self {
        let needle = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };
        let tag = if tag.is_empty() { None } else { Some(tag) };

        ProjectFilter { needle, tag }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some() || self.tag.is_some()
    }

    /// Case-insensitive substring search over name, tech and achievements.
    pub fn matches_text(&self, project: &Project) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => searchable_text(project).contains(needle.as_str()),
        }
    }

    /// Exact, case-sensitive tag membership.
    pub fn matches_tag(&self, project: &Project) -> bool {
        match self.tag {
            None => true,
            Some(tag) => project.tags.iter().any(|t| t == tag),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_text(project) && self.matches_tag(project)
    }

    /// Stable filter: survivors keep their original relative order.
    pub fn apply<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

pub fn filter_projects<'p>(projects: &'p [Project], query: &str, tag: &str) -> Vec<&'p Project> {
    ProjectFilter::new(query, tag).apply(projects)
}

/// Distinct tags across all projects, sorted so the list renders stably.
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn searchable_text(project: &Project) -> String {
    let name = project.name.as_deref().unwrap_or_default();
    std::iter::once(name)
        .chain(project.tech.iter().map(String::as_str))
        .chain(project.achievements.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
