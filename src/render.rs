//! Plain-text and JSON rendering of a gallery view.

use std::fmt::Write;

use pf_core::project::LinkTarget;
use pf_core::view::CatalogView;

pub const NO_RESULTS_MESSAGE: &str = "No projects match your search.";

pub fn render_json(view: &CatalogView) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

pub fn render_text(view: &CatalogView) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Projects ({} of {})", view.len(), view.matched_count);
    if !view.search_text.trim().is_empty() {
        let _ = writeln!(out, "Search: {}", view.search_text);
    }
    let _ = writeln!(out, "Tags: {}", render_tag_line(view));
    out.push('\n');

    if view.is_empty() {
        let _ = writeln!(out, "{NO_RESULTS_MESSAGE}");
        return out;
    }

    for project in &view.projects {
        let _ = write!(out, "- {}", project.title);
        if !project.tags.is_empty() {
            let tags: Vec<&str> = project.tags.iter().map(String::as_str).collect();
            let _ = write!(out, "  [{}]", tags.join(", "));
        }
        out.push('\n');
        let _ = writeln!(out, "  {}", project.description);
        for link in &project.links {
            let marker = match link.target() {
                LinkTarget::NewTab => " ↗",
                LinkTarget::SameTab => "",
            };
            let _ = writeln!(out, "  {}{}: {}", link.label, marker, link.url);
        }
    }

    if let Some(toggle) = &view.toggle {
        let _ = writeln!(out, "\n[{}]", toggle.label);
    }
    out
}

/// Selected chips are wrapped in `*`.
fn render_tag_line(view: &CatalogView) -> String {
    view.tags
        .iter()
        .map(|chip| {
            if chip.selected {
                format!("*{}*", chip.tag)
            } else {
                chip.tag.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
