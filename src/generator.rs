//! Artifact generation from a validated repository URL.

use chrono::NaiveDateTime;

use crate::artifact::{Artifact, ArtifactSet};
use crate::templates::{
    TemplateSet, PLACEHOLDER_DATE, PLACEHOLDER_PROJECT_NAME, PLACEHOLDER_REPO_LABEL,
    PLACEHOLDER_REPO_URL,
};
use crate::url::ValidUrl;

/// Values interpolated into every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    pub project_name: String,
    pub repo_label: String,
    pub repo_url: String,
    pub date: String,
}

impl TemplateContext {
    pub fn new(url: &ValidUrl, now: NaiveDateTime) -> Self {
        Self {
            project_name: url.repo().to_string(),
            repo_label: url.label(),
            repo_url: url.as_str().to_string(),
            date: format_report_date(now),
        }
    }
}

/// US-style short date, e.g. `10/19/2026`.
pub fn format_report_date(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Substitute the known placeholders. Anything else in braces is kept as is.
pub fn render(body: &str, ctx: &TemplateContext) -> String {
    body.replace(PLACEHOLDER_PROJECT_NAME, &ctx.project_name)
        .replace(PLACEHOLDER_REPO_LABEL, &ctx.repo_label)
        .replace(PLACEHOLDER_REPO_URL, &ctx.repo_url)
        .replace(PLACEHOLDER_DATE, &ctx.date)
}

/// Produce the five artifacts for `url`.
///
/// Deterministic for a fixed `(url, now)`; `now` only reaches the audit report.
pub fn generate(templates: &TemplateSet, url: &ValidUrl, now: NaiveDateTime) -> ArtifactSet {
    let ctx = TemplateContext::new(url, now);
    let artifacts = templates
        .iter()
        .map(|template| Artifact {
            kind: template.kind,
            title: template.title.to_string(),
            filename: template.filename.to_string(),
            language: template.language.to_string(),
            content: render(&template.body, &ctx),
        })
        .collect();

    // Metadata is fixed per kind, so the shape cannot be violated here.
    ArtifactSet::new(artifacts).expect("template metadata satisfies the artifact set contract")
}
