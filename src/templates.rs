//! Template resources for the five artifacts.
//!
//! Template bodies are data, not logic: the built-in set is compiled in from
//! the `templates/` directory and any body can be replaced by a file named
//! `<kind>.tmpl` in a configured override directory. Metadata (title,
//! filename, language) is fixed per kind.

use std::fs;
use std::path::Path;

use crate::artifact::ArtifactKind;
use crate::errors::TemplateError;

/// Placeholders substituted by the generator.
pub const PLACEHOLDER_PROJECT_NAME: &str = "{{project_name}}";
pub const PLACEHOLDER_REPO_LABEL: &str = "{{repo_label}}";
pub const PLACEHOLDER_REPO_URL: &str = "{{repo_url}}";
pub const PLACEHOLDER_DATE: &str = "{{date}}";

pub const KNOWN_PLACEHOLDERS: [&str; 4] = [
    PLACEHOLDER_PROJECT_NAME,
    PLACEHOLDER_REPO_LABEL,
    PLACEHOLDER_REPO_URL,
    PLACEHOLDER_DATE,
];

const README_BODY: &str = include_str!("../templates/readme.md.tmpl");
const OPENAPI_BODY: &str = include_str!("../templates/openapi.yaml.tmpl");
const TESTS_BODY: &str = include_str!("../templates/tests.py.tmpl");
const DOCKERFILE_BODY: &str = include_str!("../templates/Dockerfile.tmpl");
const AUDIT_BODY: &str = include_str!("../templates/security-audit.md.tmpl");

/// A single template: fixed metadata plus a body with placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactTemplate {
    pub kind: ArtifactKind,
    pub title: &'static str,
    pub filename: &'static str,
    pub language: &'static str,
    pub body: String,
}

/// One template per [`ArtifactKind`], in kind order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    templates: [ArtifactTemplate; 5],
}

impl TemplateSet {
    /// The templates shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            templates: ArtifactKind::ALL.map(builtin_template),
        }
    }

    /// Built-in templates with bodies replaced by any `<kind>.tmpl` found in `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self, TemplateError> {
        if !dir.is_dir() {
            return Err(TemplateError::MissingDirectory(dir.to_path_buf()));
        }

        let mut set = Self::builtin();
        for template in set.templates.iter_mut() {
            let path = dir.join(format!("{}.tmpl", template.kind));
            if !path.exists() {
                continue;
            }
            let body = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
                path: path.clone(),
                source,
            })?;
            if body.trim().is_empty() {
                return Err(TemplateError::EmptyBody(path));
            }
            tracing::debug!("Using template override {}", path.display());
            template.body = body;
        }
        Ok(set)
    }

    pub fn get(&self, kind: ArtifactKind) -> &ArtifactTemplate {
        &self.templates[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactTemplate> {
        self.templates.iter()
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_template(kind: ArtifactKind) -> ArtifactTemplate {
    let (title, filename, language, body) = match kind {
        ArtifactKind::Readme => ("README.md", "README.md", "markdown", README_BODY),
        ArtifactKind::Openapi => ("OpenAPI Specification", "openapi.yaml", "yaml", OPENAPI_BODY),
        ArtifactKind::Tests => ("Unit Tests", "tests.py", "python", TESTS_BODY),
        ArtifactKind::Dockerfile => ("Dockerfile", "Dockerfile", "dockerfile", DOCKERFILE_BODY),
        ArtifactKind::Audit => (
            "Security Audit Report",
            "security-audit.md",
            "markdown",
            AUDIT_BODY,
        ),
    };
    ArtifactTemplate {
        kind,
        title,
        filename,
        language,
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_bodies_are_non_empty() {
        for template in TemplateSet::builtin().iter() {
            assert!(!template.body.trim().is_empty(), "{} is empty", template.kind);
        }
    }

    #[test]
    fn only_audit_report_uses_the_date() {
        let set = TemplateSet::builtin();
        for template in set.iter() {
            let uses_date = template.body.contains(PLACEHOLDER_DATE);
            assert_eq!(uses_date, template.kind == ArtifactKind::Audit);
        }
    }

    #[test]
    fn override_replaces_only_matching_kind() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dockerfile.tmpl"), "FROM scratch # {{project_name}}\n").unwrap();

        let set = TemplateSet::with_overrides(dir.path()).unwrap();

        assert_eq!(
            set.get(ArtifactKind::Dockerfile).body,
            "FROM scratch # {{project_name}}\n"
        );
        assert_eq!(set.get(ArtifactKind::Dockerfile).filename, "Dockerfile");
        assert_eq!(
            set.get(ArtifactKind::Readme),
            TemplateSet::builtin().get(ArtifactKind::Readme)
        );
    }

    #[test]
    fn override_rejects_blank_body() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.tmpl"), "  \n").unwrap();

        assert!(matches!(
            TemplateSet::with_overrides(dir.path()),
            Err(TemplateError::EmptyBody(_))
        ));
    }

    #[test]
    fn override_requires_existing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            TemplateSet::with_overrides(&missing),
            Err(TemplateError::MissingDirectory(_))
        ));
    }
}
