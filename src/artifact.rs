//! Artifact data model.
//!
//! An analysis always yields exactly one artifact of each [`ArtifactKind`],
//! in the fixed order of [`ArtifactKind::ALL`]. [`ArtifactSet`] enforces that
//! shape at construction so the rest of the crate can index by kind without
//! re-checking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::ShapeError;

/// The five artifact kinds, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Readme,
    Openapi,
    Tests,
    Dockerfile,
    Audit,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Readme,
        ArtifactKind::Openapi,
        ArtifactKind::Tests,
        ArtifactKind::Dockerfile,
        ArtifactKind::Audit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Readme => "readme",
            ArtifactKind::Openapi => "openapi",
            ArtifactKind::Tests => "tests",
            ArtifactKind::Dockerfile => "dockerfile",
            ArtifactKind::Audit => "audit",
        }
    }

    /// Position of this kind within an [`ArtifactSet`].
    pub fn index(&self) -> usize {
        match self {
            ArtifactKind::Readme => 0,
            ArtifactKind::Openapi => 1,
            ArtifactKind::Tests => 2,
            ArtifactKind::Dockerfile => 3,
            ArtifactKind::Audit => 4,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown artifact kind '{}', expected one of: readme, openapi, tests, dockerfile, audit",
                    s
                )
            })
    }
}

/// One generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub title: String,
    pub filename: String,
    /// Highlighting tag only ("markdown", "yaml", "python", "dockerfile").
    pub language: String,
    pub content: String,
}

impl Artifact {
    /// Name to save this artifact under.
    ///
    /// Falls back to the title slug plus the language tag when no filename
    /// was provided, e.g. `unit-tests.python`.
    pub fn export_name(&self) -> String {
        if self.filename.is_empty() {
            fallback_filename(&self.title, &self.language)
        } else {
            self.filename.clone()
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Build `<title-slug>.<language>` from a title and language tag.
pub fn fallback_filename(title: &str, language: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}.{}", slug, language)
}

/// True when `name` can be used as a single path component.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

/// Exactly five artifacts, one per kind, in [`ArtifactKind::ALL`] order,
/// with distinct filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Validate and wrap a list of artifacts.
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self, ShapeError> {
        validate_shape(&artifacts)?;
        Ok(Self { artifacts })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn as_slice(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn get(&self, kind: ArtifactKind) -> &Artifact {
        &self.artifacts[kind.index()]
    }

    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.artifacts.iter().map(|a| a.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Check the artifact set contract without taking ownership.
pub fn validate_shape(artifacts: &[Artifact]) -> Result<(), ShapeError> {
    if artifacts.len() != ArtifactKind::ALL.len() {
        return Err(ShapeError::WrongCount {
            expected: ArtifactKind::ALL.len(),
            found: artifacts.len(),
        });
    }

    let mut filenames = HashSet::new();
    for (position, (artifact, expected)) in artifacts.iter().zip(ArtifactKind::ALL).enumerate() {
        if artifact.kind != expected {
            return Err(ShapeError::OutOfOrder {
                position,
                expected,
                found: artifact.kind,
            });
        }
        if artifact.title.trim().is_empty() {
            return Err(ShapeError::EmptyTitle(artifact.kind));
        }
        if !is_safe_filename(&artifact.filename) {
            return Err(ShapeError::UnsafeFilename {
                kind: artifact.kind,
                filename: artifact.filename.clone(),
            });
        }
        if !filenames.insert(artifact.filename.as_str()) {
            return Err(ShapeError::DuplicateFilename(artifact.filename.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn artifact(kind: ArtifactKind, filename: &str) -> Artifact {
        Artifact {
            kind,
            title: kind.as_str().to_uppercase(),
            filename: filename.to_string(),
            language: "markdown".to_string(),
            content: "body".to_string(),
        }
    }

    fn valid_artifacts() -> Vec<Artifact> {
        ArtifactKind::ALL
            .iter()
            .map(|k| artifact(*k, &format!("{}.txt", k)))
            .collect()
    }

    #[test]
    fn accepts_one_of_each_kind_in_order() {
        let set = ArtifactSet::new(valid_artifacts()).unwrap();
        assert_eq!(set.kinds(), ArtifactKind::ALL.to_vec());
        assert_eq!(set.get(ArtifactKind::Tests).filename, "tests.txt");
    }

    #[test]
    fn rejects_wrong_count() {
        let mut artifacts = valid_artifacts();
        artifacts.pop();
        assert_eq!(
            ArtifactSet::new(artifacts).unwrap_err(),
            ShapeError::WrongCount {
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn rejects_reordered_kinds() {
        let mut artifacts = valid_artifacts();
        artifacts.swap(0, 1);
        assert!(matches!(
            ArtifactSet::new(artifacts),
            Err(ShapeError::OutOfOrder { position: 0, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_filenames() {
        let mut artifacts = valid_artifacts();
        artifacts[4].filename = "readme.txt".into();
        assert_eq!(
            ArtifactSet::new(artifacts).unwrap_err(),
            ShapeError::DuplicateFilename("readme.txt".into())
        );
    }

    #[test]
    fn rejects_path_separators_in_filenames() {
        for bad in ["docs/README.md", "..\\README.md", "..", ""] {
            let mut artifacts = valid_artifacts();
            artifacts[0].filename = bad.into();
            assert!(
                matches!(
                    ArtifactSet::new(artifacts),
                    Err(ShapeError::UnsafeFilename { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn fallback_filename_slugs_title() {
        assert_eq!(fallback_filename("Unit Tests", "python"), "unit-tests.python");
        let mut a = artifact(ArtifactKind::Tests, "");
        a.title = "Security  Audit Report".into();
        assert_eq!(a.export_name(), "security-audit-report.markdown");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("OpenAPI".parse::<ArtifactKind>(), Ok(ArtifactKind::Openapi));
        assert!("makefile".parse::<ArtifactKind>().is_err());
    }
}
