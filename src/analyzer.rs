//! Analysis seam between the state machine and artifact production.
//!
//! The shipped analyzer only renders templates, so it cannot fail. The trait
//! exists so a real repository analysis can replace it; its error type is
//! what drives the `Failed` phase of the state machine.

use chrono::NaiveDateTime;

use crate::artifact::ArtifactSet;
use crate::errors::AnalysisError;
use crate::generator::generate;
use crate::templates::TemplateSet;
use crate::url::ValidUrl;

/// Produces the artifact set for a repository.
pub trait Analyzer {
    fn analyze(&self, url: &ValidUrl, now: NaiveDateTime) -> Result<ArtifactSet, AnalysisError>;
}

/// Renders the configured templates for the repository name.
#[derive(Debug, Clone, Default)]
pub struct TemplateAnalyzer {
    templates: TemplateSet,
}

impl TemplateAnalyzer {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }
}

impl Analyzer for TemplateAnalyzer {
    fn analyze(&self, url: &ValidUrl, now: NaiveDateTime) -> Result<ArtifactSet, AnalysisError> {
        Ok(generate(&self.templates, url, now))
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, url: &ValidUrl, now: NaiveDateTime) -> Result<ArtifactSet, AnalysisError> {
        (**self).analyze(url, now)
    }
}
