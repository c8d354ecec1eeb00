//! Application phases and the data each one carries.

use serde::Serialize;

use crate::artifact::ArtifactSet;
use crate::errors::AnalysisError;
use crate::url::ValidUrl;

/// Identifies one scheduled completion. A completion is only committed if its
/// ticket matches the ticket of the current `Loading` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Ticket(pub u64);

/// Which screen is active, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Input,
    Loading,
    Results,
    Failed,
}

/// Controller state. Exactly one phase is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for a URL. `url` is the text to re-display in the field.
    Input { url: String },
    /// Simulated analysis in progress.
    Loading { url: ValidUrl, ticket: Ticket },
    /// Analysis finished with exactly five artifacts.
    Results { url: ValidUrl, artifacts: ArtifactSet },
    /// Analyzer reported an error.
    Failed { url: ValidUrl, error: AnalysisError },
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Input { url: String::new() }
    }
}

impl AppState {
    pub fn phase(&self) -> Phase {
        match self {
            AppState::Input { .. } => Phase::Input,
            AppState::Loading { .. } => Phase::Loading,
            AppState::Results { .. } => Phase::Results,
            AppState::Failed { .. } => Phase::Failed,
        }
    }

    /// URL text associated with the current phase.
    pub fn url(&self) -> &str {
        match self {
            AppState::Input { url } => url,
            AppState::Loading { url, .. }
            | AppState::Results { url, .. }
            | AppState::Failed { url, .. } => url.as_str(),
        }
    }

    pub fn artifacts(&self) -> Option<&ArtifactSet> {
        match self {
            AppState::Results { artifacts, .. } => Some(artifacts),
            _ => None,
        }
    }

    pub fn loading_ticket(&self) -> Option<Ticket> {
        match self {
            AppState::Loading { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}
