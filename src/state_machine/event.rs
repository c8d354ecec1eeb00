//! Events that drive the state machine.

use serde::Serialize;

use super::state::Ticket;
use crate::artifact::ArtifactSet;
use crate::errors::AnalysisError;
use crate::url::ValidUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A validated URL was submitted. The ticket identifies the completion
    /// that will be scheduled for it.
    Submit { url: ValidUrl, ticket: Ticket },
    /// The scheduled analysis finished.
    Completed {
        ticket: Ticket,
        outcome: Result<ArtifactSet, AnalysisError>,
    },
    /// Abandon a pending analysis (session torn down).
    Cancel,
    /// Leave results or failure and clear everything.
    StartOver,
    /// Leave a failure, keeping the URL for another attempt.
    Retry,
}

/// Event discriminant, used by the transition table and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Submit,
    Completed,
    Cancel,
    StartOver,
    Retry,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Submit { .. } => EventKind::Submit,
            Event::Completed { .. } => EventKind::Completed,
            Event::Cancel => EventKind::Cancel,
            Event::StartOver => EventKind::StartOver,
            Event::Retry => EventKind::Retry,
        }
    }
}
