//! Pure transition function and the table of accepted transitions.

use super::effect::Effect;
use super::event::{Event, EventKind};
use super::state::{AppState, Phase};
use crate::errors::TransitionError;

/// Every accepted `(from, event, to)` triple. Anything not listed is rejected.
pub const TRANSITIONS: &[(Phase, EventKind, Phase)] = &[
    (Phase::Input, EventKind::Submit, Phase::Loading),
    (Phase::Loading, EventKind::Completed, Phase::Results),
    (Phase::Loading, EventKind::Completed, Phase::Failed),
    (Phase::Loading, EventKind::Cancel, Phase::Input),
    (Phase::Results, EventKind::StartOver, Phase::Input),
    (Phase::Failed, EventKind::Retry, Phase::Input),
    (Phase::Failed, EventKind::StartOver, Phase::Input),
];

/// Does `phase` accept `event` at all?
pub fn is_accepted(phase: Phase, event: EventKind) -> bool {
    TRANSITIONS.iter().any(|(from, e, _)| *from == phase && *e == event)
}

/// Next state plus the effects the caller must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: AppState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    fn quiet(state: AppState) -> Self {
        Self::new(state, Vec::new())
    }
}

/// Apply `event` to `state`.
///
/// Rejected events leave the caller's state untouched since `state` is only
/// borrowed.
pub fn transition(state: &AppState, event: Event) -> Result<TransitionResult, TransitionError> {
    let phase = state.phase();
    let kind = event.kind();

    let result = match (state, event) {
        (AppState::Input { .. }, Event::Submit { url, ticket }) => TransitionResult::new(
            AppState::Loading { url, ticket },
            vec![Effect::ScheduleCompletion { ticket }],
        ),

        (AppState::Loading { url, ticket: current }, Event::Completed { ticket, outcome }) => {
            if ticket != *current {
                return Err(TransitionError::StaleCompletion {
                    expected: Some(current.0),
                    received: ticket.0,
                });
            }
            match outcome {
                Ok(artifacts) => TransitionResult::new(
                    AppState::Results {
                        url: url.clone(),
                        artifacts,
                    },
                    vec![Effect::ResetSections],
                ),
                Err(error) => {
                    let message = error.to_string();
                    TransitionResult::new(
                        AppState::Failed {
                            url: url.clone(),
                            error,
                        },
                        vec![Effect::ReportFailure { message }],
                    )
                }
            }
        }

        (_, Event::Completed { ticket, .. }) => {
            return Err(TransitionError::StaleCompletion {
                expected: None,
                received: ticket.0,
            })
        }

        (AppState::Loading { url, ticket }, Event::Cancel) => TransitionResult::new(
            AppState::Input {
                url: url.as_str().to_string(),
            },
            vec![Effect::CancelCompletion { ticket: *ticket }],
        ),

        (AppState::Results { .. } | AppState::Failed { .. }, Event::StartOver) => {
            TransitionResult::quiet(AppState::default())
        }

        (AppState::Failed { url, .. }, Event::Retry) => TransitionResult::quiet(AppState::Input {
            url: url.as_str().to_string(),
        }),

        _ => return Err(TransitionError::Rejected { phase, event: kind }),
    };

    debug_assert!(
        TRANSITIONS.contains(&(phase, kind, result.state.phase())),
        "transition {:?} --{:?}--> {:?} missing from table",
        phase,
        kind,
        result.state.phase()
    );

    Ok(result)
}
