//! Effects (side effects as data).
//!
//! Transitions return effects instead of performing them. The session
//! executes the scheduling effects; the UI layer handles the rest.

use super::state::Ticket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the one-shot simulated completion for `ticket`.
    ScheduleCompletion { ticket: Ticket },
    /// Disarm the completion for `ticket` so it can never commit.
    CancelCompletion { ticket: Ticket },
    /// A fresh results phase began: expanded sections go back to the default.
    ResetSections,
    /// Analysis failed; surface `message` to the user.
    ReportFailure { message: String },
}
