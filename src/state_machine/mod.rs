//! Application state machine for the input → loading → results flow.
//!
//! The machine is split the same way as the TUI key handling:
//!
//! - `state`, `event`, `effect`: plain data
//! - `transition`: pure `(state, event) -> (state, effects)` function with an
//!   explicit transition table
//! - `session`: the single owner of [`AppState`], which interprets effects
//!   (scheduling and cancelling the simulated completion)
//!
//! ```text
//!            Submit                Completed(Ok)
//!   Input ───────────► Loading ─────────────────► Results
//!     ▲                  │  │                        │
//!     │      Cancel      │  │ Completed(Err)         │ StartOver
//!     ├──────────────────┘  ▼                        │
//!     │   Retry/StartOver  Failed                    │
//!     ├─────────────────────┘                        │
//!     └──────────────────────────────────────────────┘
//! ```

pub mod effect;
pub mod event;
pub mod session;
pub mod state;
pub mod transition;

pub use effect::Effect;
pub use event::{Event, EventKind};
pub use session::{Session, DEFAULT_ANALYSIS_DELAY};
pub use state::{AppState, Phase, Ticket};
pub use transition::{is_accepted, transition, TransitionResult, TRANSITIONS};
