//! Session: the single owner of [`AppState`].
//!
//! All mutation goes through the transition function. The session also
//! interprets the scheduling effects: a submitted URL arms exactly one
//! pending completion (ticket + deadline) which [`Session::poll`] commits once
//! the deadline has passed. Time is passed in explicitly so callers (the TUI
//! loop, the headless runner, tests) decide what "now" is.

use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};

use super::effect::Effect;
use super::event::{Event, EventKind};
use super::state::{AppState, Phase, Ticket};
use super::transition::transition;
use crate::analyzer::{Analyzer, TemplateAnalyzer};
use crate::errors::{SubmitError, TransitionError};
use crate::url::{validate, ValidUrl};

/// Simulated analysis time.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCompletion {
    ticket: Ticket,
    started: Instant,
    deadline: Instant,
}

pub struct Session<A: Analyzer = TemplateAnalyzer> {
    state: AppState,
    analyzer: A,
    delay: Duration,
    pending: Option<PendingCompletion>,
    next_ticket: u64,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Session<TemplateAnalyzer> {
    /// Session with the built-in templates and the default delay.
    pub fn with_defaults() -> Self {
        Self::new(TemplateAnalyzer::default(), DEFAULT_ANALYSIS_DELAY)
    }
}

impl<A: Analyzer> Session<A> {
    pub fn new(analyzer: A, delay: Duration) -> Self {
        Self {
            state: AppState::default(),
            analyzer,
            delay,
            pending: None,
            next_ticket: 1,
            clock: local_now,
        }
    }

    /// Replace the wall clock used for artifact timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending completion is due, if one is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Fraction of the simulated analysis that has elapsed, in `0.0..=1.0`.
    pub fn loading_progress(&self, now: Instant) -> Option<f64> {
        self.pending.map(|p| {
            let total = p.deadline.saturating_duration_since(p.started).as_secs_f64();
            if total == 0.0 {
                1.0
            } else {
                (now.saturating_duration_since(p.started).as_secs_f64() / total).min(1.0)
            }
        })
    }

    /// Time since the current analysis started.
    pub fn loading_elapsed(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| now.saturating_duration_since(p.started))
    }

    /// Validate raw input and start the analysis.
    ///
    /// Submissions outside `Input` are rejected before validation so a
    /// double submit can never restart a running analysis.
    pub fn submit(&mut self, raw: &str, now: Instant) -> Result<Vec<Effect>, SubmitError> {
        self.ensure_accepts(EventKind::Submit)?;
        let url = validate(raw)?;
        Ok(self.submit_valid(url, now)?)
    }

    pub fn submit_valid(&mut self, url: ValidUrl, now: Instant) -> Result<Vec<Effect>, TransitionError> {
        let ticket = Ticket(self.next_ticket);
        let effects = self.apply(Event::Submit { url, ticket }, now)?;
        self.next_ticket += 1;
        Ok(effects)
    }

    /// Commit the pending completion if its deadline has passed.
    ///
    /// Returns the effects of the commit, or nothing when no completion is due.
    pub fn poll(&mut self, now: Instant) -> Vec<Effect> {
        let Some(pending) = self.pending else {
            return Vec::new();
        };
        if now < pending.deadline {
            return Vec::new();
        }

        let AppState::Loading { url, .. } = &self.state else {
            // Pending without Loading cannot happen; drop it rather than commit.
            tracing::warn!("Dropping orphaned completion {:?}", pending.ticket);
            self.pending = None;
            return Vec::new();
        };

        let outcome = self.analyzer.analyze(url, (self.clock)());
        match self.complete(pending.ticket, outcome, now) {
            Ok(effects) => effects,
            Err(e) => {
                tracing::warn!("Completion not committed: {}", e);
                Vec::new()
            }
        }
    }

    /// Deliver a completion for `ticket`. Only the ticket of the current
    /// `Loading` state is accepted.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<crate::artifact::ArtifactSet, crate::errors::AnalysisError>,
        now: Instant,
    ) -> Result<Vec<Effect>, TransitionError> {
        self.apply(Event::Completed { ticket, outcome }, now)
    }

    pub fn start_over(&mut self, now: Instant) -> Result<Vec<Effect>, TransitionError> {
        self.apply(Event::StartOver, now)
    }

    pub fn retry(&mut self, now: Instant) -> Result<Vec<Effect>, TransitionError> {
        self.apply(Event::Retry, now)
    }

    /// Abandon the running analysis, e.g. when the UI is torn down.
    pub fn cancel(&mut self, now: Instant) -> Result<Vec<Effect>, TransitionError> {
        self.apply(Event::Cancel, now)
    }

    fn ensure_accepts(&self, event: EventKind) -> Result<(), TransitionError> {
        if super::transition::is_accepted(self.phase(), event) {
            Ok(())
        } else {
            Err(TransitionError::Rejected {
                phase: self.phase(),
                event,
            })
        }
    }

    fn apply(&mut self, event: Event, now: Instant) -> Result<Vec<Effect>, TransitionError> {
        let from = self.phase();
        let kind = event.kind();
        let result = transition(&self.state, event)?;

        for effect in &result.effects {
            match effect {
                Effect::ScheduleCompletion { ticket } => {
                    self.pending = Some(PendingCompletion {
                        ticket: *ticket,
                        started: now,
                        deadline: now + self.delay,
                    });
                }
                Effect::CancelCompletion { ticket } => {
                    if self.pending.map(|p| p.ticket) == Some(*ticket) {
                        self.pending = None;
                    }
                }
                Effect::ReportFailure { message } => {
                    tracing::warn!("{}", message);
                }
                Effect::ResetSections => {}
            }
        }

        if from == Phase::Loading && result.state.phase() != Phase::Loading {
            self.pending = None;
        }

        tracing::debug!(
            "Transition {:?} --{:?}--> {:?}",
            from,
            kind,
            result.state.phase()
        );
        self.state = result.state;
        Ok(result.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactKind, ArtifactSet};
    use crate::errors::{AnalysisError, ValidationError};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const REACT: &str = "https://github.com/facebook/react";

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn session() -> Session {
        Session::with_defaults().with_clock(fixed_clock)
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn analyze(&self, url: &ValidUrl, _now: NaiveDateTime) -> Result<ArtifactSet, AnalysisError> {
            Err(AnalysisError::new(url.as_str(), "rate limited"))
        }
    }

    #[test]
    fn starts_in_input_with_empty_url() {
        let s = session();
        assert_eq!(s.state(), &AppState::Input { url: String::new() });
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn submit_then_poll_reaches_results_after_delay() {
        let mut s = session();
        let t0 = Instant::now();

        s.submit(REACT, t0).unwrap();
        assert_eq!(s.phase(), Phase::Loading);
        assert_eq!(s.state().url(), REACT);
        assert_eq!(s.next_deadline(), Some(t0 + DEFAULT_ANALYSIS_DELAY));

        assert!(s.poll(t0 + Duration::from_millis(2999)).is_empty());
        assert_eq!(s.phase(), Phase::Loading);

        let effects = s.poll(t0 + DEFAULT_ANALYSIS_DELAY);
        assert_eq!(effects, vec![Effect::ResetSections]);
        assert_eq!(s.phase(), Phase::Results);
        assert_eq!(
            s.state().artifacts().unwrap().kinds(),
            ArtifactKind::ALL.to_vec()
        );
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn completion_fires_once() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        let late = t0 + Duration::from_secs(10);
        assert!(!s.poll(late).is_empty());
        assert!(s.poll(late).is_empty());
    }

    #[test]
    fn invalid_submit_stays_in_input() {
        let mut s = session();
        let now = Instant::now();
        assert_eq!(
            s.submit("not-a-url", now),
            Err(SubmitError::Invalid(ValidationError::InvalidFormat))
        );
        assert_eq!(
            s.submit("https://gitlab.com/a/b", now),
            Err(SubmitError::Invalid(ValidationError::InvalidFormat))
        );
        assert_eq!(s.submit("  ", now), Err(SubmitError::Invalid(ValidationError::Empty)));
        assert_eq!(s.phase(), Phase::Input);
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn second_submit_while_loading_is_rejected() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        let deadline = s.next_deadline();

        let err = s
            .submit("https://github.com/microsoft/vscode", t0 + Duration::from_secs(1))
            .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Transition(TransitionError::Rejected {
                phase: Phase::Loading,
                event: EventKind::Submit
            })
        );
        assert_eq!(s.state().url(), REACT);
        assert_eq!(s.next_deadline(), deadline);
    }

    #[test]
    fn start_over_returns_to_empty_input() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        s.poll(t0 + DEFAULT_ANALYSIS_DELAY);

        s.start_over(t0 + Duration::from_secs(5)).unwrap();
        assert_eq!(s.state(), &AppState::Input { url: String::new() });
        assert!(s.state().artifacts().is_none());
    }

    #[test]
    fn cancel_disarms_pending_completion() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        let ticket = s.state().loading_ticket().unwrap();

        s.cancel(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(s.next_deadline(), None);
        assert!(s.poll(t0 + Duration::from_secs(10)).is_empty());
        assert_eq!(s.phase(), Phase::Input);

        // A late completion for the cancelled ticket is refused.
        let artifacts = TemplateAnalyzer::default()
            .analyze(&validate(REACT).unwrap(), fixed_clock())
            .unwrap();
        assert!(matches!(
            s.complete(ticket, Ok(artifacts), t0 + Duration::from_secs(11)),
            Err(TransitionError::StaleCompletion { .. })
        ));
        assert_eq!(s.phase(), Phase::Input);
    }

    #[test]
    fn resubmission_after_cancel_uses_a_new_ticket() {
        let mut s = session();
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        let first = s.state().loading_ticket().unwrap();
        s.cancel(t0).unwrap();
        s.submit(REACT, t0).unwrap();
        let second = s.state().loading_ticket().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn analyzer_failure_enters_failed_and_retry_keeps_url() {
        let mut s = Session::new(FailingAnalyzer, Duration::from_millis(10));
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();

        let effects = s.poll(t0 + Duration::from_millis(10));
        assert!(matches!(effects.as_slice(), [Effect::ReportFailure { .. }]));
        assert_eq!(s.phase(), Phase::Failed);

        s.retry(t0 + Duration::from_millis(20)).unwrap();
        assert_eq!(s.state(), &AppState::Input { url: REACT.to_string() });
    }

    #[test]
    fn zero_delay_completes_on_first_poll() {
        let mut s = Session::new(TemplateAnalyzer::default(), Duration::ZERO);
        let t0 = Instant::now();
        s.submit(REACT, t0).unwrap();
        assert_eq!(s.loading_progress(t0), Some(1.0));
        s.poll(t0);
        assert_eq!(s.phase(), Phase::Results);
    }

    #[test]
    fn loading_progress_tracks_elapsed_fraction() {
        let mut s = session();
        let t0 = Instant::now();
        assert_eq!(s.loading_progress(t0), None);
        s.submit(REACT, t0).unwrap();
        let half = s.loading_progress(t0 + Duration::from_millis(1500)).unwrap();
        assert!((half - 0.5).abs() < 1e-9);
        assert_eq!(s.loading_progress(t0 + Duration::from_secs(60)), Some(1.0));
    }
}
