//! Progress feedback for the headless `generate` command.
//!
//! The loading phase is shown as a spinner that walks through the same five
//! steps the TUI loading screen reveals. Progress is hidden when stderr is not
//! a terminal or when `ARTIFACT_FORGE_QUIET` is set.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const TEMPLATE_SPINNER: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Loading steps with the offset at which each one is revealed.
pub const LOADING_STEPS: [(&str, Duration); 5] = [
    ("Analyzing README", Duration::from_millis(0)),
    ("Generating OpenAPI", Duration::from_millis(500)),
    ("Creating Tests", Duration::from_millis(1000)),
    ("Building Dockerfile", Duration::from_millis(1500)),
    ("Security Audit", Duration::from_millis(2000)),
];

/// Number of loading steps revealed after `elapsed`.
pub fn revealed_steps(elapsed: Duration) -> usize {
    LOADING_STEPS
        .iter()
        .filter(|(_, offset)| *offset <= elapsed)
        .count()
}

/// The step currently in progress.
pub fn current_step(elapsed: Duration) -> &'static str {
    let idx = revealed_steps(elapsed).saturating_sub(1);
    LOADING_STEPS[idx].0
}

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("ARTIFACT_FORGE_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Spinner shown while the simulated analysis runs.
pub struct LoadingSpinner {
    bar: ProgressBar,
}

impl LoadingSpinner {
    pub fn start(config: &ProgressConfig, label: &str) -> Self {
        let bar = if config.should_show_progress() {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template(TEMPLATE_SPINNER)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(format!("Forging artifacts for {}: {}", label, LOADING_STEPS[0].0));
        Self { bar }
    }

    /// Refresh the message for the step active after `elapsed`.
    pub fn update(&self, label: &str, elapsed: Duration) {
        self.bar.set_message(format!(
            "Forging artifacts for {}: {}",
            label,
            current_step(elapsed)
        ));
    }

    pub fn finish(&self, message: impl Into<String>) {
        self.bar.finish_with_message(message.into());
    }

    pub fn abandon(&self, message: impl Into<String>) {
        self.bar.abandon_with_message(message.into());
    }
}
