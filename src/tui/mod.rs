//! Terminal User Interface (TUI) for artifact-forge.
//!
//! Three screens driven by the session phase:
//!
//! - **Input**: URL field with inline validation and example repositories
//! - **Loading**: the simulated analysis with its five steps
//! - **Results**: collapsible artifact sections with copy and download
//!
//! A fourth **Failed** screen appears when an analyzer reports an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use artifact_forge::config::ForgeConfig;
//!
//! artifact_forge::tui::run(&ForgeConfig::default(), None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod animation;
pub mod app;
pub mod highlight;
pub mod layout;
pub mod navigation;
pub mod renderer;
pub mod theme;
pub mod views;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::analyzer::TemplateAnalyzer;
use crate::config::{self, ForgeConfig};
use crate::export::{clipboard_available, DirectoryTarget, SystemClipboard};
use crate::state_machine::{Phase, Session};
use app::App;

/// Input poll timeout; also the animation frame interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Build the application from configuration.
pub fn build_app(config: &ForgeConfig, url: Option<String>) -> Result<App> {
    let templates = config::load_templates(config).context("Failed to load templates")?;
    let session = Session::new(TemplateAnalyzer::new(templates), config.analysis_delay());
    let app = App::new(
        session,
        Box::new(SystemClipboard::new()),
        Box::new(DirectoryTarget::new(config.download_dir())),
        config.notification_durations(),
    )
    .with_clipboard_available(clipboard_available());
    Ok(match url {
        Some(url) => app.with_input(url),
        None => app,
    })
}

/// Launch the TUI and block until the user quits.
pub fn run(config: &ForgeConfig, url: Option<String>) -> Result<()> {
    let app = build_app(config, url)?;
    let mut tui = ForgeTui::new(app).context("Failed to initialize terminal")?;
    tui.run()
}

/// Runs a terminal restore at most once.
#[derive(Debug, Default)]
pub struct RestoreOnce {
    restored: bool,
}

impl RestoreOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Call `restore` unless a previous call already succeeded.
    pub fn run(&mut self, restore: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        restore()?;
        self.restored = true;
        Ok(())
    }
}

/// TUI manager owning the terminal and the application state
pub struct ForgeTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    restore: RestoreOnce,
}

impl ForgeTui {
    /// Create a new TUI manager and initialize the terminal
    pub fn new(app: App) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app,
            restore: RestoreOnce::new(),
        })
    }

    /// Run the event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("TUI started");
        loop {
            self.app.tick(Instant::now());
            self.terminal
                .draw(|f| renderer::render(f, &self.app))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if navigation::handle_key(&mut self.app, key, Instant::now()) {
                        break;
                    }
                }
            }
        }
        self.cleanup()?;
        tracing::info!("TUI stopped");
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Clean up and restore terminal. Later calls are no-ops.
    pub fn cleanup(&mut self) -> io::Result<()> {
        let terminal = &mut self.terminal;
        self.restore.run(|| {
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            terminal.show_cursor()
        })
    }
}

impl Drop for ForgeTui {
    fn drop(&mut self) {
        // Torn down mid-analysis: the pending completion must not fire.
        if self.app.phase() == Phase::Loading {
            let _ = self.app.session_mut().cancel(Instant::now());
        }
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_runs_once() {
        let mut restore = RestoreOnce::new();
        let mut calls = 0;
        restore
            .run(|| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        restore
            .run(|| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(calls, 1);
        assert!(restore.is_restored());
    }

    #[test]
    fn failed_restore_is_retried() {
        let mut restore = RestoreOnce::new();
        let failed = restore.run(|| Err(io::Error::other("tty gone")));
        assert!(failed.is_err());
        assert!(!restore.is_restored());

        let mut calls = 0;
        restore
            .run(|| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(calls, 1);
    }
}
