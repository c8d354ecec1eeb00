//! Error types for artifact-forge operations.
//!
//! Each boundary gets its own small enum so callers can match on exactly the
//! failures that boundary can produce:
//!
//! - [`ValidationError`]: repository URL rejected by the input screen
//! - [`ShapeError`]: an artifact set that breaks the generator contract
//! - [`TemplateError`]: template overrides that could not be loaded
//! - [`AnalysisError`]: an analyzer failed to produce artifacts
//! - [`TransitionError`]: an event that is not valid in the current phase
//! - [`ClipboardError`] / [`DownloadError`]: export failures
//! - [`ConfigError`]: configuration file problems
//!
//! The binary and TUI layers wrap these in `anyhow::Error` with context.

use std::path::PathBuf;
use thiserror::Error;

use crate::artifact::ArtifactKind;
use crate::state_machine::{EventKind, Phase};

/// Repository URL validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input was empty after trimming.
    #[error("Please enter a GitHub repository URL")]
    Empty,

    /// Input is not `https://github.com/<owner>/<repo>` with an optional trailing slash.
    #[error("Please enter a valid GitHub repository URL (e.g., https://github.com/user/repo)")]
    InvalidFormat,
}

/// Violations of the artifact set contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected {expected} artifacts, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("artifact at position {position} is {found}, expected {expected}")]
    OutOfOrder {
        position: usize,
        expected: ArtifactKind,
        found: ArtifactKind,
    },

    #[error("filename {0:?} is used by more than one artifact")]
    DuplicateFilename(String),

    #[error("{0} artifact has an empty title")]
    EmptyTitle(ArtifactKind),

    #[error("{kind} artifact has an unsafe filename {filename:?}")]
    UnsafeFilename {
        kind: ArtifactKind,
        filename: String,
    },
}

/// Failures loading template overrides.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("failed to read template {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {0} is empty")]
    EmptyBody(PathBuf),
}

/// Failure reported by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analysis of {url} failed: {message}")]
pub struct AnalysisError {
    pub url: String,
    pub message: String,
}

impl AnalysisError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Events that the state machine refuses in the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{event:?} is not accepted while in {phase:?}")]
    Rejected { phase: Phase, event: EventKind },

    #[error("completion for ticket {received} ignored, current ticket is {expected:?}")]
    StaleCompletion {
        expected: Option<u64>,
        received: u64,
    },
}

/// Errors returned when submitting raw input through a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Clipboard failures. The platform may deny access entirely (headless
/// sessions, SSH, no display server) or fail the individual write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Failures triggering a single download.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("refusing to save {0:?}: filename must not contain path separators")]
    UnsafeFilename(String),

    #[error("failed to save {filename} to {dir}")]
    Io {
        filename: String,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("config file {0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_input_screen_copy() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter a GitHub repository URL"
        );
        assert!(ValidationError::InvalidFormat
            .to_string()
            .contains("https://github.com/user/repo"));
    }

    #[test]
    fn submit_error_wraps_validation_transparently() {
        let err: SubmitError = ValidationError::Empty.into();
        assert_eq!(err.to_string(), ValidationError::Empty.to_string());
    }

    #[test]
    fn shape_error_names_the_offending_kind() {
        let err = ShapeError::UnsafeFilename {
            kind: ArtifactKind::Dockerfile,
            filename: "../Dockerfile".into(),
        };
        assert_eq!(
            err.to_string(),
            "dockerfile artifact has an unsafe filename \"../Dockerfile\""
        );
    }
}
