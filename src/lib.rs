//! artifact-forge: turn a GitHub repository URL into a starter set of
//! project artifacts (README, OpenAPI specification, unit tests, Dockerfile
//! and a security audit report).
//!
//! The flow is a small state machine (`Input → Loading → Results`) owned by a
//! [`Session`](state_machine::Session). The terminal UI and the headless CLI
//! both drive the same session; artifacts are exported to the clipboard or a
//! download directory.

// Export modules for library usage
pub mod analyzer;
pub mod artifact;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod generator;
pub mod notification;
pub mod progress;
pub mod state_machine;
pub mod templates;
pub mod tui;
pub mod url;
pub mod visibility;

// Re-export commonly used types
pub use crate::analyzer::{Analyzer, TemplateAnalyzer};
pub use crate::artifact::{Artifact, ArtifactKind, ArtifactSet};
pub use crate::errors::{
    AnalysisError, ClipboardError, ConfigError, DownloadError, ShapeError, SubmitError,
    TemplateError, TransitionError, ValidationError,
};
pub use crate::generator::generate;
pub use crate::notification::{Notification, NotificationKind};
pub use crate::state_machine::{AppState, Phase, Session};
pub use crate::templates::TemplateSet;
pub use crate::url::{validate, ValidUrl};
pub use crate::visibility::SectionVisibility;
