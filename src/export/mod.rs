//! Artifact export: clipboard and file downloads.
//!
//! Follows the "Pure Core, Imperative Shell" split used by the TUI:
//!
//! - **clipboard**: I/O against the system clipboard
//! - **download**: I/O against a download directory
//! - this module: composes the I/O with the notification each action reports
//!
//! None of these functions touch the application state; the worst outcome of
//! a failed export is an error notification.

pub mod clipboard;
pub mod download;

pub use clipboard::{clipboard_available, copy_to_clipboard, ClipboardSink, SystemClipboard};
pub use download::{
    download_all, download_one, DirectoryTarget, DownloadOutcome, DownloadReport, DownloadTarget,
    TEXT_PLAIN,
};

use crate::artifact::Artifact;
use crate::notification::{Notification, NotificationDurations};

/// Copy an artifact's content and describe the outcome.
pub fn copy_artifact(
    sink: &mut dyn ClipboardSink,
    artifact: &Artifact,
    durations: NotificationDurations,
) -> Notification {
    match copy_to_clipboard(sink, &artifact.content) {
        Ok(()) => {
            tracing::info!("Copied {} to clipboard", artifact.title);
            Notification::success(
                "Copied to clipboard",
                format!("{} has been copied to your clipboard.", artifact.title),
                durations.short,
            )
        }
        Err(e) => {
            tracing::warn!("Copy of {} failed: {}", artifact.title, e);
            Notification::error(
                "Failed to copy",
                "Could not copy to clipboard.",
                durations.short,
            )
        }
    }
}

/// Download one artifact and describe the outcome.
pub fn download_artifact(
    target: &mut dyn DownloadTarget,
    artifact: &Artifact,
    durations: NotificationDurations,
) -> Notification {
    match download_one(target, artifact) {
        Ok(_) => Notification::success(
            "Download started",
            format!("{} is being downloaded.", artifact.title),
            durations.short,
        ),
        Err(e) => {
            tracing::warn!("Download of {} failed: {}", artifact.title, e);
            Notification::error(
                "Download failed",
                format!("Could not save {}: {}", artifact.export_name(), e),
                durations.short,
            )
        }
    }
}

/// Download every artifact and summarize the report.
pub fn download_all_artifacts<'a>(
    target: &mut dyn DownloadTarget,
    artifacts: impl IntoIterator<Item = &'a Artifact>,
    durations: NotificationDurations,
) -> (DownloadReport, Notification) {
    let report = download_all(target, artifacts);
    let notification = summarize_report(&report, durations);
    (report, notification)
}

pub fn summarize_report(report: &DownloadReport, durations: NotificationDurations) -> Notification {
    if report.all_succeeded() {
        Notification::success(
            "Download started",
            "All artifacts are being downloaded.",
            durations.long,
        )
    } else {
        Notification::error(
            "Download incomplete",
            format!(
                "{} of {} artifacts could not be saved.",
                report.failure_count(),
                report.attempted()
            ),
            durations.long,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactKind;
    use crate::errors::{ClipboardError, DownloadError};
    use crate::notification::NotificationKind;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl ClipboardSink for DeniedClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }
    }

    /// Records every trigger; fails the ones listed in `fail_on`.
    struct ScriptedTarget {
        triggered: Vec<String>,
        fail_on: Vec<usize>,
    }

    impl DownloadTarget for ScriptedTarget {
        fn save(&mut self, filename: &str, _bytes: &[u8], mime: &str) -> Result<PathBuf, DownloadError> {
            assert_eq!(mime, TEXT_PLAIN);
            let index = self.triggered.len();
            self.triggered.push(filename.to_string());
            if self.fail_on.contains(&index) {
                Err(DownloadError::Io {
                    filename: filename.to_string(),
                    dir: PathBuf::from("/nowhere"),
                    source: std::io::Error::other("disk full"),
                })
            } else {
                Ok(PathBuf::from("/downloads").join(filename))
            }
        }
    }

    fn artifacts() -> Vec<Artifact> {
        ArtifactKind::ALL
            .iter()
            .map(|kind| Artifact {
                kind: *kind,
                title: format!("{} doc", kind),
                filename: format!("{}.txt", kind),
                language: "markdown".into(),
                content: format!("content of {}", kind),
            })
            .collect()
    }

    #[test]
    fn copy_success_notifies_with_title() {
        let mut sink = RecordingClipboard::default();
        let a = &artifacts()[0];

        let n = copy_artifact(&mut sink, a, NotificationDurations::default());

        assert_eq!(sink.copied, vec!["content of readme".to_string()]);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.description, "readme doc has been copied to your clipboard.");
    }

    #[test]
    fn copy_failure_is_reported_not_propagated() {
        let n = copy_artifact(&mut DeniedClipboard, &artifacts()[1], NotificationDurations::default());
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.title, "Failed to copy");
        assert_eq!(n.description, "Could not copy to clipboard.");
    }

    #[test]
    fn download_all_triggers_every_artifact_in_order() {
        let mut target = ScriptedTarget {
            triggered: Vec::new(),
            fail_on: Vec::new(),
        };
        let all = artifacts();

        let (report, note) = download_all_artifacts(&mut target, &all, NotificationDurations::default());

        assert_eq!(
            target.triggered,
            vec!["readme.txt", "openapi.txt", "tests.txt", "dockerfile.txt", "audit.txt"]
        );
        assert!(report.all_succeeded());
        assert_eq!(note.description, "All artifacts are being downloaded.");
        assert_eq!(note.duration, NotificationDurations::default().long);
    }

    #[test]
    fn download_all_continues_past_failures() {
        let mut target = ScriptedTarget {
            triggered: Vec::new(),
            fail_on: vec![1],
        };
        let all = artifacts();

        let (report, note) = download_all_artifacts(&mut target, &all, NotificationDurations::default());

        assert_eq!(target.triggered.len(), 5);
        assert_eq!(report.attempted(), 5);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures().next().unwrap().kind, ArtifactKind::Openapi);
        assert!(report.outcomes[0].succeeded());
        assert!(report.outcomes[2].succeeded());
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.description, "1 of 5 artifacts could not be saved.");
    }

    #[test]
    fn single_download_failure_notifies_error() {
        let mut target = ScriptedTarget {
            triggered: Vec::new(),
            fail_on: vec![0],
        };
        let n = download_artifact(&mut target, &artifacts()[3], NotificationDurations::default());
        assert_eq!(n.title, "Download failed");
        assert!(n.description.starts_with("Could not save dockerfile.txt"));
    }
}
