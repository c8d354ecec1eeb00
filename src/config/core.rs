use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::notification::{NotificationDurations, LONG_DURATION, SHORT_DURATION};
use crate::state_machine::DEFAULT_ANALYSIS_DELAY;

/// Root configuration structure for artifact-forge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    /// Simulated analysis settings
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Where downloads land
    #[serde(default)]
    pub export: ExportSettings,

    /// Notification lifetimes
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Template overrides
    #[serde(default)]
    pub templates: TemplateSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSettings {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ExportSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationSettings {
    #[serde(default = "default_short_ms")]
    pub short_ms: u64,
    #[serde(default = "default_long_ms")]
    pub long_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            short_ms: default_short_ms(),
            long_ms: default_long_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    /// Directory holding `<kind>.tmpl` overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_ANALYSIS_DELAY.as_millis() as u64
}

fn default_short_ms() -> u64 {
    SHORT_DURATION.as_millis() as u64
}

fn default_long_ms() -> u64 {
    LONG_DURATION.as_millis() as u64
}

impl ForgeConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis.delay_ms)
    }

    pub fn notification_durations(&self) -> NotificationDurations {
        NotificationDurations {
            short: Duration::from_millis(self.notifications.short_ms),
            long: Duration::from_millis(self.notifications.long_ms),
        }
    }

    /// Configured directory, else the platform downloads directory, else `.`.
    pub fn download_dir(&self) -> PathBuf {
        self.export
            .download_dir
            .as_deref()
            .map(expand_home)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn template_dir(&self) -> Option<PathBuf> {
        self.templates.dir.as_deref().map(expand_home)
    }
}

/// Expand a leading `~/` against the home directory.
pub(crate) fn expand_home(path: &std::path::Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
