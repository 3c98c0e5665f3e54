//! User settings: integrations, privacy toggles, working hours.
//!
//! Integration statuses are local display state only; "connecting" an
//! integration never talks to a provider.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder account label used when an integration is connected.
const PLACEHOLDER_ACCOUNT: &str = "user@organization.com";

/// Calendar/meeting providers the settings page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
    GoogleCalendar,
    Outlook,
    Zoom,
}

impl IntegrationKind {
    /// Human-readable provider name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GoogleCalendar => "Google Calendar",
            Self::Outlook => "Microsoft Outlook",
            Self::Zoom => "Zoom",
        }
    }
}

/// Connection status of an integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum IntegrationStatus {
    /// Connected under the given account label.
    Connected { account: String },
    /// Not connected.
    NotConnected,
}

/// One provider row on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub kind: IntegrationKind,
    pub status: IntegrationStatus,
}

/// Working-hours summary shown in the settings sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Weekday span, e.g. "9:00 AM - 5:00 PM".
    pub weekday: String,
    /// Weekend label, e.g. "Off".
    pub weekend: String,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            weekday: "9:00 AM - 5:00 PM".into(),
            weekend: "Off".into(),
        }
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Provider integrations, in display order.
    #[serde(default = "default_integrations")]
    pub integrations: Vec<Integration>,

    /// Require user approval before invites are sent.
    #[serde(default = "default_true")]
    pub auto_schedule_approval: bool,

    /// Allow the assistant to read meeting descriptions for context.
    #[serde(default)]
    pub ai_data_access: bool,

    /// Working-hours summary.
    #[serde(default)]
    pub working_hours: WorkingHours,
}

fn default_true() -> bool {
    true
}

fn default_integrations() -> Vec<Integration> {
    vec![
        Integration {
            kind: IntegrationKind::GoogleCalendar,
            status: IntegrationStatus::Connected {
                account: PLACEHOLDER_ACCOUNT.into(),
            },
        },
        Integration {
            kind: IntegrationKind::Outlook,
            status: IntegrationStatus::NotConnected,
        },
        Integration {
            kind: IntegrationKind::Zoom,
            status: IntegrationStatus::NotConnected,
        },
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            integrations: default_integrations(),
            auto_schedule_approval: true,
            ai_data_access: false,
            working_hours: WorkingHours::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        serde_json::from_str(&content).map_err(SettingsError::Parse)
    }

    /// Save settings to a JSON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::Io)?;
        }
        std::fs::write(path, content).map_err(SettingsError::Io)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Flip an integration between connected and not connected.
    ///
    /// Connecting uses the placeholder account label; there is no real
    /// provider handshake behind this.
    pub fn toggle_integration(&mut self, kind: IntegrationKind) {
        if let Some(integration) = self.integrations.iter_mut().find(|i| i.kind == kind) {
            integration.status = match integration.status {
                IntegrationStatus::Connected { .. } => IntegrationStatus::NotConnected,
                IntegrationStatus::NotConnected => IntegrationStatus::Connected {
                    account: PLACEHOLDER_ACCOUNT.into(),
                },
            };
        }
    }
}

/// Errors that can occur loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}
