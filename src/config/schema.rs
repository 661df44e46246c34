//! Schema for the Atlassian integration configuration document.
//!
//! The on-disk document uses camelCase keys:
//!
//! ```json
//! {
//!   "tracker": { "projectKey": "SIMONE", "baseUrl": "..." },
//!   "docSpace": { "spaceKey": "SIMONE", "baseUrl": "..." },
//!   "sync": { "autoSync": true, "retryAttempts": 3 },
//!   "credentials": { "email": "you@example.com", "cloudId": "your-site" }
//! }
//! ```
//!
//! Every struct carries `#[serde(default)]`, so any field missing from the
//! document is filled in from the documented default below. Consumers can
//! therefore read fields directly without re-checking for absence.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the sync-preview tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtlassianConfig {
    /// Issue-tracking system (epics/tasks)
    pub tracker: TrackerConfig,

    /// Documentation system (pages within a named space)
    pub doc_space: DocSpaceConfig,

    /// Sync behavior settings - inert pass-through data
    pub sync: SyncConfig,

    /// Account identity echoed into request payloads
    pub credentials: Credentials,
}

/// Tracker (issue-tracking) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    pub project_key: String,
    pub project_name: String,
    pub project_type: String,
    pub epic_issue_type: String,
    pub task_issue_type: String,
    pub base_url: String,
    /// Placeholder until the user fills in a real token
    pub api_token: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            project_key: "SIMONE".to_string(),
            project_name: "Simone AI Project Management".to_string(),
            project_type: "software".to_string(),
            epic_issue_type: "Epic".to_string(),
            task_issue_type: "Task".to_string(),
            base_url: "https://your-site.atlassian.net".to_string(),
            api_token: "YOUR_TRACKER_API_TOKEN".to_string(),
        }
    }
}

/// Doc-space (documentation) settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocSpaceConfig {
    pub space_key: String,
    pub space_name: String,
    pub space_description: String,
    pub base_url: String,
    /// Placeholder until the user fills in a real token
    pub api_token: String,
}

impl Default for DocSpaceConfig {
    fn default() -> Self {
        Self {
            space_key: "SIMONE".to_string(),
            space_name: "Simone Project Documentation".to_string(),
            space_description:
                "AI-driven project management documentation and collaboration space".to_string(),
            base_url: "https://your-site.atlassian.net/wiki".to_string(),
            api_token: "YOUR_DOCSPACE_API_TOKEN".to_string(),
        }
    }
}

/// Sync behavior settings.
///
/// These fields describe automation the tool does not perform: no
/// scheduling, retrying, or conflict resolution happens anywhere. They are
/// parsed and echoed so a configured workspace round-trips faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    pub auto_sync: bool,
    pub sync_interval: String,
    pub bidirectional: bool,
    pub conflict_resolution: String,
    pub retry_attempts: u32,
    pub retry_delay: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_sync: true,
            sync_interval: "30m".to_string(),
            bidirectional: true,
            conflict_resolution: "latest_wins".to_string(),
            retry_attempts: 3,
            retry_delay: 1000,
        }
    }
}

/// Account identity used in request payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    pub email: String,
    pub cloud_id: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: "you@example.com".to_string(),
            cloud_id: "your-site".to_string(),
        }
    }
}
