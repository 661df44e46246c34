//! Action logging for sas commands.
//!
//! Every binary invocation appends one JSONL entry to the workspace log
//! file. Logging is best-effort: a failure to write the log must never
//! break the command that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the log file location.
pub const ACTION_LOG_ENV: &str = "SIMONE_ACTION_LOG";

/// Log file location relative to the workspace root.
const DEFAULT_LOG_PATH: &str = ".simone/logs/actions.jsonl";

/// A single action log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLog {
    /// ISO 8601 timestamp when the action occurred
    pub timestamp: DateTime<Utc>,

    /// Workspace root the command ran against
    pub root: String,

    /// Command name (e.g. "sync", "create-project")
    pub command: String,

    /// Command arguments as JSON, with token-like values redacted
    pub args: serde_json::Value,

    /// Whether the command succeeded
    pub success: bool,

    /// Error message if the command failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds
    pub duration_ms: u64,

    /// User who executed the command
    pub user: String,
}

/// Append an entry to the action log.
///
/// Never fails: logging problems degrade to a stderr warning.
pub fn log_action(
    root: &Path,
    command: &str,
    args: serde_json::Value,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
) {
    let entry = ActionLog {
        timestamp: Utc::now(),
        root: root.to_string_lossy().to_string(),
        command: command.to_string(),
        args: sanitize_args(&args),
        success,
        error,
        duration_ms,
        user: current_user(),
    };

    if let Err(e) = write_entry(&resolve_log_path(root), &entry) {
        eprintln!("Warning: failed to write action log: {}", e);
    }
}

/// Log file path: `SIMONE_ACTION_LOG` override (with `~` expansion) or
/// the workspace default.
fn resolve_log_path(root: &Path) -> PathBuf {
    match std::env::var(ACTION_LOG_ENV) {
        Ok(custom) if !custom.is_empty() => expand_home(Path::new(&custom)),
        _ => root.join(DEFAULT_LOG_PATH),
    }
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

fn write_entry(path: &Path, entry: &ActionLog) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(entry).map_err(std::io::Error::other)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)
}

/// Redact token-like values and reduce path strings to their basename.
fn sanitize_args(args: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match args {
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, value) in map {
                let lower = key.to_lowercase();
                if lower.contains("token") || lower.contains("password") || lower.contains("secret")
                {
                    out.insert(key.clone(), Value::String("[REDACTED]".to_string()));
                } else {
                    out.insert(key.clone(), sanitize_args(value));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sanitize_args).collect()),
        Value::String(s) if s.contains('/') || s.contains('\\') => {
            Value::String(s.rsplit(['/', '\\']).next().unwrap_or(s).to_string())
        }
        other => other.clone(),
    }
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_redacts_token_keys() {
        let args = serde_json::json!({
            "apiToken": "abc123",
            "path": "docs",
            "nested": {"secret": "hush", "kept": true}
        });
        let sanitized = sanitize_args(&args);

        assert_eq!(sanitized["apiToken"], "[REDACTED]");
        assert_eq!(sanitized["nested"]["secret"], "[REDACTED]");
        assert_eq!(sanitized["nested"]["kept"], true);
        assert_eq!(sanitized["path"], "docs");
    }

    #[test]
    fn sanitize_reduces_paths_to_basenames() {
        let args = serde_json::json!({"path": "/home/user/.simone/02_REQUIREMENTS/M07"});
        assert_eq!(sanitize_args(&args)["path"], "M07");
    }

    #[test]
    fn sanitize_handles_windows_separators() {
        let args = serde_json::json!({"path": "C:\\simone\\milestones"});
        assert_eq!(sanitize_args(&args)["path"], "milestones");
    }

    #[test]
    fn entry_omits_error_when_successful() {
        let entry = ActionLog {
            timestamp: Utc::now(),
            root: "/tmp/ws".to_string(),
            command: "sync".to_string(),
            args: serde_json::json!({}),
            success: true,
            error: None,
            duration_ms: 4,
            user: "tester".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn write_entry_appends_one_line_per_call() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logs/actions.jsonl");
        let entry = ActionLog {
            timestamp: Utc::now(),
            root: "/tmp/ws".to_string(),
            command: "test".to_string(),
            args: serde_json::json!({}),
            success: true,
            error: None,
            duration_ms: 1,
            user: "tester".to_string(),
        };

        write_entry(&path, &entry).unwrap();
        write_entry(&path, &entry).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        let parsed: ActionLog = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(parsed.command, "test");
    }
}
