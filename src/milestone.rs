//! Milestone metadata extraction.
//!
//! A milestone is described by a markdown document named
//! `M07_milestone_meta.md` inside the milestone directory:
//!
//! ```markdown
//! # M07 Atlassian Integration - Milestone Meta
//!
//! ## Overview
//! Integrate Simone with the tracker and doc space.
//!
//! ## Success Criteria
//! - [x] Configuration schema defined
//! - [ ] Payloads previewed
//! ```
//!
//! The document splits into sections at `##` heading lines. Absence - of
//! the file, the title heading, a section, or any checklist - is a
//! first-class case that degrades to a documented default rather than an
//! error. Only a filesystem failure on an *existing* file propagates.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::Result;

/// Fixed name of the milestone meta document.
pub const META_FILE_NAME: &str = "M07_milestone_meta.md";

/// Sentinel used when the Overview section is missing or empty.
const NO_DESCRIPTION: &str = "No description provided";

/// Checklist-derived completion status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

impl MilestoneStatus {
    /// Status for `completed` checked items out of `total`.
    ///
    /// `percentage` is `round(100 * completed / total)`, defined as 0 when
    /// `total` is 0.
    pub fn new(completed: u32, total: u32) -> Self {
        let percentage = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    fn zero() -> Self {
        Self {
            completed: 0,
            total: 0,
            percentage: 0,
        }
    }
}

/// Normalized milestone metadata, built fresh per `sync` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneMeta {
    /// Short code, letter `M` followed by digits (e.g. `M07`)
    pub key: String,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
}

impl Default for MilestoneMeta {
    /// The record used when no meta document exists.
    fn default() -> Self {
        Self {
            key: "M07".to_string(),
            title: "Atlassian Integration".to_string(),
            description: "Integrate Simone with Atlassian Jira and Confluence".to_string(),
            status: MilestoneStatus {
                completed: 0,
                total: 9,
                percentage: 0,
            },
        }
    }
}

/// Read milestone metadata from the meta document in `dir`.
///
/// A missing document yields [`MilestoneMeta::default`]; any other read
/// failure (e.g. permission denied) propagates.
pub fn read_meta(dir: &Path) -> Result<MilestoneMeta> {
    match fs::read_to_string(dir.join(META_FILE_NAME)) {
        Ok(content) => Ok(parse_meta(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(MilestoneMeta::default()),
        Err(e) => Err(e.into()),
    }
}

/// Parse a meta document into a milestone record.
pub fn parse_meta(content: &str) -> MilestoneMeta {
    let defaults = MilestoneMeta::default();
    let (key, title) = parse_heading(content).unwrap_or((defaults.key, defaults.title));

    let description = section_body(content, "Overview")
        .map(|body| body.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let status = match section_body(content, "Success Criteria") {
        Some(body) => checklist_status(&body),
        None => MilestoneStatus::zero(),
    };

    MilestoneMeta {
        key,
        title,
        description,
        status,
    }
}

/// Match the first title line of the shape `# <KEY> <TITLE> - Milestone Meta`.
///
/// KEY is `M` followed by one or more digits. The match is case-sensitive
/// and anchored to the start of a line; `##` section headings never match.
fn parse_heading(content: &str) -> Option<(String, String)> {
    for line in content.lines() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if rest.starts_with('#') {
            continue;
        }
        let rest = rest.trim_start();
        let Some((key, after_key)) = split_key(rest) else {
            continue;
        };
        // at least one whitespace character between key and title
        if !after_key.starts_with(char::is_whitespace) {
            continue;
        }
        if let Some(title) = split_title(after_key.trim_start()) {
            return Some((key.to_string(), title));
        }
    }
    None
}

/// Split `M<digits>` off the front of `s`.
fn split_key(s: &str) -> Option<(&str, &str)> {
    let after_m = s.strip_prefix('M')?;
    let digits = after_m.len() - after_m.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    Some(s.split_at(1 + digits))
}

/// The title runs to the first hyphen delimiter followed by
/// `Milestone Meta` (whitespace around the hyphen optional). Titles may
/// themselves contain hyphens; the earliest qualifying delimiter wins.
fn split_title(s: &str) -> Option<String> {
    let mut from = 0;
    while let Some(offset) = s[from..].find('-') {
        let idx = from + offset;
        let title = s[..idx].trim_end();
        let tail = s[idx + 1..].trim_start();
        if tail.starts_with("Milestone Meta") && !title.is_empty() {
            return Some(title.to_string());
        }
        from = idx + 1;
    }
    None
}

/// Body of the first section whose heading is exactly `name`.
///
/// Sections start at lines beginning with `##`; the section name is the
/// heading with leading `#`s stripped and trimmed, and the body runs to
/// the next `##` line or end of document.
fn section_body(content: &str, name: &str) -> Option<String> {
    let mut body: Option<Vec<&str>> = None;
    for line in content.lines() {
        if line.starts_with("##") {
            if body.is_some() {
                break;
            }
            if line.trim_start_matches('#').trim() == name {
                body = Some(Vec::new());
            }
        } else if let Some(lines) = body.as_mut() {
            lines.push(line);
        }
    }
    body.map(|lines| lines.join("\n"))
}

/// Count checklist items in a Success Criteria body.
///
/// An item is a line whose trimmed form starts with `- [`; it counts as
/// completed when the line contains `- [x]`. Continuation lines of
/// multi-line entries are ignored.
fn checklist_status(body: &str) -> MilestoneStatus {
    let mut total = 0;
    let mut completed = 0;
    for line in body.lines() {
        if line.trim_start().starts_with("- [") {
            total += 1;
            if line.contains("- [x]") {
                completed += 1;
            }
        }
    }
    MilestoneStatus::new(completed, total)
}
