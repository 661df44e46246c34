//! Configuration loading with default fallback.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::schema::AtlassianConfig;

/// Load the configuration document at `path`.
///
/// This boundary never fails: a missing file, an unreadable file, or a
/// document that does not parse as JSON all degrade to
/// [`AtlassianConfig::default`] with a note on stderr.
pub fn load(path: &Path) -> AtlassianConfig {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("⚠️  Configuration file not found, using defaults");
            return AtlassianConfig::default();
        }
        Err(e) => {
            eprintln!(
                "⚠️  Could not read {}: {} (using defaults)",
                path.display(),
                e
            );
            return AtlassianConfig::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "⚠️  Could not parse {}: {} (using defaults)",
                path.display(),
                e
            );
            AtlassianConfig::default()
        }
    }
}
