//! Configuration for the Atlassian integration.
//!
//! The configuration document lives at `.simone/config/atlassian.json`
//! inside the workspace and has four sections:
//!
//! - `tracker` - the issue-tracking system (project, issue types, token)
//! - `docSpace` - the documentation system (space, token)
//! - `sync` - sync behavior settings; parsed and echoed but inert
//! - `credentials` - account email and cloud identifier
//!
//! Loading never fails: a missing or unparsable document degrades to the
//! built-in defaults with a note on stderr, and a partial document
//! deep-fills every absent field from those same defaults. The result is
//! immutable for the process lifetime.

pub mod loader;
pub mod schema;

pub use loader::load;
pub use schema::{AtlassianConfig, Credentials, DocSpaceConfig, SyncConfig, TrackerConfig};
