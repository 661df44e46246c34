//! sas CLI - preview Simone milestone sync payloads for Atlassian.

use clap::Parser;
use simone_sync::action_log;
use simone_sync::cli::{Cli, Commands};
use simone_sync::commands::{self, Output};
use simone_sync::config::{self, AtlassianConfig};
use simone_sync::workspace;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    // Workspace root: --root flag > SIMONE_ROOT env > .simone auto-detect > cwd
    let root = resolve_root(cli.root);

    // Loaded once; missing or corrupt documents degrade to defaults
    let config = config::load(&root.join(workspace::CONFIG_PATH));

    let (cmd_name, args_json) = serialize_command(&cli.command);
    let start = Instant::now();

    let result = run_command(cli.command, &root, &config, json);

    let duration = start.elapsed().as_millis() as u64;
    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };
    action_log::log_action(&root, &cmd_name, args_json, success, error, duration);

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Resolve the workspace root.
///
/// An explicit path (via -C/--root or SIMONE_ROOT) is used literally and
/// must exist. Otherwise the nearest ancestor of the current directory
/// containing `.simone` is used, falling back to the current directory.
fn resolve_root(explicit: Option<PathBuf>) -> PathBuf {
    match explicit {
        Some(path) => {
            if !path.exists() {
                eprintln!("❌ Error: workspace root does not exist: {}", path.display());
                process::exit(1);
            }
            path
        }
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            workspace::find_simone_root(&cwd).unwrap_or(cwd)
        }
    }
}

fn run_command(
    command: Option<Commands>,
    root: &Path,
    config: &AtlassianConfig,
    json: bool,
) -> simone_sync::Result<()> {
    match command {
        Some(Commands::Test) => {
            output(&commands::test_connection(config), json);
        }
        Some(Commands::CreateProject) => {
            output(&commands::create_project(config), json);
        }
        Some(Commands::CreateSpace) => {
            output(&commands::create_space(config), json);
        }
        Some(Commands::Sync { path }) => {
            let dir = path.unwrap_or_else(|| root.join(workspace::DEFAULT_MILESTONE_DIR));
            let preview = commands::sync_milestone(config, &dir)?;
            output(&preview, json);
        }
        // unknown subcommands get the banner, not an argument error
        Some(Commands::External(_)) | None => {
            output(&commands::usage(config), json);
        }
    }
    Ok(())
}

/// Serialize the command for action logging.
fn serialize_command(command: &Option<Commands>) -> (String, serde_json::Value) {
    match command {
        Some(Commands::Test) => ("test".to_string(), serde_json::json!({})),
        Some(Commands::CreateProject) => ("create-project".to_string(), serde_json::json!({})),
        Some(Commands::CreateSpace) => ("create-space".to_string(), serde_json::json!({})),
        Some(Commands::Sync { path }) => (
            "sync".to_string(),
            serde_json::json!({ "path": path.as_ref().map(|p| p.display().to_string()) }),
        ),
        Some(Commands::External(args)) => (
            "unknown".to_string(),
            serde_json::json!({
                "args": args.iter().map(|a| a.to_string_lossy()).collect::<Vec<_>>()
            }),
        ),
        None => ("usage".to_string(), serde_json::json!({})),
    }
}

/// Print a command result in the selected format.
fn output<T: Output>(result: &T, json: bool) {
    if json {
        println!("{}", result.to_json());
    } else {
        println!("{}", result.to_human());
    }
}
