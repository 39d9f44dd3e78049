//! steam-files: run after `cargo tauri build` to stage Steam files.
//!
//! Usage:
//!   steam-files
//!
//! The project root defaults to the workspace this tool lives in; set
//! STEAM_FILES_ROOT to point it elsewhere.

use std::env;
use std::path::PathBuf;
use std::process;

use steam_files::{
    prepare_steam_files, steam_redistributable_name, steam_redistributable_sdk_path,
};

fn workspace_root_dir() -> PathBuf {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    candidate.canonicalize().unwrap_or_else(|_| candidate.to_path_buf())
}

fn project_root() -> PathBuf {
    env::var("STEAM_FILES_ROOT")
        .ok()
        .map(|value| PathBuf::from(value.trim()))
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(workspace_root_dir)
}

fn main() {
    let report = match prepare_steam_files(&project_root()) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    };

    println!(
        "Created {} with App ID: {}",
        report.app_id_file.display(),
        report.app_id
    );

    let redistributable = steam_redistributable_name();
    if report.redistributable_found {
        println!("Found {redistributable}");
    } else {
        println!();
        println!("Warning: {redistributable} not found!");
        println!("You need to copy {redistributable} from the Steamworks SDK to:");
        println!("  {}", report.build_dir.display());
        println!();
        println!("Location in Steamworks SDK:");
        println!("  {}", steam_redistributable_sdk_path());
    }

    println!();
    println!("Steam files ready!");
    println!("Build location: {}", report.build_dir.display());
}
