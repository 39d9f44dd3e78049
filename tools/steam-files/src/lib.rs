//! Prepares a release build directory for Steam distribution.
//!
//! Writes `steam_appid.txt` next to the game executable and checks that the
//! Steam API redistributable has been copied in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub const STEAM_CONFIG_FILE: &str = "steam-config.json";
pub const STEAM_APP_ID_FILE: &str = "steam_appid.txt";

/// `steam-config.json`, shared with the desktop shell. An `appId` of zero
/// means the Steam integration is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamConfig {
    #[serde(default)]
    pub app_id: u32,
}

impl SteamConfig {
    pub fn is_enabled(&self) -> bool {
        self.app_id != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamFilesReport {
    pub app_id: u32,
    pub build_dir: PathBuf,
    pub app_id_file: PathBuf,
    pub redistributable_found: bool,
}

/// Steam API library the executable links against on this platform.
pub fn steam_redistributable_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "steam_api64.dll"
    } else if cfg!(target_os = "macos") {
        "libsteam_api.dylib"
    } else {
        "libsteam_api.so"
    }
}

/// Where the redistributable lives inside the Steamworks SDK.
pub fn steam_redistributable_sdk_path() -> &'static str {
    if cfg!(target_os = "windows") {
        "redistributable_bin\\win64\\steam_api64.dll"
    } else if cfg!(target_os = "macos") {
        "redistributable_bin/osx/libsteam_api.dylib"
    } else {
        "redistributable_bin/linux64/libsteam_api.so"
    }
}

pub fn build_output_dir(project_root: &Path) -> PathBuf {
    project_root.join("target").join("release")
}

/// A missing file reads as `appId = 0`; a file that exists must parse.
pub fn read_steam_config(path: &Path) -> Result<SteamConfig, String> {
    if !path.is_file() {
        return Ok(SteamConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|error| format!("Error reading {}: {}", path.display(), error))?;
    serde_json::from_str(&raw)
        .map_err(|error| format!("Error reading {}: {}", path.display(), error))
}

pub fn prepare_steam_files(project_root: &Path) -> Result<SteamFilesReport, String> {
    let config_path = project_root.join(STEAM_CONFIG_FILE);
    let config = read_steam_config(&config_path)?;
    if !config.is_enabled() {
        return Err(format!(
            "Steam App ID not set in {STEAM_CONFIG_FILE}\n\
             Please set your App ID in {} first!",
            config_path.display()
        ));
    }

    let build_dir = build_output_dir(project_root);
    if !build_dir.is_dir() {
        return Err(format!(
            "Build directory not found: {}\n\
             Please run \"cargo tauri build\" first to create the release build.",
            build_dir.display()
        ));
    }

    let app_id_file = build_dir.join(STEAM_APP_ID_FILE);
    fs::write(&app_id_file, config.app_id.to_string())
        .map_err(|error| format!("Failed to write {}: {}", app_id_file.display(), error))?;

    let redistributable_found = build_dir.join(steam_redistributable_name()).is_file();

    Ok(SteamFilesReport {
        app_id: config.app_id,
        build_dir,
        app_id_file,
        redistributable_found,
    })
}
