use std::{env, path::PathBuf};

use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::{SHELL_ROOT_ENV, STEAM_CONFIG_ENV, STEAM_CONFIG_FILE};

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".game-shell"))
}

pub(crate) fn resolve_resource_path(app: &AppHandle, relative_path: &str) -> Option<PathBuf> {
    app.path()
        .resolve(relative_path, BaseDirectory::Resource)
        .ok()
}

pub(crate) fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}

/// Steam expects its redistributable next to the game executable.
pub(crate) fn steam_api_search_dirs() -> Vec<PathBuf> {
    executable_dir().into_iter().collect()
}

/// Places the Steam config may live, in lookup order.
pub(crate) fn steam_config_candidates(app: &AppHandle) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(STEAM_CONFIG_ENV) {
        let path = PathBuf::from(path.trim());
        if !path.as_os_str().is_empty() {
            candidates.push(path);
        }
    }

    if let Some(exe_dir) = executable_dir() {
        candidates.push(exe_dir.join(STEAM_CONFIG_FILE));
    }

    if let Some(resource) = resolve_resource_path(app, STEAM_CONFIG_FILE) {
        candidates.push(resource);
    }

    candidates
}
