use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
    sync::OnceLock,
};

use chrono::{DateTime, Local};

use crate::{runtime_paths, DESKTOP_LOG_FILE};

static DESKTOP_LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| std::env::temp_dir().join("game-shell"))
        .join("logs")
        .join(file_name)
}

fn desktop_log_path() -> &'static PathBuf {
    DESKTOP_LOG_PATH.get_or_init(|| {
        resolve_desktop_log_path(runtime_paths::default_packaged_root_dir(), DESKTOP_LOG_FILE)
    })
}

pub(crate) fn format_log_line(scope: &str, message: &str, now: DateTime<Local>) -> String {
    format!(
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message.trim_end()
    )
}

fn append_log(scope: &str, message: &str) {
    let line = format_log_line(scope, message, Local::now());
    if cfg!(debug_assertions) {
        eprintln!("{line}");
    }

    let path = desktop_log_path();
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{line}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_log("desktop", message);
}

pub fn append_startup_log(message: &str) {
    append_log("startup", message);
}

pub fn append_shutdown_log(message: &str) {
    append_log("shutdown", message);
}

pub fn append_steam_log(message: &str) {
    append_log("steam", message);
}

pub fn append_bridge_log(message: &str) {
    append_log("bridge", message);
}
