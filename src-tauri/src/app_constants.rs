pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const CONTENT_ENTRY_POINT: &str = "index.html";

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 1920.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 1080.0;
pub(crate) const MIN_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 720.0;

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const STEAM_CONFIG_FILE: &str = "steam-config.json";

pub(crate) const SHELL_ROOT_ENV: &str = "GAME_SHELL_ROOT";
pub(crate) const STEAM_CONFIG_ENV: &str = "GAME_SHELL_STEAM_CONFIG";

/// macOS keeps the process alive after its last window closes.
pub(crate) const PERSISTS_WITHOUT_WINDOWS: bool = cfg!(target_os = "macos");
