use std::sync::Mutex;

use tauri::WebviewWindow;

use crate::{
    steam_adapter::{SdkCapability, SteamAdapter},
    window_lifecycle::WindowSlot,
};

/// Application controller state, handed to every callback through Tauri's
/// managed state.
pub(crate) struct ShellState {
    pub(crate) main_window: Mutex<WindowSlot<WebviewWindow>>,
    pub(crate) steam: SteamAdapter,
}

impl ShellState {
    pub(crate) fn new(steam_capability: SdkCapability) -> Self {
        Self {
            main_window: Mutex::new(WindowSlot::default()),
            steam: SteamAdapter::new(steam_capability),
        }
    }
}
