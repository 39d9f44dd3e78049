use std::path::PathBuf;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    desktop_bridge, ShellState, CONTENT_ENTRY_POINT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MAIN_WINDOW_LABEL, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

fn build_main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    let version = app_handle.package_info().version.to_string();
    let bridge_script = desktop_bridge::render_bridge_script(&version);

    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(PathBuf::from(CONTENT_ENTRY_POINT)),
    )
    .title(app_handle.package_info().name.clone())
    .inner_size(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    .min_inner_size(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    .resizable(true)
    .center()
    .initialization_script(&bridge_script)
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    if let Err(error) = window.remove_menu() {
        crate::append_desktop_log(&format!("failed to remove main window menu: {error}"));
    }

    Ok(window)
}

/// Opens the main window unless one is already tracked or alive.
pub(crate) fn open_main_window(app_handle: &AppHandle) -> Result<bool, String> {
    let state = app_handle.state::<ShellState>();
    let live_windows = app_handle.webview_windows().len();
    let mut slot = state
        .main_window
        .lock()
        .map_err(|_| "Main window lock poisoned.".to_string())?;

    let created = slot.ensure_with(live_windows, || build_main_window(app_handle))?;
    if created {
        crate::append_desktop_log(&format!("main window created: {CONTENT_ENTRY_POINT}"));
    }
    Ok(created)
}

pub(crate) fn release_main_window(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    let released = match state.main_window.lock() {
        Ok(mut slot) => slot.release().is_some(),
        Err(_) => false,
    };
    if released {
        crate::append_desktop_log("main window closed");
    }
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
