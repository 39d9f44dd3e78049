use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, append_steam_log, main_window,
    steam_adapter::ShutdownOutcome,
    window_lifecycle::{decide_exit_request, ExitDecision},
    ShellState, PERSISTS_WITHOUT_WINDOWS,
};

pub(crate) fn handle_exit_requested(code: Option<i32>, api: &ExitRequestApi) {
    match decide_exit_request(code, PERSISTS_WITHOUT_WINDOWS) {
        ExitDecision::KeepRunningInBackground => {
            append_shutdown_log("last window closed; keeping process alive in background");
            api.prevent_exit();
        }
        ExitDecision::Exit => {
            append_shutdown_log(&format!(
                "exit requested (code={})",
                code.map(|value| value.to_string())
                    .unwrap_or_else(|| "none".to_string())
            ));
        }
    }
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if state.steam.is_active() {
        append_shutdown_log("releasing steam session");
    }
    if let ShutdownOutcome::Failed(error) = state.steam.shutdown(append_steam_log) {
        append_shutdown_log(&format!("ignoring steam shutdown failure: {error}"));
    }
    append_shutdown_log("desktop process exiting");
}

pub(crate) fn handle_reopen(app_handle: &AppHandle) {
    match main_window::open_main_window(app_handle) {
        Ok(true) => append_desktop_log("main window recreated on reopen"),
        Ok(false) => {}
        Err(error) => append_desktop_log(&format!("failed to recreate main window: {error}")),
    }
}
