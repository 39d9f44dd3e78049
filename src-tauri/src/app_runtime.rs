use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, append_steam_log, exit_events, main_window,
    runtime_paths, startup, steam_adapter, steam_config, ShellState, DESKTOP_LOG_FILE,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    let steam_capability =
        steam_adapter::detect_steam_capability(&runtime_paths::steam_api_search_dirs());

    let builder = tauri::Builder::default();
    #[cfg(target_os = "macos")]
    let builder = builder.enable_macos_default_menu(false);

    builder
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            append_desktop_log("second instance launched; bringing main window forward");
            exit_events::handle_reopen(app_handle);
            main_window::show_main_window(app_handle, append_desktop_log);
        }))
        .manage(ShellState::new(steam_capability))
        .invoke_handler(tauri::generate_handler![crate::desktop_bridge_commands::bridge_send])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                main_window::release_main_window(window.app_handle());
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let config = steam_config::load_steam_config(
                &runtime_paths::steam_config_candidates(&app_handle),
                append_steam_log,
            );
            let state = app_handle.state::<ShellState>();
            let started = startup::start_shell(
                &state.steam,
                config,
                || main_window::open_main_window(&app_handle),
                append_steam_log,
            );

            if let Err(error) = started {
                append_startup_log(&format!("startup failed: {error}"));
                app_handle.exit(1);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(code, &api);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                exit_events::handle_reopen(app_handle);
            }
            _ => {}
        });
}
