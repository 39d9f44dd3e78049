#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod desktop_bridge;
mod desktop_bridge_commands;
mod exit_events;
mod logging;
mod main_window;
mod runtime_paths;
mod startup;
mod steam_adapter;
mod steam_api;
mod steam_config;
mod window_lifecycle;

pub(crate) use app_constants::*;
pub(crate) use app_types::ShellState;
pub(crate) use logging::{
    append_bridge_log, append_desktop_log, append_shutdown_log, append_startup_log,
    append_steam_log,
};

fn main() {
    app_runtime::run();
}
