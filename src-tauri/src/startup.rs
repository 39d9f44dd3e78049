use crate::{
    steam_adapter::{InitOutcome, SteamAdapter},
    steam_config::SteamConfig,
};

/// Brings Steam up before the first window opens. Steam problems never stop
/// the window from opening; a window failure is returned to the caller.
pub(crate) fn start_shell<O, F>(
    steam: &SteamAdapter,
    config: SteamConfig,
    open_window: O,
    log: F,
) -> Result<(), String>
where
    O: FnOnce() -> Result<bool, String>,
    F: Fn(&str),
{
    match steam.initialize(config, &log) {
        InitOutcome::Initialized(session) => {
            log(&format!("steam session active for app {}", session.app_id));
        }
        InitOutcome::Failed(error) => {
            log(&format!("continuing without Steam: {error}"));
        }
        InitOutcome::Unavailable | InitOutcome::Disabled | InitOutcome::AlreadyAttempted => {}
    }

    open_window().map(|_| ())
}
