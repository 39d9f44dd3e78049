use std::{
    env,
    ffi::{c_char, CStr},
    path::{Path, PathBuf},
};

use libloading::Library;
use steam_files::steam_redistributable_name;

use crate::steam_adapter::{PlatformSdk, SdkSession};

type InitFlatFn = unsafe extern "C" fn(*mut c_char) -> i32;
type InitFn = unsafe extern "C" fn() -> bool;
type ShutdownFn = unsafe extern "C" fn();

const STEAM_ERR_MSG_LEN: usize = 1024;

/// Steam API loaded at runtime from the redistributable shipped next to the
/// executable, so a build without it still starts.
pub(crate) struct SteamApiSdk {
    library: Library,
    path: PathBuf,
}

impl SteamApiSdk {
    pub(crate) fn load(search_dirs: &[PathBuf]) -> Result<Self, String> {
        let file_name = steam_redistributable_name();
        let mut failures = Vec::new();

        for path in search_dirs.iter().map(|dir| dir.join(file_name)) {
            if !path.is_file() {
                continue;
            }
            match open_library(&path) {
                Ok(library) => return Ok(Self { library, path }),
                Err(error) => failures.push(error),
            }
        }

        if failures.is_empty() {
            Err(format!("{file_name} not found next to the executable"))
        } else {
            Err(failures.join("; "))
        }
    }
}

fn open_library(path: &Path) -> Result<Library, String> {
    // SAFETY: loading the Steam API runs no initialisers that depend on
    // process state; everything happens in SteamAPI_Init.
    let library = unsafe { Library::new(path) };
    library.map_err(|error| format!("Failed to load {}: {}", path.display(), error))
}

impl PlatformSdk for SteamApiSdk {
    fn name(&self) -> &'static str {
        "Steamworks"
    }

    fn init(&self, app_id: u32) -> Result<SdkSession, String> {
        // The Steam API reads the app id from the environment when no
        // steam_appid.txt sits next to the executable.
        let app_id_text = app_id.to_string();
        env::set_var("SteamAppId", &app_id_text);
        env::set_var("SteamGameId", &app_id_text);

        // SAFETY: symbol signatures match steam_api_flat.h; the error buffer is
        // the size the SDK documents and stays alive for the call.
        unsafe {
            if let Ok(init_flat) = self.library.get::<InitFlatFn>(b"SteamAPI_InitFlat\0") {
                let mut message = [0 as c_char; STEAM_ERR_MSG_LEN];
                let result = init_flat(message.as_mut_ptr());
                if result != 0 {
                    message[STEAM_ERR_MSG_LEN - 1] = 0;
                    let reason = CStr::from_ptr(message.as_ptr()).to_string_lossy();
                    return Err(format!("SteamAPI_InitFlat failed ({result}): {reason}"));
                }
            } else {
                let init = self
                    .library
                    .get::<InitFn>(b"SteamAPI_Init\0")
                    .map_err(|error| format!("Steam API has no init entry point: {error}"))?;
                if !init() {
                    return Err("SteamAPI_Init failed; is the Steam client running?".to_string());
                }
            }
        }

        Ok(SdkSession {
            app_id,
            library: self.path.clone(),
        })
    }

    fn shutdown(&self) -> Result<(), String> {
        // SAFETY: only reached after a successful init.
        unsafe {
            let shutdown = self
                .library
                .get::<ShutdownFn>(b"SteamAPI_Shutdown\0")
                .map_err(|error| format!("Steam API has no shutdown entry point: {error}"))?;
            shutdown();
        }
        Ok(())
    }
}
