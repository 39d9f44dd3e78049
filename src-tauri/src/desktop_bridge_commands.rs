use std::process::{Command, Stdio};
use tauri::AppHandle;

use crate::{
    append_bridge_log,
    desktop_bridge::{self, BridgeCommand, BridgeHost},
};

type UrlHandler = (&'static str, &'static [&'static str]);

const NO_ARGS: &[&str] = &[];

/// Program and leading arguments of the platform's default URL handler.
fn system_url_handler() -> Option<UrlHandler> {
    if cfg!(target_os = "macos") {
        Some(("open", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        const WINDOWS_ARGS: &[&str] = &["url.dll,FileProtocolHandler"];
        Some(("rundll32", WINDOWS_ARGS))
    } else if cfg!(unix) {
        Some(("xdg-open", NO_ARGS))
    } else {
        None
    }
}

/// Hands `url` to the system handler exactly as the content sent it. No scheme
/// is filtered or rewritten here; the handler decides what a `file:` or
/// `mailto:` target means. Only a failure to spawn the handler is reported.
fn open_with_system_handler(url: &str) -> Result<(), String> {
    let Some((program, leading_args)) = system_url_handler() else {
        return Err("Opening external URLs is not supported on this platform.".to_string());
    };

    Command::new(program)
        .args(leading_args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{program}': {error}"))
}

struct AppBridgeHost<'a> {
    app_handle: &'a AppHandle,
}

impl BridgeHost for AppBridgeHost<'_> {
    fn exit_process(&self, code: i32) {
        self.app_handle.exit(code);
    }

    fn open_external(&self, url: &str) -> Result<(), String> {
        open_with_system_handler(url)
    }
}

#[tauri::command]
pub(crate) fn bridge_send(app_handle: AppHandle, message: BridgeCommand) {
    desktop_bridge::dispatch_bridge_command(
        &AppBridgeHost {
            app_handle: &app_handle,
        },
        message,
        append_bridge_log,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn linux_hands_urls_to_xdg_open_without_extra_arguments() {
        let (program, leading_args) = system_url_handler().expect("handler");
        assert_eq!(program, "xdg-open");
        assert!(leading_args.is_empty());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_hands_urls_to_the_protocol_handler() {
        let (program, leading_args) = system_url_handler().expect("handler");
        assert_eq!(program, "rundll32");
        assert_eq!(leading_args, ["url.dll,FileProtocolHandler"]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_hands_urls_to_open() {
        assert_eq!(system_url_handler(), Some(("open", NO_ARGS)));
    }
}
