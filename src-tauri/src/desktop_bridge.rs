use serde::Deserialize;

pub(crate) const BRIDGE_GLOBAL: &str = "electronAPI";
pub(crate) const BRIDGE_COMMAND: &str = "bridge_send";

/// One-way messages from content to host. Anything outside this set fails to
/// deserialize and never reaches a handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum BridgeCommand {
    Quit,
    OpenExternal { url: String },
}

pub(crate) trait BridgeHost {
    fn exit_process(&self, code: i32);
    fn open_external(&self, url: &str) -> Result<(), String>;
}

pub(crate) fn dispatch_bridge_command<H, F>(host: &H, command: BridgeCommand, log: F)
where
    H: BridgeHost,
    F: Fn(&str),
{
    match command {
        BridgeCommand::Quit => {
            log("quit requested by content, exiting desktop process");
            host.exit_process(0);
        }
        BridgeCommand::OpenExternal { url } => {
            if let Err(error) = host.open_external(&url) {
                log(&format!("failed to open external url {url:?}: {error}"));
            }
        }
    }
}

const BRIDGE_SCRIPT_TEMPLATE: &str = r#"(function () {
  if (Object.prototype.hasOwnProperty.call(window, "__BRIDGE_GLOBAL__")) {
    return;
  }
  var send = function (message) {
    var internals = window.__TAURI_INTERNALS__;
    if (!internals || typeof internals.invoke !== "function") {
      return;
    }
    var pending = internals.invoke("__BRIDGE_COMMAND__", { message: message });
    Promise.resolve(pending).catch(function () {});
  };
  var version = __VERSION__;
  var api = Object.freeze({
    getVersion: function () {
      return version;
    },
    isElectron: function () {
      return true;
    },
    quit: function () {
      send({ type: "quit" });
    },
    openExternal: function (url) {
      send({ type: "openExternal", url: url });
    }
  });
  Object.defineProperty(window, "__BRIDGE_GLOBAL__", {
    value: api,
    enumerable: true,
    configurable: false,
    writable: false
  });
})();
"#;

/// Script injected before the content loads; it is everything the content
/// can see of the host. The version is baked in so that `getVersion` stays
/// synchronous.
pub(crate) fn render_bridge_script(version: &str) -> String {
    let version_literal =
        serde_json::to_string(version).unwrap_or_else(|_| "\"0.0.0\"".to_string());
    BRIDGE_SCRIPT_TEMPLATE
        .replace("__BRIDGE_GLOBAL__", BRIDGE_GLOBAL)
        .replace("__BRIDGE_COMMAND__", BRIDGE_COMMAND)
        .replace("__VERSION__", &version_literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::cell::RefCell;

    const BRIDGE_FUNCTIONS: [&str; 4] = ["getVersion", "isElectron", "quit", "openExternal"];

    #[derive(Default)]
    struct RecordingHost {
        exits: RefCell<Vec<i32>>,
        opened: RefCell<Vec<String>>,
        fail_open: bool,
    }

    impl BridgeHost for RecordingHost {
        fn exit_process(&self, code: i32) {
            self.exits.borrow_mut().push(code);
        }

        fn open_external(&self, url: &str) -> Result<(), String> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail_open {
                return Err("no handler".to_string());
            }
            Ok(())
        }
    }

    fn parse(raw: &str) -> Result<BridgeCommand, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[test]
    fn bridge_command_parses_the_two_known_messages() {
        let quit = parse(r#"{"type":"quit"}"#).expect("quit");
        assert_eq!(quit, BridgeCommand::Quit);
        assert_eq!(
            parse(r#"{"type":"openExternal","url":"https://example.com"}"#).expect("open"),
            BridgeCommand::OpenExternal {
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn bridge_command_rejects_unknown_messages() {
        assert!(parse(r#"{"type":"readFile","path":"/etc/passwd"}"#).is_err());
        assert!(parse(r#"{"type":"exec","cmd":"rm"}"#).is_err());
        assert!(parse(r#"{"url":"https://example.com"}"#).is_err());
        assert!(parse(r#"{"type":"openExternal"}"#).is_err());
        assert!(parse(r#"{"type":"openExternal","url":42}"#).is_err());
    }

    #[test]
    fn quit_always_exits_with_code_zero() {
        let host = RecordingHost::default();
        dispatch_bridge_command(&host, BridgeCommand::Quit, |_| {});
        dispatch_bridge_command(&host, BridgeCommand::Quit, |_| {});
        assert_eq!(*host.exits.borrow(), vec![0, 0]);
    }

    #[test]
    fn open_external_forwards_url_unmodified() {
        let host = RecordingHost::default();
        let urls = [
            "https://store.steampowered.com/app/480",
            "  mailto:dev@example.com ",
            "file:///tmp/readme.txt",
            "not a url at all",
            "",
        ];
        for url in urls {
            dispatch_bridge_command(
                &host,
                BridgeCommand::OpenExternal {
                    url: url.to_string(),
                },
                |_| {},
            );
        }

        assert_eq!(*host.opened.borrow(), urls.map(String::from).to_vec());
        assert!(host.exits.borrow().is_empty());
    }

    #[test]
    fn open_external_failure_is_logged_not_propagated() {
        let host = RecordingHost {
            fail_open: true,
            ..Default::default()
        };
        let logs = RefCell::new(Vec::new());

        dispatch_bridge_command(
            &host,
            BridgeCommand::OpenExternal {
                url: "https://example.com".to_string(),
            },
            |line| logs.borrow_mut().push(line.to_string()),
        );

        assert_eq!(logs.borrow().len(), 1);
        assert!(logs.borrow()[0].contains("no handler"));
    }

    #[test]
    fn bridge_script_exposes_exactly_the_four_functions() {
        let script = render_bridge_script("1.2.3");

        for name in BRIDGE_FUNCTIONS {
            let definition = format!("{name}: function");
            assert!(script.contains(&definition), "missing {name}");
        }
        let defined = script.matches(": function").count();
        assert_eq!(defined, BRIDGE_FUNCTIONS.len());
        assert!(script.contains("Object.freeze"));
        assert!(script.contains("window, \"electronAPI\""));
        assert!(script.contains("invoke(\"bridge_send\""));
    }

    #[test]
    fn bridge_script_embeds_version_as_json_string() {
        let script = render_bridge_script("2.0.0-beta\"1");
        assert!(script.contains(r#"var version = "2.0.0-beta\"1";"#));
        assert!(!script.contains("__VERSION__"));
    }

    #[test]
    fn main_window_capability_grants_only_the_bridge_command() {
        let raw = include_str!("../capabilities/default.json");
        let capability: Value = serde_json::from_str(raw).expect("valid capability file");

        assert_eq!(capability["windows"], serde_json::json!(["main"]));
        assert_eq!(
            capability["permissions"],
            serde_json::json!(["allow-bridge-send"])
        );
        assert!(capability.get("remote").is_none());
        assert_eq!(
            format!("allow-{}", BRIDGE_COMMAND.replace('_', "-")),
            "allow-bridge-send"
        );
    }
}
