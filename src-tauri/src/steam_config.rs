use std::{fs, path::PathBuf};

pub(crate) use steam_files::SteamConfig;

pub(crate) fn parse_steam_config(raw: &str) -> Result<SteamConfig, String> {
    serde_json::from_str(raw).map_err(|error| format!("Invalid Steam config: {error}"))
}

/// Reads the first candidate that exists. A missing or broken file disables
/// the integration instead of failing startup.
pub(crate) fn load_steam_config<F>(candidates: &[PathBuf], log: F) -> SteamConfig
where
    F: Fn(&str),
{
    let Some(path) = candidates.iter().find(|path| path.is_file()) else {
        log("steam config not found; Steam integration disabled");
        return SteamConfig::default();
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            log(&format!(
                "failed to read steam config {}: {}",
                path.display(),
                error
            ));
            return SteamConfig::default();
        }
    };

    match parse_steam_config(&raw) {
        Ok(config) => {
            log(&format!(
                "loaded steam config {} (app_id={})",
                path.display(),
                config.app_id
            ));
            config
        }
        Err(error) => {
            log(&format!("{} ({})", error, path.display()));
            SteamConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn parse_steam_config_defaults_missing_app_id_to_zero() {
        let config = parse_steam_config("{}").expect("empty object should parse");
        assert_eq!(config.app_id, 0);
        assert!(!config.is_enabled());
    }

    #[test]
    fn parse_steam_config_reads_app_id() {
        let config = parse_steam_config(r#"{ "appId": 12345 }"#).expect("valid config");
        assert_eq!(config, SteamConfig { app_id: 12345 });
        assert!(config.is_enabled());
    }

    #[test]
    fn parse_steam_config_rejects_negative_app_id() {
        assert!(parse_steam_config(r#"{ "appId": -1 }"#).is_err());
    }

    #[test]
    fn load_steam_config_uses_first_existing_candidate() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        fs::write(&first, r#"{ "appId": 480 }"#).expect("write first");
        fs::write(&second, r#"{ "appId": 999 }"#).expect("write second");

        let config = load_steam_config(&[missing, first, second], |_| {});
        assert_eq!(config.app_id, 480);
    }

    #[test]
    fn load_steam_config_disables_integration_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logs = RefCell::new(Vec::new());

        let config = load_steam_config(&[dir.path().join("steam-config.json")], |line| {
            logs.borrow_mut().push(line.to_string())
        });

        assert!(!config.is_enabled());
        assert_eq!(logs.borrow().len(), 1);
    }

    #[test]
    fn load_steam_config_disables_integration_when_file_is_unparseable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("steam-config.json");
        fs::write(&path, "{ appId: 12345 ").expect("write config");
        let logs = RefCell::new(Vec::new());

        let config = load_steam_config(&[path], |line| {
            logs.borrow_mut().push(line.to_string());
        });

        assert_eq!(config, SteamConfig::default());
        assert!(logs.borrow()[0].starts_with("Invalid Steam config"));
    }
}
