use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use crate::{steam_api::SteamApiSdk, steam_config::SteamConfig};

/// Entry points consumed from a distribution platform SDK.
pub(crate) trait PlatformSdk: Send + Sync {
    fn name(&self) -> &'static str;
    fn init(&self, app_id: u32) -> Result<SdkSession, String>;
    fn shutdown(&self) -> Result<(), String>;
}

/// Client handle returned by a successful init.
///
/// Nothing consumes it yet beyond logging; achievement and stat calls hang
/// off this session once the game needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SdkSession {
    pub(crate) app_id: u32,
    pub(crate) library: PathBuf,
}

pub(crate) enum SdkCapability {
    Present(Box<dyn PlatformSdk>),
    Absent { reason: String },
}

/// Resolved once at startup; a missing Steam library is the normal
/// development setup.
pub(crate) fn detect_steam_capability(search_dirs: &[PathBuf]) -> SdkCapability {
    match SteamApiSdk::load(search_dirs) {
        Ok(sdk) => SdkCapability::Present(Box::new(sdk)),
        Err(reason) => SdkCapability::Absent { reason },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InitOutcome {
    Unavailable,
    Disabled,
    AlreadyAttempted,
    Initialized(SdkSession),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShutdownOutcome {
    Skipped,
    Completed,
    Failed(String),
}

pub(crate) struct SteamAdapter {
    capability: SdkCapability,
    session: Mutex<Option<SdkSession>>,
    init_attempted: AtomicBool,
    shutdown_attempted: AtomicBool,
}

impl SteamAdapter {
    pub(crate) fn new(capability: SdkCapability) -> Self {
        Self {
            capability,
            session: Mutex::new(None),
            init_attempted: AtomicBool::new(false),
            shutdown_attempted: AtomicBool::new(false),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.session
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Runs at most one SDK init per process. Every failure leaves the
    /// integration disabled for this run.
    pub(crate) fn initialize<F>(&self, config: SteamConfig, log: F) -> InitOutcome
    where
        F: Fn(&str),
    {
        let sdk = match &self.capability {
            SdkCapability::Present(sdk) => sdk,
            SdkCapability::Absent { reason } => {
                log(&format!(
                    "Steamworks not available ({reason}); this is normal for development"
                ));
                return InitOutcome::Unavailable;
            }
        };

        if !config.is_enabled() {
            log("steam app id is not configured; Steam integration disabled");
            return InitOutcome::Disabled;
        }

        if self.init_attempted.swap(true, Ordering::AcqRel) {
            log("steam init already attempted; ignoring repeated request");
            return InitOutcome::AlreadyAttempted;
        }

        match sdk.init(config.app_id) {
            Ok(session) => {
                log(&format!(
                    "{} initialized: app_id={} library={}",
                    sdk.name(),
                    session.app_id,
                    session.library.display()
                ));
                match self.session.lock() {
                    Ok(mut guard) => *guard = Some(session.clone()),
                    Err(_) => {
                        log("steam session lock poisoned; Steam integration disabled");
                        return InitOutcome::Failed("Steam session lock poisoned.".to_string());
                    }
                }
                InitOutcome::Initialized(session)
            }
            Err(error) => {
                log(&format!("{} initialization failed: {}", sdk.name(), error));
                InitOutcome::Failed(error)
            }
        }
    }

    /// Tears the SDK down once, and only after a successful init.
    pub(crate) fn shutdown<F>(&self, log: F) -> ShutdownOutcome
    where
        F: Fn(&str),
    {
        let SdkCapability::Present(sdk) = &self.capability else {
            return ShutdownOutcome::Skipped;
        };

        let session = match self.session.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if session.is_none() {
            return ShutdownOutcome::Skipped;
        }

        if self.shutdown_attempted.swap(true, Ordering::AcqRel) {
            return ShutdownOutcome::Skipped;
        }

        match sdk.shutdown() {
            Ok(()) => {
                log(&format!("{} shut down", sdk.name()));
                ShutdownOutcome::Completed
            }
            Err(error) => {
                log(&format!("{} shutdown error: {}", sdk.name(), error));
                ShutdownOutcome::Failed(error)
            }
        }
    }
}
