/// Holds the single tracked main window. `None` is the closed state.
#[derive(Debug)]
pub(crate) struct WindowSlot<W> {
    window: Option<W>,
}

impl<W> Default for WindowSlot<W> {
    fn default() -> Self {
        Self { window: None }
    }
}

impl<W> WindowSlot<W> {
    pub(crate) fn is_open(&self) -> bool {
        self.window.is_some()
    }

    pub(crate) fn release(&mut self) -> Option<W> {
        self.window.take()
    }

    /// Creates and tracks a window unless one is tracked or still alive.
    /// Returns whether a window was created.
    pub(crate) fn ensure_with<F>(&mut self, live_windows: usize, create: F) -> Result<bool, String>
    where
        F: FnOnce() -> Result<W, String>,
    {
        if self.is_open() {
            return Ok(false);
        }
        match decide_reopen(live_windows) {
            ReopenDecision::KeepExisting => Ok(false),
            ReopenDecision::CreateWindow => {
                self.window = Some(create()?);
                Ok(true)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReopenDecision {
    CreateWindow,
    KeepExisting,
}

pub(crate) fn decide_reopen(live_windows: usize) -> ReopenDecision {
    if live_windows == 0 {
        ReopenDecision::CreateWindow
    } else {
        ReopenDecision::KeepExisting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitDecision {
    Exit,
    KeepRunningInBackground,
}

/// `code` is `None` when the request comes from the last window closing, and
/// `Some` for explicit exits such as the bridge `quit` command.
pub(crate) fn decide_exit_request(
    code: Option<i32>,
    persists_without_windows: bool,
) -> ExitDecision {
    if code.is_none() && persists_without_windows {
        ExitDecision::KeepRunningInBackground
    } else {
        ExitDecision::Exit
    }
}
