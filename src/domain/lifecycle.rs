//! Usage: Application bootstrap (reacts to runtime lifecycle signals by creating windows or quitting).
//!
//! The runtime is reached only through [`LifecycleHost`]; signal delivery goes through
//! [`LifecycleHandlers`]. `app::host` provides the Tauri implementation, tests use a fake.

use crate::app_state::ApplicationState;
use crate::platform::Platform;
use crate::window::WindowOptions;
use std::fmt;

/// Capabilities the bootstrap consumes from the host GUI runtime.
pub trait LifecycleHost {
    fn create_window(&self, options: &WindowOptions) -> Result<(), String>;

    fn open_window_count(&self) -> usize;

    fn quit(&self);

    fn platform(&self) -> Platform;
}

impl<T: LifecycleHost + ?Sized> LifecycleHost for &T {
    fn create_window(&self, options: &WindowOptions) -> Result<(), String> {
        (**self).create_window(options)
    }

    fn open_window_count(&self) -> usize {
        (**self).open_window_count()
    }

    fn quit(&self) {
        (**self).quit()
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Ready,
    Activate,
    AllWindowsClosed,
}

impl LifecycleEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Activate => "activate",
            Self::AllWindowsClosed => "window-all-closed",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal behind a runtime exit request. Only the runtime's own exit after the
/// last window closed (`code: None`) is routed to the bootstrap; explicit
/// `exit(code)` calls carry a code and are left alone.
pub fn signal_for_exit_request(code: Option<i32>) -> Option<LifecycleEvent> {
    match code {
        None => Some(LifecycleEvent::AllWindowsClosed),
        Some(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    WindowCreated { label: String },
    AlreadyVisible { open_windows: usize },
    QuitRequested,
    StayedResident,
    Ignored,
}

pub trait LifecycleHandlers {
    fn on_ready(&self) -> Result<LifecycleOutcome, String>;

    fn on_activate(&self) -> Result<LifecycleOutcome, String>;

    fn on_all_windows_closed(&self) -> Result<LifecycleOutcome, String>;

    fn dispatch(&self, event: LifecycleEvent) -> Result<LifecycleOutcome, String> {
        match event {
            LifecycleEvent::Ready => self.on_ready(),
            LifecycleEvent::Activate => self.on_activate(),
            LifecycleEvent::AllWindowsClosed => self.on_all_windows_closed(),
        }
    }
}

/// Per-signal controller: cheap to build, so the runtime adapter creates one for each event.
pub struct Bootstrap<'a, H: LifecycleHost> {
    host: H,
    state: &'a ApplicationState,
}

impl<'a, H: LifecycleHost> Bootstrap<'a, H> {
    pub fn new(host: H, state: &'a ApplicationState) -> Self {
        Self { host, state }
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn open_window_count(&self) -> usize {
        self.host.open_window_count()
    }

    fn create_window(&self) -> Result<LifecycleOutcome, String> {
        let options = WindowOptions::for_seq(self.state.next_window_seq());
        self.host.create_window(&options)?;

        tracing::info!(
            label = %options.label,
            width = options.size.width,
            height = options.size.height,
            "window created"
        );
        Ok(LifecycleOutcome::WindowCreated {
            label: options.label,
        })
    }
}

impl<H: LifecycleHost> LifecycleHandlers for Bootstrap<'_, H> {
    fn on_ready(&self) -> Result<LifecycleOutcome, String> {
        if !self.state.mark_ready() {
            tracing::warn!("duplicate ready signal ignored");
            return Ok(LifecycleOutcome::Ignored);
        }

        self.create_window()
    }

    fn on_activate(&self) -> Result<LifecycleOutcome, String> {
        if !self.state.is_ready() {
            tracing::warn!("activate before ready ignored");
            return Ok(LifecycleOutcome::Ignored);
        }

        let open_windows = self.host.open_window_count();
        if open_windows > 0 {
            tracing::debug!(open_windows, "activate with visible windows, nothing to do");
            return Ok(LifecycleOutcome::AlreadyVisible { open_windows });
        }

        self.create_window()
    }

    fn on_all_windows_closed(&self) -> Result<LifecycleOutcome, String> {
        let platform = self.host.platform();
        if platform.stays_resident_when_empty() {
            tracing::info!(platform = %platform, "all windows closed, staying resident");
            return Ok(LifecycleOutcome::StayedResident);
        }

        tracing::info!(platform = %platform, "all windows closed, quitting");
        self.host.quit();
        Ok(LifecycleOutcome::QuitRequested)
    }
}
