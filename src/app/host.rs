//! Usage: Tauri side of the lifecycle contract (window create/count/quit + run event translation).

use crate::app_state::ApplicationState;
use crate::lifecycle::{
    signal_for_exit_request, Bootstrap, LifecycleEvent, LifecycleHandlers, LifecycleHost,
};
use crate::platform::Platform;
use crate::window::WindowOptions;
use tauri::{AppHandle, Manager, RunEvent, Runtime, WebviewUrl, WebviewWindowBuilder};

const WINDOW_ENTRY: &str = "index.html";

pub(crate) struct TauriHost<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

impl<'a, R: Runtime> TauriHost<'a, R> {
    pub(crate) fn new(app: &'a AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> LifecycleHost for TauriHost<'_, R> {
    fn create_window(&self, options: &WindowOptions) -> Result<(), String> {
        let title = self.app.package_info().name.clone();
        WebviewWindowBuilder::new(
            self.app,
            options.label.as_str(),
            WebviewUrl::App(WINDOW_ENTRY.into()),
        )
        .title(title)
        .inner_size(
            f64::from(options.size.width),
            f64::from(options.size.height),
        )
        .build()
        .map(|_| ())
        .map_err(|e| format!("WINDOW_CREATE: label={}: {e}", options.label))
    }

    fn open_window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn quit(&self) {
        self.app.exit(0);
    }

    fn platform(&self) -> Platform {
        Platform::current()
    }
}

pub(crate) fn dispatch<R: Runtime>(app: &AppHandle<R>, event: LifecycleEvent) {
    let state = app.state::<ApplicationState>();
    let bootstrap = Bootstrap::new(TauriHost::new(app), state.inner());

    match bootstrap.dispatch(event) {
        Ok(outcome) => tracing::debug!(event = %event, ?outcome, "lifecycle signal handled"),
        Err(err) => tracing::error!(event = %event, "lifecycle signal failed: {}", err),
    }
}

pub(crate) fn on_run_event<R: Runtime>(app: &AppHandle<R>, event: RunEvent) {
    match event {
        RunEvent::Ready => dispatch(app, LifecycleEvent::Ready),
        RunEvent::ExitRequested { code, api, .. } => {
            if let Some(signal) = signal_for_exit_request(code) {
                api.prevent_exit();
                dispatch(app, signal);
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => dispatch(app, LifecycleEvent::Activate),
        _ => {}
    }
}

#[cfg(all(test, feature = "mock-runtime"))]
mod tests {
    use super::*;
    use crate::window::WindowSize;
    use tauri::test::{mock_app, MockRuntime};

    fn mock_app_with_state() -> tauri::App<MockRuntime> {
        let app = mock_app();
        app.manage(ApplicationState::default());
        app
    }

    #[test]
    fn create_window_registers_labelled_webview() {
        let app = mock_app_with_state();
        let host = TauriHost::new(app.handle());

        host.create_window(&WindowOptions::for_seq(0))
            .expect("create_window");

        assert!(app.get_webview_window("main").is_some());
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn create_window_rejects_duplicate_label() {
        let app = mock_app_with_state();
        let host = TauriHost::new(app.handle());
        let options = WindowOptions {
            label: "main".to_string(),
            size: WindowSize::default(),
        };

        host.create_window(&options).expect("first create_window");
        let err = host.create_window(&options).unwrap_err();

        assert!(err.starts_with("WINDOW_CREATE:"), "{err}");
        assert_eq!(host.open_window_count(), 1);
    }

    #[test]
    fn ready_run_event_opens_main_window_once() {
        let app = mock_app_with_state();

        on_run_event(app.handle(), RunEvent::Ready);
        on_run_event(app.handle(), RunEvent::Ready);

        assert!(app.get_webview_window("main").is_some());
        assert_eq!(app.webview_windows().len(), 1);
        assert!(app.state::<ApplicationState>().is_ready());
    }
}
