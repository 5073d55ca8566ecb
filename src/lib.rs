// The lifecycle core is only reached through `run` once the Tauri runtime is compiled in.
#![cfg_attr(not(feature = "runtime"), allow(dead_code))]

mod app;
mod domain;
mod infra;
mod shared;

pub(crate) use app::app_state;
pub(crate) use domain::{lifecycle, window};
pub(crate) use infra::{app_paths, shell_config};
pub(crate) use shared::platform;

#[cfg(feature = "runtime")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::app_state::ApplicationState;
    use crate::platform::Platform;
    use crate::shell_config::ShellConfig;
    use tauri::Manager;

    let config = ShellConfig::from_env();
    app::logging::init(&config);

    let app = tauri::Builder::default()
        .manage(ApplicationState::default())
        .setup(move |app| {
            tracing::info!(
                version = %app.package_info().version,
                platform = %Platform::current(),
                "desktop shell starting"
            );

            #[cfg(debug_assertions)]
            {
                if config.dev_diagnostics {
                    let identifier = &app.config().identifier;
                    let product_name =
                        app.config().product_name.as_deref().unwrap_or("<missing>");
                    tracing::info!(identifier = %identifier, "[dev] tauri identifier");
                    tracing::info!(product_name = %product_name, "[dev] productName");
                    tracing::info!(log_filter = %config.log_filter, "[dev] log filter");
                }
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(app::host::on_run_event);
}
