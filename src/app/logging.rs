//! Usage: Tracing setup (env filter + stderr + daily-rolling log file, `log` bridge).

use crate::app_paths;
use crate::shell_config::ShellConfig;
use std::sync::OnceLock;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "desktop-shell.log";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static INITIALIZED: OnceLock<()> = OnceLock::new();

pub(crate) struct LogSetup<S> {
    pub(crate) subscriber: S,
    /// Flushes the file writer on drop; `None` when file logging is off.
    pub(crate) file_guard: Option<WorkerGuard>,
    pub(crate) file_error: Option<String>,
}

pub fn build_env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directives:?}, using default: {err}");
        EnvFilter::new(crate::shell_config::DEFAULT_LOG_FILTER)
    })
}

/// Builds the subscriber without installing it. A log dir that cannot be
/// created leaves only the stderr layer.
pub(crate) fn build_layers(
    config: &ShellConfig,
) -> LogSetup<impl Subscriber + Send + Sync + 'static> {
    let (file_writer, file_guard, file_error) = match app_paths::log_dir(config) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard), None)
        }
        Err(err) => (None, None, Some(err)),
    };

    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(writer)
    });

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    LogSetup {
        subscriber,
        file_guard,
        file_error,
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(config: &ShellConfig) {
    INITIALIZED.get_or_init(|| install(config));
}

fn install(config: &ShellConfig) {
    let setup = build_layers(config);

    if let Err(err) = tracing::subscriber::set_global_default(setup.subscriber) {
        eprintln!("tracing subscriber already installed: {err}");
        return;
    }
    if let Some(guard) = setup.file_guard {
        let _ = FILE_GUARD.set(guard);
    }
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {}", err);
    }

    if let Some(err) = setup.file_error {
        tracing::warn!("file logging disabled: {}", err);
    }
}
