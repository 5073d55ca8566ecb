//! Usage: Application layer (runtime-managed state, logging, Tauri lifecycle wiring).

pub(crate) mod app_state;
#[cfg(feature = "runtime")]
pub(crate) mod host;
pub(crate) mod logging;
