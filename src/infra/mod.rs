//! Usage: Environment adapters (configuration, filesystem paths).

pub(crate) mod app_paths;
pub(crate) mod shell_config;
