//! Usage: Runtime-independent shell logic (lifecycle reactions, window options).

pub(crate) mod lifecycle;
pub(crate) mod window;
