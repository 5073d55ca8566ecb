//! Usage: Cross-cutting utilities shared across layers (pure logic).

pub(crate) mod platform;
