//! Usage: Top-level window configuration (fixed initial size + unique labels).

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 500;

pub const MAIN_WINDOW_LABEL: &str = "main";

/// Initial inner size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub label: String,
    pub size: WindowSize,
}

impl WindowOptions {
    pub fn for_seq(seq: u64) -> Self {
        Self {
            label: window_label(seq),
            size: WindowSize::default(),
        }
    }
}

// The runtime rejects duplicate labels, so every window created over the
// process lifetime gets its own.
pub fn window_label(seq: u64) -> String {
    if seq == 0 {
        return MAIN_WINDOW_LABEL.to_string();
    }
    format!("{MAIN_WINDOW_LABEL}-{seq}")
}
