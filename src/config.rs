use log::Level;

/// Vertical offset, in CSS pixels, past which the navigation bar switches to
/// its solid variant. Strictly greater than: 20.0 itself is still transparent.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Delay before the hero copy plays its entrance animation.
pub const REVEAL_DELAY_MS: u32 = 60;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
