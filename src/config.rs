//! Behavioural constants for the scroll-driven parts of the page.
//!
//! Site-level settings (address, asset folders, reload port) live in the
//! `[package.metadata.leptos]` table of `Cargo.toml` and are loaded by the
//! server through `get_configuration`.

/// Distance below the top of the viewport used as the reference point when
/// deciding which section is active. Keeps the fixed nav bar from hiding the
/// section that is about to take over.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Longest frame delta fed into a spring in one go. Larger gaps (background
/// tabs, debugger pauses) are truncated to this.
pub const MAX_FRAME_DELTA_MS: f64 = 64.0;

/// Fixed integration step used by [`crate::progress::Spring`].
pub const SPRING_STEP_MS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Response used by the reading progress bar.
    pub const PROGRESS: Self = Self {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::PROGRESS
    }
}
