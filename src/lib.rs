//! Ricochet Face - a watch display whose digits bounce around the screen
//!
//! Core modules:
//! - `sim`: deterministic integer motion engine (wall reflection, block separation)
//! - `face`: glyph selection and layout for the display renderer
//! - `watchface`: top-level controller (reveal/freeze timers, input events)
//! - `settings`: persisted user preferences

pub mod face;
pub mod settings;
pub mod sim;
pub mod watchface;

pub use settings::Settings;
pub use watchface::{Phase, Watchface};

/// Display and motion constants
pub mod consts {
    use glam::IVec2;

    /// Target display resolution
    pub const SCREEN_WIDTH: i32 = 144;
    pub const SCREEN_HEIGHT: i32 = 168;

    /// Horizontal reflection boundary: one pixel short of the right screen edge
    pub const X_LIMIT: i32 = 143;

    /// Time block is 52 px tall; 103 px wide in 12-hour mode, 93 px in 24-hour mode
    pub const TIME_HEIGHT: i32 = 52;
    pub const TIME_WIDTH_12H: i32 = 103;
    pub const TIME_WIDTH_24H: i32 = 93;

    /// Date block is a fixed 104 x 39 px
    pub const DATE_WIDTH: i32 = 104;
    pub const DATE_HEIGHT: i32 = 39;

    /// Velocity step units for bounce resampling (magnitude is step, 2*step or 3*step)
    pub const X_STEP: i32 = 2;
    pub const TIME_Y_STEP: i32 = 3;
    pub const DATE_Y_STEP: i32 = 4;

    /// Anchor origins used while frozen
    pub const UPPER_ANCHOR: IVec2 = IVec2::new(20, 10);
    pub const LOWER_ANCHOR: IVec2 = IVec2::new(20, 75);

    /// Quiet period before motion starts, in 1 Hz ticks
    pub const SPLASH_TICKS: u32 = 3;
    /// How long an interaction keeps the display anchored, in 1 Hz ticks
    pub const FREEZE_TICKS: u32 = 4;
}
