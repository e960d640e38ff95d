//! Glyph selection and placement
//!
//! The display renderer composites pre-rendered glyph bitmaps; this module
//! only decides which glyph goes where, relative to the motion engine's
//! block origins. Pure data, no platform dependencies.

pub mod glyphs;
pub mod layout;

pub use glyphs::{BatteryReading, Glyph, Placement};
pub use layout::{date_row, time_row};
