//! Glyph identifiers and placements

use chrono::Weekday;
use glam::IVec2;

/// One glyph the renderer can composite. `Large*` variants are the tall time
/// digits; `Small*` variants are the date/battery digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    LargeDigit(u8),
    LargeBlank,
    Colon,
    Am,
    Pm,
    /// Blank where AM/PM would sit, used in 24-hour mode
    ModeBlank,
    SmallDigit(u8),
    SmallBlank,
    Slash,
    Plus,
    Percent,
    Day(Weekday),
}

/// A glyph at an absolute screen origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub glyph: Glyph,
    pub origin: IVec2,
    /// Render from the inverted (night mode) asset set
    pub inverted: bool,
}

/// Snapshot of the host battery service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReading {
    pub charge_percent: u8,
    pub charging: bool,
}
