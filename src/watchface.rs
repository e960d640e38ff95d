//! Top-level watchface controller
//!
//! Owns the motion engine plus the two countdown timers that gate it: the
//! splash timer (quiet period after boot) and the freeze timer (display
//! anchored after an interaction). Input events arrive between ticks and
//! take effect on the next one.

use chrono::{NaiveDateTime, Timelike};

use crate::consts::{FREEZE_TICKS, SPLASH_TICKS};
use crate::face::{self, BatteryReading, Placement};
use crate::settings::Settings;
use crate::sim::{MotionState, tick};

/// Engine activity phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Splash still showing; ticks and toggles are ignored
    Settling,
    /// Anchored after boot or an interaction
    Frozen,
    /// Ticking and bouncing
    Active,
}

/// The running watchface: preferences, motion state and timers
pub struct Watchface {
    pub settings: Settings,
    pub motion: MotionState,
    splash_ticks: u32,
    freeze_ticks: u32,
    light_on: bool,
}

impl Watchface {
    /// Boot the watchface. The display opens frozen at the anchors and stays
    /// there until both the splash and freeze timers run out.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut motion = MotionState::new(seed, settings.time_on_top, settings.clock_24h);
        motion.set_freeze(true);
        Self {
            settings,
            motion,
            splash_ticks: SPLASH_TICKS,
            freeze_ticks: FREEZE_TICKS,
            light_on: false,
        }
    }

    /// One second elapsed: count down the timers, then advance the motion.
    pub fn second_tick(&mut self) {
        if self.splash_ticks > 0 {
            self.splash_ticks -= 1;
            return;
        }

        if self.freeze_ticks > 0 {
            self.freeze_ticks -= 1;
            if self.freeze_ticks == 0 {
                self.light_on = false;
                self.motion.set_freeze(false);
            }
        }

        tick(&mut self.motion);
    }

    pub fn phase(&self) -> Phase {
        if self.splash_ticks > 0 {
            Phase::Settling
        } else if self.freeze_ticks > 0 {
            Phase::Frozen
        } else {
            Phase::Active
        }
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    /// Down button: flip the 12h/24h clock style.
    pub fn toggle_clock_mode(&mut self) {
        if self.splash_ticks > 0 {
            return;
        }
        self.settings.clock_24h = !self.settings.clock_24h;
        self.motion.set_clock_mode(self.settings.clock_24h);
    }

    /// Up button: flip month/day order on the date line.
    pub fn toggle_date_order(&mut self) {
        if self.splash_ticks > 0 {
            return;
        }
        self.settings.date_month_first = !self.settings.date_month_first;
    }

    /// Long select: flip night mode.
    pub fn toggle_night(&mut self) {
        if self.splash_ticks > 0 {
            return;
        }
        self.settings.night_enabled = !self.settings.night_enabled;
    }

    /// Select button. On a freshly armed freeze this swaps the stacking
    /// order (the anchors trade places); otherwise it re-arms the freeze and
    /// toggles the backlight.
    pub fn select_press(&mut self) {
        if self.splash_ticks > 0 {
            return;
        }
        if self.freeze_ticks == FREEZE_TICKS {
            self.settings.time_on_top = !self.settings.time_on_top;
            self.motion.set_stack_order(self.settings.time_on_top);
            self.light_on = true;
        } else {
            self.freeze_ticks = FREEZE_TICKS;
            self.motion.set_freeze(true);
            self.light_on = !self.light_on;
        }
    }

    /// Shake/tap gesture: re-arm the freeze and toggle the backlight.
    pub fn tap(&mut self) {
        self.freeze_ticks = FREEZE_TICKS;
        self.motion.set_freeze(true);
        self.light_on = !self.light_on;
    }

    /// Composite the glyph placements for one frame. Empty while settling
    /// (the splash covers the screen). The block that rides on top is
    /// emitted last so it layers above the other.
    pub fn frame(&self, now: &NaiveDateTime, battery: BatteryReading) -> Vec<Placement> {
        if self.splash_ticks > 0 {
            return Vec::new();
        }

        let inverted = self.settings.night_enabled;
        let (time_pos, date_pos) = self.motion.positions();
        let time = face::time_row(now.hour(), now.minute(), self.settings.clock_24h, time_pos, inverted);
        let date = face::date_row(
            now.date(),
            self.settings.date_month_first,
            battery,
            date_pos,
            inverted,
        );

        let mut frame = Vec::with_capacity(time.len() + date.len());
        if self.settings.time_on_top {
            frame.extend(date);
            frame.extend(time);
        } else {
            frame.extend(time);
            frame.extend(date);
        }
        frame
    }
}
