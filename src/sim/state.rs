//! Motion state for the two display blocks

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// One rectangular display region under motion
#[derive(Debug, Clone)]
pub struct BlockMotion {
    /// Top-left origin
    pub pos: IVec2,
    /// Pixels per tick, signed per axis
    pub vel: IVec2,
    /// Width used by the horizontal reflection bound
    pub width: i32,
    pub height: i32,
    /// Step unit for vertical velocity resampling
    pub y_step: i32,
}

/// Complete motion engine state
///
/// Owned by the top-level controller and mutated synchronously: one `tick()`
/// per simulated second, setters between ticks.
#[derive(Debug, Clone)]
pub struct MotionState {
    pub time: BlockMotion,
    pub date: BlockMotion,
    /// Which block is vertically above the other
    pub time_on_top: bool,
    /// While frozen both blocks sit at their anchors and ticks are no-ops
    pub frozen: bool,
    pub(crate) rng: Pcg32,
}

impl MotionState {
    /// Create motion state with the stock startup velocities.
    pub fn new(seed: u64, time_on_top: bool, clock_24h: bool) -> Self {
        Self {
            time: BlockMotion {
                pos: IVec2::ZERO,
                vel: IVec2::new(2, 3),
                width: time_width(clock_24h),
                height: TIME_HEIGHT,
                y_step: TIME_Y_STEP,
            },
            date: BlockMotion {
                pos: IVec2::ZERO,
                vel: IVec2::new(-3, -2),
                width: DATE_WIDTH,
                height: DATE_HEIGHT,
                y_step: DATE_Y_STEP,
            },
            time_on_top,
            frozen: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Swap the time block's reflection bound between 12h and 24h widths.
    /// Position and velocity are untouched.
    pub fn set_clock_mode(&mut self, clock_24h: bool) {
        self.time.width = time_width(clock_24h);
    }

    /// Change which block is on top. Re-pins the anchors when frozen, since
    /// the anchors trade places with the blocks.
    pub fn set_stack_order(&mut self, time_on_top: bool) {
        self.time_on_top = time_on_top;
        if self.frozen {
            self.pin_anchors();
        }
    }

    /// Enter or leave the anchored state. Freezing pins both blocks to their
    /// anchors; velocities are kept so motion resumes where it left off.
    pub fn set_freeze(&mut self, frozen: bool) {
        self.frozen = frozen;
        if frozen {
            self.pin_anchors();
        }
    }

    /// Current block origins, for the renderer: (time, date).
    pub fn positions(&self) -> (IVec2, IVec2) {
        (self.time.pos, self.date.pos)
    }

    fn pin_anchors(&mut self) {
        if self.time_on_top {
            self.time.pos = UPPER_ANCHOR;
            self.date.pos = LOWER_ANCHOR;
        } else {
            self.time.pos = LOWER_ANCHOR;
            self.date.pos = UPPER_ANCHOR;
        }
    }
}

fn time_width(clock_24h: bool) -> i32 {
    if clock_24h { TIME_WIDTH_24H } else { TIME_WIDTH_12H }
}
