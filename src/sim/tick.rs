//! Per-tick motion update
//!
//! Reflection uses a look-ahead rule: after a block moves, its *current*
//! velocity is tested for one more step, and reversed (with a freshly
//! randomized magnitude) if that step would leave the valid band. The move
//! that lands each tick was therefore validated at the end of the previous
//! tick, which keeps blocks in bounds without any clamping.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{BlockMotion, MotionState};
use crate::consts::*;

/// Advance both blocks by one tick. No-op while frozen.
pub fn tick(state: &mut MotionState) {
    if state.frozen {
        return;
    }

    state.time.pos += state.time.vel;
    state.date.pos += state.date.vel;

    bounce_horizontal(&mut state.time, &mut state.rng);
    bounce_horizontal(&mut state.date, &mut state.rng);

    if state.time_on_top {
        settle_vertical(&mut state.time, &mut state.date, &mut state.rng);
    } else {
        settle_vertical(&mut state.date, &mut state.time, &mut state.rng);
    }
}

/// New velocity magnitude: step, 2*step or 3*step.
fn resample(rng: &mut Pcg32, step: i32) -> i32 {
    (rng.random_range(0..3i32) + 1) * step
}

/// Reverse a block's x velocity one step before it would cross a side wall.
/// The right bound is 143, one pixel short of the screen edge.
fn bounce_horizontal(block: &mut BlockMotion, rng: &mut Pcg32) {
    if block.pos.x + block.vel.x < 0 {
        block.vel.x = resample(rng, X_STEP);
    } else if block.pos.x + block.vel.x + block.width >= X_LIMIT {
        block.vel.x = -resample(rng, X_STEP);
    }
}

/// Joint vertical pass: top wall for the upper block, bottom wall for the
/// lower block, then the separation check. The separation threshold is the
/// upper block's height, and its resamples override any wall bounce from
/// earlier in the same tick.
fn settle_vertical(upper: &mut BlockMotion, lower: &mut BlockMotion, rng: &mut Pcg32) {
    if upper.pos.y + upper.vel.y < 0 {
        upper.vel.y = resample(rng, upper.y_step);
    }

    if lower.pos.y + lower.vel.y + lower.height >= SCREEN_HEIGHT {
        lower.vel.y = -resample(rng, lower.y_step);
    }

    // Push apart: upper heads up, lower heads down.
    if (lower.pos.y + lower.vel.y) - (upper.pos.y + upper.vel.y) <= upper.height {
        upper.vel.y = -resample(rng, upper.y_step);
        lower.vel.y = resample(rng, lower.y_step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use proptest::prelude::*;

    #[test]
    fn test_first_tick_from_origin() {
        // Stock startup state: both blocks at the origin, date on top.
        let mut state = MotionState::new(42, false, false);
        tick(&mut state);

        assert_eq!(state.time.pos, IVec2::new(2, 3));
        assert_eq!(state.date.pos, IVec2::new(-3, -2));

        // Date would cross the left wall next step: x velocity resampled positive.
        assert!([2, 4, 6].contains(&state.date.vel.x));
        // Time is nowhere near a side wall.
        assert_eq!(state.time.vel.x, 2);
        // Date bounced off the top wall, then the push-apart sent it back up
        // and time (the lower block) down.
        assert!([-4, -8, -12].contains(&state.date.vel.y));
        assert!([3, 6, 9].contains(&state.time.vel.y));
    }

    #[test]
    fn test_right_wall_reverses_x() {
        let mut state = MotionState::new(7, true, false);
        state.time.pos = IVec2::new(34, 60);
        state.time.vel = IVec2::new(4, 0);
        state.date.pos = IVec2::new(10, 120);
        state.date.vel = IVec2::new(0, 0);
        tick(&mut state);

        // 38 + 4 + 103 >= 143: reversed to a negative step.
        assert_eq!(state.time.pos.x, 38);
        assert!([-2, -4, -6].contains(&state.time.vel.x));
    }

    #[test]
    fn test_top_wall_bounce_resamples_time_step() {
        let mut state = MotionState::new(3, true, false);
        state.time.pos = IVec2::new(50, 4);
        state.time.vel = IVec2::new(2, -3);
        state.date.pos = IVec2::new(50, 120);
        state.date.vel = IVec2::new(2, 4);
        tick(&mut state);

        // Time landed at y=1; another -3 would cross the top wall.
        assert_eq!(state.time.pos.y, 1);
        assert!([3, 6, 9].contains(&state.time.vel.y));
    }

    #[test]
    fn test_bottom_wall_bounce_resamples_date_step() {
        let mut state = MotionState::new(3, true, false);
        state.time.pos = IVec2::new(50, 10);
        state.time.vel = IVec2::new(0, 3);
        state.date.pos = IVec2::new(50, 122);
        state.date.vel = IVec2::new(0, 4);
        tick(&mut state);

        // Date landed at y=126; 126 + 4 + 39 reaches past the bottom wall.
        assert_eq!(state.date.pos.y, 126);
        assert!([-4, -8, -12].contains(&state.date.vel.y));
    }

    #[test]
    fn test_separation_pushes_blocks_apart() {
        let mut state = MotionState::new(11, true, false);
        state.time.pos = IVec2::new(20, 60);
        state.time.vel = IVec2::new(0, 3);
        state.date.pos = IVec2::new(20, 115);
        state.date.vel = IVec2::new(0, -4);
        tick(&mut state);

        // Projected gap (111-4) - (63+3) = 41 <= 52: time up, date down.
        assert!([-3, -6, -9].contains(&state.time.vel.y));
        assert!([4, 8, 12].contains(&state.date.vel.y));
    }

    #[test]
    fn test_freeze_pins_anchors_both_orders() {
        let mut state = MotionState::new(1, true, false);
        state.set_freeze(true);
        assert_eq!(state.positions(), (IVec2::new(20, 10), IVec2::new(20, 75)));

        let mut state = MotionState::new(1, false, false);
        state.set_freeze(true);
        assert_eq!(state.positions(), (IVec2::new(20, 75), IVec2::new(20, 10)));
    }

    #[test]
    fn test_frozen_tick_is_a_no_op() {
        let mut state = MotionState::new(5, true, false);
        state.set_freeze(true);
        let before = state.clone();
        for _ in 0..3 {
            tick(&mut state);
        }
        assert_eq!(state.positions(), before.positions());
        assert_eq!(state.time.vel, before.time.vel);
        assert_eq!(state.date.vel, before.date.vel);
    }

    #[test]
    fn test_unfreeze_resumes_with_prior_velocity() {
        let mut state = MotionState::new(5, false, false);
        state.set_freeze(true);
        state.set_freeze(false);
        tick(&mut state);

        // One step from the anchors with the stock velocities; nothing bounces.
        assert_eq!(state.time.pos, IVec2::new(22, 78));
        assert_eq!(state.date.pos, IVec2::new(17, 8));
        assert_eq!(state.time.vel, IVec2::new(2, 3));
        assert_eq!(state.date.vel, IVec2::new(-3, -2));
    }

    #[test]
    fn test_clock_mode_changes_bound_only() {
        let mut state = MotionState::new(9, true, false);
        assert_eq!(state.time.width, 103);
        let pos = state.time.pos;
        let vel = state.time.vel;

        state.set_clock_mode(true);
        assert_eq!(state.time.width, 93);
        assert_eq!(state.time.pos, pos);
        assert_eq!(state.time.vel, vel);

        state.set_clock_mode(false);
        assert_eq!(state.time.width, 103);
    }

    #[test]
    fn test_stack_toggle_while_frozen_swaps_anchors() {
        let mut state = MotionState::new(2, true, false);
        state.set_freeze(true);
        state.set_stack_order(false);
        assert_eq!(state.positions(), (IVec2::new(20, 75), IVec2::new(20, 10)));
    }

    proptest! {
        /// From the anchors, any run keeps both blocks inside the horizontal
        /// band, keeps the stacked blocks apart, and only ever holds
        /// velocities built from the resample steps.
        #[test]
        fn prop_motion_invariants(
            seed in any::<u64>(),
            time_on_top in any::<bool>(),
            clock_24h in any::<bool>(),
            ticks in 1usize..300,
        ) {
            let mut state = MotionState::new(seed, time_on_top, clock_24h);
            state.set_freeze(true);
            state.set_freeze(false);

            for _ in 0..ticks {
                tick(&mut state);

                prop_assert!(state.time.pos.x >= 0);
                prop_assert!(state.time.pos.x + state.time.width <= X_LIMIT);
                prop_assert!(state.date.pos.x >= 0);
                prop_assert!(state.date.pos.x + state.date.width <= X_LIMIT);

                if time_on_top {
                    prop_assert!(state.date.pos.y - state.time.pos.y > TIME_HEIGHT);
                } else {
                    prop_assert!(state.time.pos.y - state.date.pos.y > DATE_HEIGHT);
                }

                for block in [&state.time, &state.date] {
                    prop_assert!(block.vel.x != 0 && block.vel.x.abs() <= 3 * X_STEP);
                    prop_assert!(block.vel.y != 0 && block.vel.y.abs() <= 3 * block.y_step);
                }
            }
        }
    }
}
