//! Deterministic motion engine
//!
//! All movement logic lives here. This module must stay pure and deterministic:
//! - Integer positions and velocities only
//! - One fixed-size step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{BlockMotion, MotionState};
pub use tick::tick;
