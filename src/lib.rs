//! Gapwing - a head-steered gap-flying arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipe field, scoring, phases)
//! - `input`: Head-motion direction abstraction
//! - `tuning`: Data-driven game balance
//!
//! Rendering, asset loading, and the real head sensor are external
//! collaborators; everything in this crate runs headless at a fixed
//! tick rate.

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{Direction, DirectionSource};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate.
    ///
    /// All per-tick balance values in [`crate::tuning`] (velocities, fade
    /// decrement) are tuned against this cadence. Changing the rate means
    /// scaling those values proportionally; they are not re-derived.
    pub const TICK_HZ: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 512;

    /// Fixed horizontal lane the bird flies in
    pub const BIRD_LANE_X: i32 = 50;
    /// Vertical start position for a fresh run
    pub const BIRD_START_Y: i32 = 250;

    /// Sprite footprints used for the collision rectangles
    pub const BIRD_WIDTH: i32 = 48;
    pub const BIRD_HEIGHT: i32 = 36;
    pub const PIPE_WIDTH: i32 = 78;
    pub const PIPE_HEIGHT: i32 = 480;
}
