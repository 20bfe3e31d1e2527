//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or sensor dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use state::{Bird, Fade, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
