//! Data-driven game balance
//!
//! Every value here is a per-tick quantity tuned for the fixed 30 Hz
//! cadence in [`crate::consts`]. A tuning file only needs to name the
//! fields it overrides; the rest keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Game balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vertical velocity while the head signal reads Ascend (pixels/tick)
    pub ascend_vel: i32,
    /// Vertical velocity while the head signal reads Descend (pixels/tick)
    pub descend_vel: i32,
    /// Drift with no signal - a constant gravity bias, not acceleration
    pub drift_vel: i32,
    /// Horizontal pipe speed (pixels/tick)
    pub pipe_vel: i32,
    /// Vertical opening between the two pipes of a pair
    pub pipe_gap: i32,
    /// Gap-center draw range, half-open
    pub gap_center_min: i32,
    pub gap_center_max: i32,
    /// Bottom-opening jitter, inclusive symmetric bound
    pub gap_jitter: i32,
    /// Points credited per pipe cleared
    pub pipe_score: u32,
    /// Alpha decrement per tick during the game-over fade
    pub fade_step: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ascend_vel: -5,
            descend_vel: 5,
            drift_vel: 1,
            pipe_vel: 3,
            pipe_gap: 170,
            gap_center_min: 150,
            gap_center_max: 300,
            gap_jitter: 20,
            pipe_score: 10,
            fade_step: 5,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning: Tuning = serde_json::from_str(&raw)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Tuning::default();
        assert_eq!(t.ascend_vel, -5);
        assert_eq!(t.descend_vel, 5);
        assert_eq!(t.drift_vel, 1);
        assert_eq!(t.pipe_vel, 3);
        assert_eq!(t.pipe_gap, 170);
        assert_eq!(t.pipe_score, 10);
        assert_eq!(t.fade_step, 5);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"pipe_vel": 5}"#).unwrap();
        assert_eq!(t.pipe_vel, 5);
        assert_eq!(t.pipe_gap, 170);
        assert_eq!(t.ascend_vel, -5);
    }

    #[test]
    fn test_round_trip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gap_center_min, t.gap_center_min);
        assert_eq!(back.gap_jitter, t.gap_jitter);
    }
}
