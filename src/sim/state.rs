//! Game state and core simulation types
//!
//! Everything a run owns lives on [`GameState`]; a restart reconstructs
//! the entities while the RNG keeps rolling for the whole session.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::input::Direction;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, only the unpause toggle is read
    Paused,
    /// Run ended, fade overlay decaying
    GameOver,
}

/// The player's bird. Horizontal position is fixed at [`BIRD_LANE_X`];
/// only the vertical axis simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    /// Top edge of the sprite (pixels)
    pub y: i32,
    /// Vertical velocity (pixels/tick, positive = down)
    pub vel: i32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            vel: 0,
        }
    }

    /// Integrate one tick of the head signal.
    ///
    /// Velocity is reassigned each tick, not accumulated: Neutral is a
    /// constant mild sink rate rather than true gravity. No clamping
    /// happens here; leaving the playfield is the collision check's call.
    pub fn advance(&mut self, direction: Direction, tuning: &Tuning) -> i32 {
        self.vel = match direction {
            Direction::Ascend => tuning.ascend_vel,
            Direction::Descend => tuning.descend_vel,
            Direction::Neutral => tuning.drift_vel,
        };
        self.y += self.vel;
        self.y
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// One pipe pair sharing an x position, forming a single passable gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    /// Left edge; decreases every tick until the pair is recycled
    pub x: i32,
    /// Top edge of the upper pipe sprite (negative: it hangs off-screen)
    pub top_y: i32,
    /// Top edge of the lower pipe sprite
    pub bottom_y: i32,
    /// Set once the pair has been credited, so it scores exactly once
    pub scored: bool,
}

/// Game-over fade overlay alpha. Presentation only - it never feeds back
/// into collision or scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    /// Overlay alpha in [0, 255]
    pub level: u8,
}

impl Fade {
    pub const OPAQUE: u8 = 255;

    pub fn new() -> Self {
        Self { level: Self::OPAQUE }
    }

    /// Decay one step toward fully transparent, flooring at 0
    pub fn tick(&mut self, step: u8) -> u8 {
        if self.level > 0 {
            self.level = self.level.saturating_sub(step);
        }
        self.level
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current run
    pub score: u32,
    /// Game-over overlay alpha
    pub fade: Fade,
    /// Player bird
    pub bird: Bird,
    /// Live pipe pairs, leftmost first. Never empty after construction.
    pub pipes: Vec<Pipe>,
    /// Completed Playing ticks this session
    pub time_ticks: u64,
    /// Balance values for this session
    pub tuning: Tuning,
    rng: Pcg32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            fade: Fade::new(),
            bird: Bird::new(),
            pipes: Vec::new(),
            time_ticks: 0,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_pipe();
        state
    }

    /// Spawn a pipe pair at the right edge of the playfield.
    ///
    /// The gap center is drawn uniformly from the tuning range; the
    /// bottom opening then takes its own jitter on top of the fixed gap,
    /// so the pair is not perfectly mirrored. The asymmetry is deliberate
    /// difficulty variance.
    pub fn spawn_pipe(&mut self) {
        let gap_center = self
            .rng
            .random_range(self.tuning.gap_center_min..self.tuning.gap_center_max);
        let jitter = self
            .rng
            .random_range(-self.tuning.gap_jitter..=self.tuning.gap_jitter);
        self.pipes.push(Pipe {
            x: FIELD_WIDTH,
            top_y: gap_center - PIPE_HEIGHT,
            bottom_y: gap_center + self.tuning.pipe_gap + jitter,
            scored: false,
        });
    }

    /// Full reset for a new run: fresh bird, fresh field with one pipe,
    /// score and fade back to their initial values.
    ///
    /// The RNG and tick counter are session-scoped and keep running, so
    /// consecutive runs see different pipes.
    pub fn reset(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.spawn_pipe();
        self.score = 0;
        self.fade = Fade::new();
        self.phase = GamePhase::Playing;
        log::info!("New run started (seed {})", self.seed);
    }
}
