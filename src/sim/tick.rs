//! Fixed timestep simulation tick
//!
//! The whole game advances in discrete ticks at [`crate::consts::TICK_HZ`].
//! A tick either runs to completion or the session ends before the next
//! one starts; nothing suspends mid-tick.

use super::collision::check_collision;
use super::state::{Fade, GamePhase, GameState};
use crate::consts::*;
use crate::input::Direction;

/// Input commands for a single tick
///
/// `direction` is the latest polled head signal; the rest are one-shot
/// commands from the dispatch layer. Commands that make no sense in the
/// current phase are ignored, never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest head direction (defaults to Neutral)
    pub direction: Direction,
    /// Toggle Playing <-> Paused
    pub pause: bool,
    /// Start a fresh run (honored only while GameOver)
    pub restart: bool,
    /// End the session (honored only while GameOver)
    pub quit: bool,
}

/// Advance the game by one fixed tick.
///
/// Returns `false` once a quit has been honored; the driving loop must
/// stop ticking at that point.
pub fn tick(state: &mut GameState, input: &TickInput) -> bool {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return true;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        // Frozen: only the unpause toggle above runs
        GamePhase::Paused => return true,
        GamePhase::GameOver => {
            if input.quit {
                log::info!("Session ended with score {}", state.score);
                return false;
            }
            if input.restart {
                state.reset();
                return true;
            }
            state.fade.tick(state.tuning.fade_step);
            return true;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    state.bird.advance(input.direction, &state.tuning);
    advance_pipes(state);

    if check_collision(&state.bird, &state.pipes) {
        state.phase = GamePhase::GameOver;
        state.fade = Fade::new();
        log::info!(
            "Crashed at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }

    // Runs even on the crash tick: a pipe cleared at the moment of death
    // still counts.
    update_score(state);
    true
}

/// Slide every pipe left and recycle the leftmost once it is fully off
/// screen. Pipes retire in strict creation order, so checking the front
/// of the list is enough.
fn advance_pipes(state: &mut GameState) {
    let vel = state.tuning.pipe_vel;
    for pipe in &mut state.pipes {
        pipe.x -= vel;
    }
    if state.pipes.first().is_some_and(|p| p.x < -PIPE_WIDTH) {
        state.pipes.remove(0);
        state.spawn_pipe();
    }
}

/// Credit every pipe whose trailing edge has passed the bird's lane.
/// The `scored` flag makes the credit idempotent across later ticks.
fn update_score(state: &mut GameState) {
    for pipe in &mut state.pipes {
        if !pipe.scored && pipe.x + PIPE_WIDTH < BIRD_LANE_X {
            pipe.scored = true;
            state.score += state.tuning.pipe_score;
        }
    }
}
