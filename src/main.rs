//! Gapwing entry point
//!
//! Runs the simulation headless at the fixed tick rate, with a scripted
//! autopilot standing in for the head sensor. Doubles as a smoke run and
//! as the reference for wiring up a real renderer and sensor: poll a
//! direction, build a [`TickInput`], call [`tick`], hand the state to
//! whatever draws it.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use gapwing::consts::*;
use gapwing::input::{Direction, DirectionSource};
use gapwing::sim::{GamePhase, GameState, TickInput, tick};
use gapwing::tuning::Tuning;

/// The demo ends after this many crashes
const DEMO_RUNS: u32 = 3;

/// Demo stand-in for the head sensor: steers toward the center of the
/// next gap. `track` records the latest observation; `poll` stays
/// non-blocking and just reports it, like a real sensor driver would.
#[derive(Default)]
struct Autopilot {
    latest: Direction,
}

impl Autopilot {
    fn track(&mut self, state: &GameState) {
        let next = state
            .pipes
            .iter()
            .find(|p| p.x + PIPE_WIDTH >= BIRD_LANE_X);
        let Some(pipe) = next else {
            self.latest = Direction::Neutral;
            return;
        };
        let gap_top = pipe.top_y + PIPE_HEIGHT;
        let target = (gap_top + pipe.bottom_y) / 2 - BIRD_HEIGHT / 2;
        self.latest = if state.bird.y > target + 5 {
            Direction::Ascend
        } else if state.bird.y < target - 5 {
            Direction::Descend
        } else {
            Direction::Neutral
        };
    }
}

impl DirectionSource for Autopilot {
    fn poll(&mut self) -> Direction {
        self.latest
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("seed must be an unsigned integer")?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let tuning = match std::env::var_os("GAPWING_TUNING") {
        Some(path) => Tuning::load_from_file(path)?,
        None => Tuning::default(),
    };

    log::info!("Gapwing starting (seed {seed})");
    let mut state = GameState::with_tuning(seed, tuning);
    let mut pilot = Autopilot::default();
    let mut crashes = 0u32;
    let tick_len = Duration::from_secs_f32(SIM_DT);

    loop {
        let frame_start = Instant::now();

        pilot.track(&state);
        let mut input = TickInput {
            direction: pilot.poll(),
            ..Default::default()
        };

        // Let the fade play out, then either restart or call it a session
        if state.phase == GamePhase::GameOver && state.fade.level == 0 {
            crashes += 1;
            if crashes < DEMO_RUNS {
                input.restart = true;
            } else {
                input.quit = true;
            }
        }

        if !tick(&mut state, &input) {
            break;
        }

        if state.phase == GamePhase::Playing && state.time_ticks % TICK_HZ as u64 == 0 {
            log::debug!(
                "tick {} bird_y={} score={}",
                state.time_ticks,
                state.bird.y,
                state.score
            );
        }

        thread::sleep(tick_len.saturating_sub(frame_start.elapsed()));
    }

    log::info!("Session over after {} runs, final score {}", crashes, state.score);
    Ok(())
}
