//! Session controller
//!
//! Owns the game state, the session clock and the input sampler, and walks
//! the Idle -> Running -> Ended -> Idle cycle. There is no pause and no
//! direct Running -> Idle edge.

use std::time::Duration;

use super::input::{Control, InputSampler, Intent};
use super::rng::RandomSource;
use super::state::{GameState, Playfield};
use super::tick::{TickOutcome, frame_duration, tick};
use crate::tuning::Tuning;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// An enemy reached the bottom boundary
    Breach,
    /// An enemy collided with the player
    PlayerHit,
    /// The session clock ran out (neutral ending)
    TimeUp,
}

impl EndReason {
    /// Collision endings are losses; running out of time is not
    pub fn is_loss(&self) -> bool {
        !matches!(self, EndReason::TimeUp)
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, waiting for the start control
    Idle,
    /// Simulation and rendering active
    Running,
    /// Terminal state, waiting for the restart control
    Ended(EndReason),
}

/// One playthrough and everything it owns
#[derive(Debug)]
pub struct Session<R> {
    state: GameState,
    phase: Phase,
    /// Wall time since start; only meaningful while Running or Ended
    elapsed: Duration,
    input: InputSampler,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(tuning: Tuning, playfield: Playfield, rng: R) -> Self {
        Self {
            state: GameState::new(tuning, playfield),
            phase: Phase::Idle,
            elapsed: Duration::ZERO,
            input: InputSampler::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn intent(&self) -> Intent {
        self.input.intent()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Seconds left on the clock, `max(0, duration - elapsed)`
    pub fn remaining_secs(&self) -> f32 {
        self.state
            .tuning
            .session_duration()
            .saturating_sub(self.elapsed)
            .as_secs_f32()
    }

    /// Whole seconds for the HUD: the duration minus the floored elapsed time
    pub fn remaining_whole_secs(&self) -> u64 {
        self.state
            .tuning
            .session_duration()
            .as_secs()
            .saturating_sub(self.elapsed.as_secs())
    }

    /// Idle -> Running. Returns false (and does nothing) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("Ignoring start while {:?}", self.phase);
            return false;
        }
        self.reset();
        self.phase = Phase::Running;
        self.input.set_enabled(true);
        log::info!(
            "Session started on {}x{} playfield",
            self.state.playfield.width,
            self.state.playfield.height
        );
        true
    }

    /// Ended -> Idle. Resets everything but does not start a new run.
    pub fn restart(&mut self) -> bool {
        if !matches!(self.phase, Phase::Ended(_)) {
            log::debug!("Ignoring restart while {:?}", self.phase);
            return false;
        }
        self.reset();
        self.phase = Phase::Idle;
        log::info!("Session reset, waiting for start");
        true
    }

    /// Running -> Idle when the host could not keep the loop alive.
    ///
    /// Not an ending: no end reason is recorded and the state is reset.
    pub fn abort(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.reset();
        self.phase = Phase::Idle;
        log::warn!("Session aborted, back to Idle");
        true
    }

    pub fn press(&mut self, control: Control) {
        self.input.press(control);
    }

    pub fn release(&mut self, control: Control) {
        self.input.release(control);
    }

    /// Adopt a new playfield size (viewport resize)
    pub fn resize(&mut self, playfield: Playfield) {
        self.state.resize(playfield);
    }

    /// Advance the clock and, unless time is up, run one simulation step.
    ///
    /// A no-op outside Running, so a finished session is never mutated.
    pub fn advance(&mut self, dt: f32) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }

        self.elapsed += frame_duration(dt);
        if self.elapsed >= self.state.tuning.session_duration() {
            self.end(EndReason::TimeUp);
            return self.phase;
        }

        let intent = self.input.intent();
        match tick(&mut self.state, &intent, dt, &mut self.rng) {
            TickOutcome::Continue => {}
            TickOutcome::Breach => self.end(EndReason::Breach),
            TickOutcome::PlayerHit => self.end(EndReason::PlayerHit),
        }
        self.phase
    }

    fn end(&mut self, reason: EndReason) {
        self.phase = Phase::Ended(reason);
        self.input.set_enabled(false);
        log::info!(
            "Session ended: {:?} after {:.2}s",
            reason,
            self.elapsed.as_secs_f32()
        );
    }

    fn reset(&mut self) {
        self.state.reset();
        self.elapsed = Duration::ZERO;
        self.input.set_enabled(false);
    }
}
