//! Frame scheduling
//!
//! The host owns the "call me on the next display refresh" facility; the game
//! loop only asks for one frame at a time and always knows which request is
//! outstanding, so stopping the loop can cancel it deterministically.

use crate::HostError;
use crate::sim::{Phase, RandomSource, Session};

/// Identifier of an outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Request/cancel capability for per-frame callbacks
pub trait FrameScheduler {
    /// Ask the host to deliver one frame callback
    fn request_frame(&mut self) -> Result<FrameHandle, HostError>;
    /// Withdraw a request that has not fired yet
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Drives a [`Session`] from host frame callbacks
///
/// At most one frame is pending at any time. A frame is only requested while
/// the session is Running; dropping the loop cancels whatever is pending.
pub struct GameLoop<S: FrameScheduler, R> {
    scheduler: S,
    session: Session<R>,
    pending: Option<FrameHandle>,
    /// Host timestamp (ms) of the previous frame in this run
    last_timestamp: Option<f64>,
}

impl<S: FrameScheduler, R: RandomSource> GameLoop<S, R> {
    pub fn new(scheduler: S, session: Session<R>) -> Self {
        Self {
            scheduler,
            session,
            pending: None,
            last_timestamp: None,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a session and schedule its first frame.
    ///
    /// Returns `Ok(false)` when the session was not Idle. If the first frame
    /// cannot be scheduled the session goes back to Idle.
    pub fn start(&mut self) -> Result<bool, HostError> {
        if !self.session.start() {
            return Ok(false);
        }
        self.last_timestamp = None;
        self.schedule_or_abort()?;
        Ok(true)
    }

    /// Return an ended session to Idle. A running session is left alone.
    pub fn restart(&mut self) -> bool {
        if !self.session.restart() {
            return false;
        }
        self.cancel();
        self.last_timestamp = None;
        true
    }

    /// Handle one host frame callback at `timestamp_ms`.
    ///
    /// The first frame of a run only establishes the time base (dt = 0).
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Result<Phase, HostError> {
        // The request that produced this callback has fired
        self.pending = None;

        if !self.session.is_running() {
            return Ok(self.session.phase());
        }

        let dt = match self.last_timestamp {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        let phase = self.session.advance(dt);
        if phase == Phase::Running {
            self.schedule_or_abort()?;
        }
        Ok(phase)
    }

    /// Tear the loop down: cancel any pending frame
    pub fn stop(&mut self) {
        self.cancel();
        self.last_timestamp = None;
    }

    /// Swap in a fresh session (component remount), cancelling the old loop
    pub fn replace_session(&mut self, session: Session<R>) {
        self.stop();
        self.session = session;
    }

    /// Request the next frame; a session that cannot get one does not stay Running
    fn schedule_or_abort(&mut self) -> Result<(), HostError> {
        if self.pending.is_some() {
            return Ok(());
        }
        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.session.abort();
                self.last_timestamp = None;
                Err(e)
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler, R> Drop for GameLoop<S, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
