//! Frame loop scheduling and cancellation against a manual scheduler

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use star_invader::platform::{FrameHandle, FrameScheduler, GameLoop};
use star_invader::sim::{
    Control, EndReason, Intent, Phase, Playfield, ScriptedRandom, Session,
};
use star_invader::{HostError, Tuning};

#[derive(Debug, Default)]
struct SchedulerLog {
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

/// Hands out sequential handles and records every request and cancel
struct ManualScheduler {
    log: Rc<RefCell<SchedulerLog>>,
    next: i32,
    offline: bool,
}

impl ManualScheduler {
    fn new() -> (Self, Rc<RefCell<SchedulerLog>>) {
        let log = Rc::new(RefCell::new(SchedulerLog::default()));
        let scheduler = Self {
            log: log.clone(),
            next: 0,
            offline: false,
        };
        (scheduler, log)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        if self.offline {
            return Err(HostError::Schedule("scheduler offline".into()));
        }
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.log.borrow_mut().requested.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}

fn session(tuning: Tuning) -> Session<ScriptedRandom> {
    Session::new(
        tuning,
        Playfield::new(800.0, 600.0),
        ScriptedRandom::new(vec![0.5]),
    )
}

fn short_tuning() -> Tuning {
    Tuning {
        session_duration_ms: 100,
        enemy_spawn_interval_ms: 3_600_000,
        ..Tuning::default()
    }
}

#[test]
fn idle_loop_requests_nothing() {
    let (scheduler, log) = ManualScheduler::new();
    let game = GameLoop::new(scheduler, session(Tuning::default()));
    assert!(!game.has_pending_frame());
    assert!(log.borrow().requested.is_empty());
}

#[test]
fn start_schedules_exactly_one_frame() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));

    assert!(game.start().unwrap());
    assert!(game.has_pending_frame());
    assert!(!game.start().unwrap());
    assert_eq!(log.borrow().requested, vec![FrameHandle(1)]);
}

#[test]
fn first_frame_only_sets_the_time_base() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    game.start().unwrap();

    assert_eq!(game.on_frame(5_000.0).unwrap(), Phase::Running);
    assert_eq!(game.session().elapsed(), Duration::ZERO);

    game.on_frame(5_050.0).unwrap();
    let elapsed = game.session().elapsed().as_secs_f64();
    assert!((elapsed - 0.05).abs() < 1e-6);

    // One request per delivered frame, never more than one outstanding
    assert_eq!(log.borrow().requested.len(), 3);
    assert!(game.has_pending_frame());
}

#[test]
fn ended_session_leaves_no_frame_pending() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(short_tuning()));
    game.start().unwrap();

    game.on_frame(0.0).unwrap();
    game.on_frame(60.0).unwrap();
    assert_eq!(
        game.on_frame(120.0).unwrap(),
        Phase::Ended(EndReason::TimeUp)
    );
    assert!(!game.has_pending_frame());
    assert_eq!(log.borrow().requested.len(), 3);

    // A late callback cannot revive or mutate the ended session
    assert_eq!(
        game.on_frame(500.0).unwrap(),
        Phase::Ended(EndReason::TimeUp)
    );
    assert_eq!(log.borrow().requested.len(), 3);
}

#[test]
fn stop_cancels_the_pending_frame() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    game.start().unwrap();
    game.on_frame(0.0).unwrap();

    game.stop();
    assert!(!game.has_pending_frame());
    assert_eq!(log.borrow().cancelled, vec![FrameHandle(2)]);

    // Nothing left to cancel
    game.stop();
    assert_eq!(log.borrow().cancelled.len(), 1);
}

#[test]
fn dropping_the_loop_cancels_the_pending_frame() {
    let (scheduler, log) = ManualScheduler::new();
    {
        let mut game = GameLoop::new(scheduler, session(Tuning::default()));
        game.start().unwrap();
    }
    assert_eq!(log.borrow().cancelled, vec![FrameHandle(1)]);
}

#[test]
fn replacing_the_session_tears_down_the_old_loop() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    game.start().unwrap();

    game.replace_session(session(Tuning::default()));
    assert_eq!(log.borrow().cancelled, vec![FrameHandle(1)]);
    assert_eq!(game.session().phase(), Phase::Idle);
    assert!(!game.has_pending_frame());
}

#[test]
fn restart_then_start_runs_a_fresh_session() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(short_tuning()));
    game.start().unwrap();
    game.on_frame(0.0).unwrap();
    game.on_frame(200.0).unwrap();
    assert!(matches!(game.session().phase(), Phase::Ended(_)));

    assert!(game.restart());
    assert_eq!(game.session().phase(), Phase::Idle);
    assert!(game.start().unwrap());
    assert_eq!(game.on_frame(10_000.0).unwrap(), Phase::Running);
    assert_eq!(game.session().elapsed(), Duration::ZERO);
    assert_eq!(log.borrow().requested.len(), 4);
}

#[test]
fn failed_first_frame_leaves_the_session_idle() {
    let (mut scheduler, _log) = ManualScheduler::new();
    scheduler.offline = true;
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    assert!(matches!(game.start(), Err(HostError::Schedule(_))));
    assert!(!game.has_pending_frame());
    assert_eq!(game.session().phase(), Phase::Idle);

    // Input stays disabled, so nothing leaks into a later start
    game.session_mut().press(Control::Fire);
    assert_eq!(game.session().intent(), Intent::default());

    game.scheduler_mut().offline = false;
    assert!(game.start().unwrap());
    assert!(game.has_pending_frame());
}

#[test]
fn failed_follow_up_frame_returns_the_session_to_idle() {
    let (scheduler, _log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    game.start().unwrap();
    game.on_frame(0.0).unwrap();

    game.scheduler_mut().offline = true;
    assert!(game.on_frame(16.0).is_err());
    assert!(!game.has_pending_frame());
    assert_eq!(game.session().phase(), Phase::Idle);
    assert_eq!(game.session().intent(), Intent::default());
}

#[test]
fn restart_while_running_keeps_the_loop_alive() {
    let (scheduler, log) = ManualScheduler::new();
    let mut game = GameLoop::new(scheduler, session(Tuning::default()));
    game.start().unwrap();
    game.on_frame(0.0).unwrap();

    assert!(!game.restart());
    assert!(game.session().is_running());
    assert!(game.has_pending_frame());
    assert!(log.borrow().cancelled.is_empty());

    // The time base survives too
    game.on_frame(100.0).unwrap();
    let elapsed = game.session().elapsed().as_secs_f64();
    assert!((elapsed - 0.1).abs() < 1e-6);
}
