//! End-to-end session scenarios driven through the public API

use std::time::Duration;

use glam::Vec2;
use star_invader::Tuning;
use star_invader::sim::{Control, EndReason, Enemy, Phase, Playfield, ScriptedRandom, Session};

fn field() -> Playfield {
    Playfield::new(800.0, 600.0)
}

fn quiet_tuning() -> Tuning {
    Tuning {
        enemy_spawn_interval_ms: 3_600_000,
        ..Tuning::default()
    }
}

fn session_with(tuning: Tuning) -> Session<ScriptedRandom> {
    Session::new(tuning, field(), ScriptedRandom::new(vec![0.25, 0.75, 0.5]))
}

fn place_enemy(session: &mut Session<ScriptedRandom>, x: f32, y: f32, speed: f32) {
    let state = session.state_mut();
    let enemy = Enemy::new(Vec2::new(x, y), &state.tuning, speed);
    state.enemies.push(enemy);
}

#[test]
fn held_fire_for_one_second_emits_five_projectiles() {
    let mut session = session_with(quiet_tuning());
    assert!(session.start());
    let start_y = session.state().player.pos.y;

    session.press(Control::Fire);
    for _ in 0..20 {
        assert_eq!(session.advance(0.05), Phase::Running);
    }

    let projectiles = &session.state().player.projectiles;
    assert_eq!(projectiles.len(), 5);
    assert!(projectiles.iter().all(|p| p.pos.y < start_y));
    // Oldest first, so y grows along the list
    assert!(projectiles.windows(2).all(|w| w[0].pos.y < w[1].pos.y));
}

#[test]
fn releasing_fire_stops_the_stream() {
    let mut session = session_with(quiet_tuning());
    session.start();
    session.press(Control::Fire);
    for _ in 0..4 {
        session.advance(0.05);
    }
    assert_eq!(session.state().player.projectiles.len(), 1);

    session.release(Control::Fire);
    for _ in 0..10 {
        session.advance(0.05);
    }
    assert_eq!(session.state().player.projectiles.len(), 1);
}

#[test]
fn restart_clears_everything_and_waits_in_idle() {
    let mut session = session_with(Tuning::default());
    session.start();
    session.press(Control::Fire);
    session.press(Control::Left);

    // Long enough to fire, spawn, and run out the clock
    while session.is_running() {
        session.advance(0.1);
    }
    assert!(matches!(session.phase(), Phase::Ended(_)));

    assert!(session.restart());
    assert_eq!(session.phase(), Phase::Idle);
    let state = session.state();
    assert!(state.player.projectiles.is_empty());
    assert!(state.enemies.is_empty());
    assert_eq!(state.spawn_timer, Duration::ZERO);
    assert_eq!(state.player.pos, Vec2::new(400.0, 520.0));
    assert_eq!(session.remaining_whole_secs(), 20);
}

#[test]
fn session_times_out_after_twenty_seconds() {
    let mut session = session_with(quiet_tuning());
    session.start();
    let mut frames = 0;
    while session.advance(0.25) == Phase::Running {
        frames += 1;
    }
    assert_eq!(frames, 79);
    assert_eq!(session.phase(), Phase::Ended(EndReason::TimeUp));
    assert_eq!(session.remaining_whole_secs(), 0);
}

#[test]
fn breach_ends_the_session_and_freezes_state() {
    let mut session = session_with(quiet_tuning());
    session.start();
    place_enemy(&mut session, 100.0, 580.0, 100.0);

    assert_eq!(session.advance(0.1), Phase::Ended(EndReason::Breach));
    assert!(EndReason::Breach.is_loss());

    let snapshot = session.state().clone();
    session.press(Control::Right);
    session.advance(0.5);
    assert_eq!(session.state(), &snapshot);
}

#[test]
fn enemy_reaching_the_player_ends_the_session() {
    let mut session = session_with(quiet_tuning());
    session.start();
    place_enemy(&mut session, 400.0, 495.0, 50.0);

    assert_eq!(session.advance(0.1), Phase::Ended(EndReason::PlayerHit));
    assert_eq!(session.state().enemies.len(), 1);
}

#[test]
fn timeout_takes_precedence_over_a_breach_in_the_same_frame() {
    let mut session = session_with(quiet_tuning());
    session.start();
    for _ in 0..199 {
        session.advance(0.1);
    }
    assert!(session.is_running());

    place_enemy(&mut session, 100.0, 580.0, 100.0);
    assert_eq!(session.advance(0.2), Phase::Ended(EndReason::TimeUp));
    assert_eq!(session.state().enemies[0].pos.y, 580.0);
}

#[test]
fn spawned_enemies_respect_margins_and_speed_range() {
    let tuning = Tuning::default();
    let mut session = Session::new(
        tuning.clone(),
        field(),
        ScriptedRandom::new(vec![0.0, 0.0, 0.999, 0.999]),
    );
    session.start();
    // Two spawns fit in four seconds and neither gets near the player
    for _ in 0..40 {
        session.advance(0.1);
    }

    let enemies = &session.state().enemies;
    assert_eq!(enemies.len(), 2);
    for enemy in enemies {
        assert!(enemy.pos.x >= tuning.enemy_spawn_margin);
        assert!(enemy.pos.x <= field().width - tuning.enemy_spawn_margin);
        assert!(enemy.speed >= tuning.enemy_speed_min);
        assert!(enemy.speed < tuning.enemy_speed_max);
    }
}

#[test]
fn resize_recentres_the_player() {
    let mut session = session_with(quiet_tuning());
    session.resize(Playfield::new(380.0, 400.0));
    assert_eq!(session.state().player.pos, Vec2::new(190.0, 320.0));

    session.start();
    session.press(Control::Right);
    for _ in 0..20 {
        session.advance(0.1);
    }
    let player = &session.state().player;
    assert!(player.pos.x + player.width / 2.0 <= 380.0 + 1e-3);
}
