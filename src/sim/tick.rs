//! Per-frame simulation step
//!
//! Advances the game state by the wall-clock time since the previous frame.
//! Every timer is measured in elapsed time rather than frame count, so the
//! outcome does not depend on the display refresh rate.

use std::time::Duration;

use glam::Vec2;

use super::input::Intent;
use super::rng::RandomSource;
use super::state::{Enemy, GameState};

/// What a single step reports back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing terminal happened
    Continue,
    /// An enemy reached the bottom boundary
    Breach,
    /// An enemy touched the player craft
    PlayerHit,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TickOutcome::Continue)
    }
}

/// Convert a frame delta to a duration; negative or non-finite deltas count as zero
pub fn frame_duration(dt: f32) -> Duration {
    if dt.is_finite() && dt > 0.0 {
        Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}

/// Advance the game state by `dt` seconds under the given intent
pub fn tick(
    state: &mut GameState,
    intent: &Intent,
    dt: f32,
    rng: &mut impl RandomSource,
) -> TickOutcome {
    let step = frame_duration(dt);
    let dt = step.as_secs_f32();

    // Player movement: both directions may apply and cancel out
    if intent.left {
        state.player.pos.x -= state.player.speed * dt;
    }
    if intent.right {
        state.player.pos.x += state.player.speed * dt;
    }
    state.player.clamp_to(&state.playfield);

    // Held fire emits on a fixed cadence; releasing restarts the cadence
    if intent.fire {
        let interval = state.tuning.fire_interval();
        state.fire_timer += step;
        while !interval.is_zero() && state.fire_timer >= interval {
            state.fire_timer -= interval;
            let projectile = state.player.make_projectile(&state.tuning);
            state.player.projectiles.push(projectile);
        }
    } else {
        state.fire_timer = Duration::ZERO;
    }

    for projectile in &mut state.player.projectiles {
        projectile.pos.y -= projectile.speed * dt;
    }
    state.player.projectiles.retain(|p| !p.is_out_of_bounds());

    // Spawner
    state.spawn_timer += step;
    if state.spawn_timer > state.tuning.enemy_spawn_interval()
        && state.enemies.len() < state.tuning.max_enemies
    {
        let enemy = spawn_enemy(state, rng);
        log::debug!(
            "Spawned enemy at x={:.1} speed={:.1} ({} active)",
            enemy.pos.x,
            enemy.speed,
            state.enemies.len() + 1
        );
        state.enemies.push(enemy);
        state.spawn_timer = Duration::ZERO;
    }

    // Drop enemies already past the bottom, then advance the rest
    let height = state.playfield.height;
    state.enemies.retain(|e| e.pos.y < height);
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.speed * dt;
    }

    if state
        .enemies
        .iter()
        .any(|enemy| enemy.has_breached(&state.playfield))
    {
        return TickOutcome::Breach;
    }

    // Projectile vs enemy: each live projectile takes out the first
    // overlapping enemy in list order, then is expended
    for projectile in &mut state.player.projectiles {
        if projectile.is_out_of_bounds() {
            continue;
        }
        let bounds = projectile.bounds();
        if let Some(idx) = state
            .enemies
            .iter()
            .position(|enemy| bounds.overlaps(&enemy.bounds()))
        {
            state.enemies.remove(idx);
            projectile.expend();
        }
    }
    state.player.projectiles.retain(|p| !p.is_out_of_bounds());

    let player_bounds = state.player.bounds();
    if state
        .enemies
        .iter()
        .any(|enemy| player_bounds.overlaps(&enemy.bounds()))
    {
        return TickOutcome::PlayerHit;
    }

    TickOutcome::Continue
}

/// Build an enemy at a random margin-respecting x above the playfield
fn spawn_enemy(state: &GameState, rng: &mut impl RandomSource) -> Enemy {
    let tuning = &state.tuning;
    let margin = tuning.enemy_spawn_margin;
    let span = (state.playfield.width - margin * 2.0).max(0.0);
    let x = rng.next_unit() * span + margin;
    let speed = rng.next_range(tuning.enemy_speed_min, tuning.enemy_speed_max);
    Enemy::new(Vec2::new(x, tuning.enemy_spawn_y), tuning, speed)
}
