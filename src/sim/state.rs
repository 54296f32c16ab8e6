//! Game state and core simulation types
//!
//! Everything a session mutates during a tick lives in [`GameState`].

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::EXPENDED_Y;
use crate::tuning::Tuning;

/// The bounded rectangle all entities move in (origin top-left, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Upward speed (units/second)
    pub speed: f32,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Projectiles at or above the top edge are gone
    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y <= 0.0
    }

    /// Park the projectile out of bounds so the next prune drops it
    pub fn expend(&mut self) {
        self.pos.y = EXPENDED_Y;
    }
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Downward speed (units/second)
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, tuning: &Tuning, speed: f32) -> Self {
        Self {
            pos,
            width: tuning.enemy_width,
            height: tuning.enemy_height,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Leading edge has reached the bottom boundary
    #[inline]
    pub fn has_breached(&self, playfield: &Playfield) -> bool {
        self.pos.y + self.height / 2.0 >= playfield.height
    }
}

/// The player's craft and the projectiles it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// `x` moves, `y` is pinned near the bottom
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units per second
    pub speed: f32,
    /// Active projectiles, oldest first
    pub projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(playfield: &Playfield, tuning: &Tuning) -> Self {
        Self {
            pos: Self::start_position(playfield, tuning),
            width: tuning.player_width,
            height: tuning.player_height,
            speed: tuning.player_speed,
            projectiles: Vec::new(),
        }
    }

    /// Canonical start coordinates: horizontally centred, pinned above the bottom
    pub fn start_position(playfield: &Playfield, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            playfield.width / 2.0,
            playfield.height - tuning.player_bottom_offset,
        )
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Keep the craft fully inside `[width/2, playfield.width - width/2]`
    pub fn clamp_to(&mut self, playfield: &Playfield) {
        let half = self.width / 2.0;
        let max_x = playfield.width - half;
        self.pos.x = if max_x < half {
            // Playfield narrower than the craft: centre it
            playfield.width / 2.0
        } else {
            self.pos.x.clamp(half, max_x)
        };
    }

    /// A fresh projectile leaving the nose of the craft
    pub fn make_projectile(&self, tuning: &Tuning) -> Projectile {
        Projectile {
            pos: Vec2::new(self.pos.x, self.pos.y - self.height / 2.0),
            width: tuning.projectile_width,
            height: tuning.projectile_height,
            speed: tuning.projectile_speed,
        }
    }
}

/// Complete per-session simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub playfield: Playfield,
    pub player: Player,
    /// Active enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Time since the last spawn (or session start)
    pub spawn_timer: Duration,
    /// Held-fire time not yet turned into a projectile
    pub fire_timer: Duration,
}

impl GameState {
    pub fn new(tuning: Tuning, playfield: Playfield) -> Self {
        let player = Player::new(&playfield, &tuning);
        Self {
            tuning,
            playfield,
            player,
            enemies: Vec::new(),
            spawn_timer: Duration::ZERO,
            fire_timer: Duration::ZERO,
        }
    }

    /// Clear all entities and timers, put the player back at the start
    pub fn reset(&mut self) {
        self.player = Player::new(&self.playfield, &self.tuning);
        self.enemies.clear();
        self.spawn_timer = Duration::ZERO;
        self.fire_timer = Duration::ZERO;
    }

    /// Adopt a new playfield size, re-centring and re-pinning the player
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield;
        self.player.pos = Player::start_position(&self.playfield, &self.tuning);
    }
}
