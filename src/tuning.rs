//! Data-driven game balance
//!
//! Every gameplay number lives here so a host page can override it with a
//! JSON blob. Defaults mirror `crate::consts`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::TuningError;
use crate::consts::*;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Units per second
    pub player_speed: f32,
    pub player_bottom_offset: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    pub fire_interval_ms: u64,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub enemy_spawn_y: f32,
    pub enemy_spawn_margin: f32,
    pub enemy_spawn_interval_ms: u64,
    pub max_enemies: usize,

    // === Session ===
    pub session_duration_ms: u64,

    // === Presentation ===
    pub max_playfield_width: f32,
    pub max_playfield_height: f32,
    /// Share of a viewport at or below the cap that the playfield takes
    pub viewport_width_share: f32,
    pub viewport_height_share: f32,
    pub star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            fire_interval_ms: FIRE_INTERVAL_MS,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            enemy_spawn_y: ENEMY_SPAWN_Y,
            enemy_spawn_margin: ENEMY_SPAWN_MARGIN,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            max_enemies: MAX_ENEMIES,

            session_duration_ms: SESSION_DURATION_MS,

            max_playfield_width: MAX_PLAYFIELD_WIDTH,
            max_playfield_height: MAX_PLAYFIELD_HEIGHT,
            viewport_width_share: VIEWPORT_WIDTH_SHARE,
            viewport_height_share: VIEWPORT_HEIGHT_SHARE,
            star_count: STAR_COUNT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive_f32 = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("projectile_speed", self.projectile_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed_min", self.enemy_speed_min),
            ("max_playfield_width", self.max_playfield_width),
            ("max_playfield_height", self.max_playfield_height),
        ];
        for (field, value) in positive_f32 {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field });
            }
        }

        let positive_u64 = [
            ("fire_interval_ms", self.fire_interval_ms),
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("session_duration_ms", self.session_duration_ms),
            ("max_enemies", self.max_enemies as u64),
        ];
        for (field, value) in positive_u64 {
            if value == 0 {
                return Err(TuningError::NotPositive { field });
            }
        }

        for (field, value) in [
            ("viewport_width_share", self.viewport_width_share),
            ("viewport_height_share", self.viewport_height_share),
        ] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(TuningError::ShareOutOfRange { field, value });
            }
        }

        // enemy_speed_min is already known finite here
        if self.enemy_speed_max.is_nan() || self.enemy_speed_max <= self.enemy_speed_min {
            return Err(TuningError::EmptySpeedRange {
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }

        Ok(())
    }

    pub fn fire_interval(&self) -> Duration {
        Duration::from_millis(self.fire_interval_ms)
    }

    pub fn enemy_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.enemy_spawn_interval_ms)
    }

    pub fn session_duration(&self) -> Duration {
        Duration::from_millis(self.session_duration_ms)
    }
}
