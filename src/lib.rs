//! Star Invader - the hidden arcade mini-game of a terminal-style portfolio
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, input intent, collisions, session clock)
//! - `renderer`: Vertex generation for each frame and the WebGPU pipeline that draws it
//! - `platform`: Frame scheduling, key/touch mapping and viewport sizing
//! - `tuning`: Data-driven game balance
//! - `commands`: The portfolio command dispatcher that reveals the game

pub mod commands;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{HostError, TuningError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Player craft hitbox
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Horizontal movement speed (units/second)
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Distance between the player's y and the bottom of the playfield
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 15.0;
    pub const PROJECTILE_SPEED: f32 = 500.0;
    /// Held-fire emission cadence
    pub const FIRE_INTERVAL_MS: u64 = 200;
    /// Where a projectile is parked once it has struck an enemy
    pub const EXPENDED_Y: f32 = -10.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    /// Downward speed range, lower bound inclusive, upper exclusive
    pub const ENEMY_SPEED_MIN: f32 = 50.0;
    pub const ENEMY_SPEED_MAX: f32 = 100.0;
    /// Spawn height (above the visible playfield)
    pub const ENEMY_SPAWN_Y: f32 = -40.0;
    /// Horizontal margin kept free on both sides when spawning
    pub const ENEMY_SPAWN_MARGIN: f32 = 20.0;
    pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 1_500;
    pub const MAX_ENEMIES: usize = 10;

    /// Fixed session length
    pub const SESSION_DURATION_MS: u64 = 20_000;

    /// Playfield caps and the viewport share used below them
    pub const MAX_PLAYFIELD_WIDTH: f32 = 800.0;
    pub const MAX_PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const VIEWPORT_WIDTH_SHARE: f32 = 0.95;
    pub const VIEWPORT_HEIGHT_SHARE: f32 = 0.8;

    /// Background starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MAX_RADIUS: f32 = 1.5;
}
