//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Elapsed-time driven, never frame-count driven
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (spawn/fire order)

pub mod collision;
pub mod input;
pub mod rng;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{Control, InputSampler, Intent};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use session::{EndReason, Phase, Session};
pub use state::{Enemy, GameState, Player, Playfield, Projectile};
pub use tick::{TickOutcome, frame_duration, tick};
