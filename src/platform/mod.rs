//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame ticks (request/cancel next frame)
//! - Input events (key codes and touch buttons)
//! - Viewport sizing

pub mod keymap;
pub mod scheduler;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keymap::{captured_key, control_for_button_id, control_for_key_code};
pub use scheduler::{FrameHandle, FrameScheduler, GameLoop};
pub use viewport::playfield_for_viewport;
#[cfg(target_arch = "wasm32")]
pub use web::WebScheduler;
