//! Input intent sampling
//!
//! Keyboard and touch press/release events both funnel into the same three
//! booleans. Nothing is queued: the simulation only ever sees which controls
//! are held right now.

use serde::{Deserialize, Serialize};

/// A player control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Left,
    Right,
    Fire,
}

/// Currently held controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Intent {
    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::Left => self.left = held,
            Control::Right => self.right = held,
            Control::Fire => self.fire = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Fire => self.fire,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Turns press/release signals into an [`Intent`] snapshot
///
/// While disabled (session not running) every event is dropped.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    intent: Intent,
    enabled: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable sampling; disabling releases every control
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.intent.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn press(&mut self, control: Control) {
        if self.enabled {
            self.intent.set(control, true);
        }
    }

    pub fn release(&mut self, control: Control) {
        if self.enabled {
            self.intent.set(control, false);
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }
}
