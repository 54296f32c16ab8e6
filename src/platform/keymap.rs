//! Keyboard and touch bindings
//!
//! Both input paths resolve to the same [`Control`] values so the sampler
//! cannot tell them apart.

use crate::sim::Control;

/// Element ids of the on-screen touch buttons and the control each drives
pub const TOUCH_BUTTONS: [(&str, Control); 3] = [
    ("left-button", Control::Left),
    ("shoot-button", Control::Fire),
    ("right-button", Control::Right),
];

/// Map a `KeyboardEvent.code` to a control
pub fn control_for_key_code(code: &str) -> Option<Control> {
    match code {
        "ArrowLeft" => Some(Control::Left),
        "ArrowRight" => Some(Control::Right),
        "Space" => Some(Control::Fire),
        _ => None,
    }
}

/// The control a keydown should be captured for, if any.
///
/// Keys only belong to the game while a session is running; otherwise they
/// keep their page behaviour (typing, scrolling).
pub fn captured_key(code: &str, game_running: bool) -> Option<Control> {
    if game_running {
        control_for_key_code(code)
    } else {
        None
    }
}

/// Map a touch button's element id to a control
pub fn control_for_button_id(id: &str) -> Option<Control> {
    TOUCH_BUTTONS
        .iter()
        .find(|(button, _)| *button == id)
        .map(|&(_, control)| control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(control_for_key_code("ArrowLeft"), Some(Control::Left));
        assert_eq!(control_for_key_code("ArrowRight"), Some(Control::Right));
        assert_eq!(control_for_key_code("Space"), Some(Control::Fire));
        assert_eq!(control_for_key_code("KeyA"), None);
    }

    #[test]
    fn test_keys_are_only_captured_while_running() {
        assert_eq!(captured_key("Space", true), Some(Control::Fire));
        assert_eq!(captured_key("Space", false), None);
        assert_eq!(captured_key("ArrowLeft", false), None);
        assert_eq!(captured_key("KeyA", true), None);
    }

    #[test]
    fn test_touch_and_keys_agree() {
        assert_eq!(
            control_for_button_id("left-button"),
            control_for_key_code("ArrowLeft")
        );
        assert_eq!(
            control_for_button_id("right-button"),
            control_for_key_code("ArrowRight")
        );
        assert_eq!(
            control_for_button_id("shoot-button"),
            control_for_key_code("Space")
        );
        assert_eq!(control_for_button_id("start-btn"), None);
    }
}
