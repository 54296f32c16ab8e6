//! Playfield sizing from the available viewport

use crate::sim::Playfield;
use crate::tuning::Tuning;

/// Use the full cap when the viewport exceeds it, otherwise a share of the viewport
pub fn playfield_for_viewport(
    viewport_width: f32,
    viewport_height: f32,
    tuning: &Tuning,
) -> Playfield {
    let width = if viewport_width > tuning.max_playfield_width {
        tuning.max_playfield_width
    } else {
        viewport_width.max(0.0) * tuning.viewport_width_share
    };
    let height = if viewport_height > tuning.max_playfield_height {
        tuning.max_playfield_height
    } else {
        viewport_height.max(0.0) * tuning.viewport_height_share
    };
    Playfield::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_viewport_is_capped() {
        let field = playfield_for_viewport(1920.0, 1080.0, &Tuning::default());
        assert_eq!(field, Playfield::new(800.0, 600.0));
    }

    #[test]
    fn test_small_viewport_is_scaled() {
        let field = playfield_for_viewport(400.0, 500.0, &Tuning::default());
        assert!((field.width - 380.0).abs() < 1e-3);
        assert!((field.height - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_overridden_shares_and_caps_apply_together() {
        let tuning = Tuning {
            max_playfield_width: 1000.0,
            viewport_width_share: 0.5,
            viewport_height_share: 1.0,
            ..Tuning::default()
        };
        let field = playfield_for_viewport(900.0, 500.0, &tuning);
        assert!((field.width - 450.0).abs() < 1e-3);
        assert!((field.height - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_exact_cap_is_scaled() {
        // Not strictly larger than the cap, so the share applies
        let field = playfield_for_viewport(800.0, 600.0, &Tuning::default());
        assert!((field.width - 760.0).abs() < 1e-3);
        assert!((field.height - 480.0).abs() < 1e-3);
    }
}
