// SPDX-License-Identifier: MPL-2.0
//! Transform state management
//!
//! This module owns the zoom/pan transform applied to the displayed image:
//! - Zoom scale, kept inside `MIN_SCALE..=MAX_SCALE` between gestures
//! - Pan offset, stored verbatim with no bounds
//! - Entrance animation and drawer flags
//!
//! Gesture handlers call one operation per input event; each operation
//! applies its clamping rules synchronously and completely before the next
//! event is processed.

pub use crate::config::{DOUBLE_TAP_SCALE, MAX_SCALE, MIN_SCALE, SCALE_BUTTON_STEP};

use iced::Vector;

/// The zoom/pan state of the displayed image.
///
/// `scale` may leave the valid range while a pinch is live; the gesture-end
/// operations restore the `MIN_SCALE..=MAX_SCALE` invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    /// Multiplicative zoom factor applied to the image.
    pub scale: f32,

    /// Pan translation in view coordinates. Unbounded: panning may move the
    /// image arbitrarily far off-screen.
    pub offset: Vector,

    /// Drives the entrance fade-in. Set once on appear, never cleared.
    pub is_animating: bool,

    /// Whether the thumbnail drawer is slid open.
    pub is_drawer_open: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Vector::ZERO,
            is_animating: false,
            is_drawer_open: false,
        }
    }
}

impl TransformState {
    /// Marks the screen as appeared, starting the entrance fade.
    /// Re-invocation has no further effect.
    pub fn on_appear(&mut self) {
        self.is_animating = true;
    }

    /// Returns scale and offset to their rest values.
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.offset = Vector::ZERO;
    }

    /// Toggles between the rest scale and the double-tap zoom level.
    ///
    /// The rest state stores exactly `MIN_SCALE`, so the comparison is exact:
    /// any zoomed-in state (from any gesture) snaps back instead.
    pub fn on_double_tap(&mut self) {
        if self.scale == MIN_SCALE {
            self.scale = DOUBLE_TAP_SCALE;
        } else {
            self.reset();
        }
    }

    /// Stores the live drag translation. Each event replaces the offset
    /// wholesale; deltas are not accumulated here.
    pub fn on_drag_changed(&mut self, translation: Vector) {
        self.offset = translation;
    }

    /// Ends a drag: snaps the pan back to the origin only when not zoomed in.
    pub fn on_drag_ended(&mut self) {
        if !self.is_zoomed() {
            self.reset();
        }
    }

    /// Applies the live pinch magnification factor.
    ///
    /// The factor is assigned directly while the current scale is in range,
    /// so repeated pinches restart from the raw factor rather than compound.
    /// A scale that has already escaped the range is pulled back: above the
    /// maximum it clamps, below the minimum everything resets.
    ///
    /// Non-finite factors from malformed gesture input are ignored; they
    /// would otherwise slip through every range comparison below.
    pub fn on_magnify_changed(&mut self, factor: f32) {
        if !factor.is_finite() {
            return;
        }

        if (MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            self.scale = factor;
        } else if self.scale > MAX_SCALE {
            self.scale = MAX_SCALE;
        } else {
            self.reset();
        }
    }

    /// Ends a pinch: clamps an overshoot to the maximum, resets an
    /// undershoot to the rest state.
    pub fn on_magnify_ended(&mut self) {
        if self.scale > MAX_SCALE {
            self.scale = MAX_SCALE;
        } else if self.scale <= MIN_SCALE {
            self.reset();
        }
    }

    /// Steps the zoom down by one button increment. The reset check runs even
    /// when no decrement happened, so pressing at the rest scale still clears
    /// a pending pan.
    pub fn on_scale_down_button(&mut self) {
        if self.is_zoomed() {
            self.scale -= SCALE_BUTTON_STEP;
        }
        if self.scale <= MIN_SCALE {
            self.reset();
        }
    }

    /// Steps the zoom up by one button increment. The clamp runs even when no
    /// increment happened, pulling a transiently overshot scale back to the
    /// maximum.
    pub fn on_scale_up_button(&mut self) {
        if self.scale < MAX_SCALE {
            self.scale += SCALE_BUTTON_STEP;
        }
        if self.scale > MAX_SCALE {
            self.scale = MAX_SCALE;
        }
    }

    /// Flips the thumbnail drawer between open and closed.
    pub fn toggle_drawer(&mut self) {
        self.is_drawer_open = !self.is_drawer_open;
    }

    /// Whether the image is zoomed in past the rest scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_at_rest() {
        let state = TransformState::default();
        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
        assert!(!state.is_animating);
        assert!(!state.is_drawer_open);
    }

    #[test]
    fn on_appear_sets_animating_and_stays_set() {
        let mut state = TransformState::default();
        state.on_appear();
        assert!(state.is_animating);

        state.on_appear();
        assert!(state.is_animating);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = TransformState {
            scale: 3.0,
            offset: Vector::new(12.0, -7.0),
            ..TransformState::default()
        };

        state.reset();
        let after_once = state.clone();
        state.reset();

        assert_eq!(state, after_once);
        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn double_tap_is_a_two_state_toggle() {
        let mut state = TransformState::default();

        state.on_double_tap();
        assert_eq!(state.scale, DOUBLE_TAP_SCALE);

        state.on_double_tap();
        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn double_tap_from_intermediate_scale_resets() {
        let mut state = TransformState {
            scale: 2.5,
            offset: Vector::new(30.0, 40.0),
            ..TransformState::default()
        };

        state.on_double_tap();

        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn drag_changed_replaces_offset_absolutely() {
        let mut state = TransformState::default();

        state.on_drag_changed(Vector::new(15.0, -5.0));
        assert_eq!(state.offset, Vector::new(15.0, -5.0));

        // A later event replaces rather than accumulates.
        state.on_drag_changed(Vector::new(2.0, 3.0));
        assert_eq!(state.offset, Vector::new(2.0, 3.0));
    }

    #[test]
    fn drag_offset_is_not_clamped() {
        let mut state = TransformState {
            scale: 3.0,
            ..TransformState::default()
        };

        state.on_drag_changed(Vector::new(-90000.0, 54321.0));
        assert_eq!(state.offset, Vector::new(-90000.0, 54321.0));
    }

    #[test]
    fn drag_ended_at_rest_scale_snaps_back() {
        let mut state = TransformState::default();
        state.on_drag_changed(Vector::new(40.0, 40.0));

        state.on_drag_ended();

        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn drag_ended_while_zoomed_keeps_offset() {
        let mut state = TransformState {
            scale: 3.0,
            ..TransformState::default()
        };
        state.on_drag_changed(Vector::new(40.0, -10.0));

        state.on_drag_ended();

        assert_eq!(state.scale, 3.0);
        assert_eq!(state.offset, Vector::new(40.0, -10.0));
    }

    #[test]
    fn magnify_changed_assigns_factor_in_range() {
        let mut state = TransformState::default();

        state.on_magnify_changed(3.2);
        assert_eq!(state.scale, 3.2);

        // Non-cumulative: a fresh pinch factor replaces the scale outright.
        state.on_magnify_changed(1.5);
        assert_eq!(state.scale, 1.5);
    }

    #[test]
    fn magnify_changed_allows_transient_overshoot_then_clamps() {
        let mut state = TransformState::default();

        // Scale is in range, so the overshooting factor is stored verbatim.
        state.on_magnify_changed(7.3);
        assert_eq!(state.scale, 7.3);

        // The next event sees an out-of-range scale and clamps it.
        state.on_magnify_changed(7.5);
        assert_eq!(state.scale, MAX_SCALE);
    }

    #[test]
    fn magnify_changed_resets_after_undershoot() {
        let mut state = TransformState {
            offset: Vector::new(10.0, 10.0),
            ..TransformState::default()
        };

        state.on_magnify_changed(0.4);
        assert_eq!(state.scale, 0.4);

        state.on_magnify_changed(0.3);
        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn magnify_ended_clamps_overshoot() {
        let mut state = TransformState {
            scale: 7.3,
            ..TransformState::default()
        };

        state.on_magnify_ended();

        assert_eq!(state.scale, MAX_SCALE);
    }

    #[test]
    fn magnify_ended_resets_undershoot() {
        let mut state = TransformState {
            scale: 0.6,
            offset: Vector::new(5.0, 5.0),
            ..TransformState::default()
        };

        state.on_magnify_ended();

        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn magnify_ended_leaves_in_range_scale_untouched() {
        let mut state = TransformState {
            scale: 3.2,
            ..TransformState::default()
        };

        state.on_magnify_ended();

        assert_eq!(state.scale, 3.2);
    }

    #[test]
    fn non_finite_magnify_factors_are_ignored() {
        let mut state = TransformState {
            scale: 2.0,
            offset: Vector::new(1.0, 2.0),
            ..TransformState::default()
        };
        let before = state.clone();

        state.on_magnify_changed(f32::NAN);
        assert_eq!(state, before);

        state.on_magnify_changed(f32::INFINITY);
        assert_eq!(state, before);

        state.on_magnify_changed(f32::NEG_INFINITY);
        assert_eq!(state, before);
    }

    #[test]
    fn scale_up_button_five_times_saturates_at_max() {
        let mut state = TransformState::default();

        for _ in 0..5 {
            state.on_scale_up_button();
        }

        assert_eq!(state.scale, MAX_SCALE);
    }

    #[test]
    fn scale_down_button_from_two_triggers_reset() {
        let mut state = TransformState {
            scale: 2.0,
            offset: Vector::new(25.0, -30.0),
            ..TransformState::default()
        };

        state.on_scale_down_button();

        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn scale_down_button_at_rest_clears_a_pending_offset() {
        let mut state = TransformState::default();
        state.on_drag_changed(Vector::new(3.0, 4.0));

        state.on_scale_down_button();

        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn scale_up_button_clamps_a_transient_overshoot() {
        let mut state = TransformState::default();
        state.on_magnify_changed(7.3);
        assert_eq!(state.scale, 7.3);

        state.on_scale_up_button();

        assert_eq!(state.scale, MAX_SCALE);
    }

    #[test]
    fn scale_down_button_resets_a_transient_undershoot() {
        let mut state = TransformState::default();
        state.on_magnify_changed(0.4);
        state.on_drag_changed(Vector::new(9.0, 9.0));

        state.on_scale_down_button();

        assert_eq!(state.scale, MIN_SCALE);
        assert_eq!(state.offset, Vector::ZERO);
    }

    #[test]
    fn toggle_drawer_flips_back_and_forth() {
        let mut state = TransformState::default();

        state.toggle_drawer();
        assert!(state.is_drawer_open);

        state.toggle_drawer();
        assert!(!state.is_drawer_open);
    }

    #[test]
    fn pinch_then_pan_scenario_keeps_offset_while_zoomed() {
        let mut state = TransformState::default();

        state.on_magnify_changed(3.2);
        assert_eq!(state.scale, 3.2);

        state.on_magnify_ended();
        assert_eq!(state.scale, 3.2);

        state.on_drag_changed(Vector::new(40.0, -10.0));
        assert_eq!(state.offset, Vector::new(40.0, -10.0));

        state.on_drag_ended();
        assert_eq!(state.scale, 3.2);
        assert_eq!(state.offset, Vector::new(40.0, -10.0));
    }

    #[test]
    fn scale_stays_in_range_after_terminating_operations() {
        let factors = [0.01, 0.7, 1.0, 2.4, 4.99, 5.0, 6.8, 42.0];

        for &factor in &factors {
            let mut state = TransformState::default();
            state.on_magnify_changed(factor);
            state.on_magnify_ended();
            assert!(
                (MIN_SCALE..=MAX_SCALE).contains(&state.scale),
                "scale {} escaped the range after pinch with factor {}",
                state.scale,
                factor
            );
        }

        let mut state = TransformState::default();
        for _ in 0..12 {
            state.on_scale_up_button();
        }
        assert!(state.scale <= MAX_SCALE);
        for _ in 0..12 {
            state.on_scale_down_button();
        }
        assert!(state.scale >= MIN_SCALE);
    }

    #[test]
    fn is_zoomed_reflects_scale() {
        let mut state = TransformState::default();
        assert!(!state.is_zoomed());

        state.on_scale_up_button();
        assert!(state.is_zoomed());
    }
}
