// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom scale bounds and button step
//! - **Gestures**: Slop radius and timing windows for gesture recognition
//! - **Animation**: Entrance fade and settle interpolation timings
//! - **Info panel**: Overlay visibility default

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of the image at rest (1.0 = original size).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum allowed zoom scale.
pub const MAX_SCALE: f32 = 5.0;

/// Scale applied by a double tap from the rest state.
pub const DOUBLE_TAP_SCALE: f32 = 5.0;

/// Scale increment applied by the plus/minus control buttons.
pub const SCALE_BUTTON_STEP: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Pointer movement (px) below which a press still counts as a tap.
pub const DRAG_SLOP_PX: f32 = 8.0;

/// Maximum gap between two taps to register a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 350;

/// Hold duration after which a press becomes a long press.
pub const LONG_PRESS_MS: u64 = 1000;

/// Quiet period after the last Ctrl+wheel notch that ends a wheel pinch.
pub const WHEEL_PINCH_SETTLE_MS: u64 = 250;

/// Scale factor applied per Ctrl+wheel notch during a wheel pinch.
pub const WHEEL_PINCH_STEP: f32 = 0.1;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the entrance fade-in.
pub const ENTRANCE_FADE_MS: u64 = 1000;

/// Exponential approach rate (per second) for settling presented values
/// toward their targets. Higher is snappier.
pub const SETTLE_RATE: f32 = 4.0;

/// Interval of the animation tick subscription while anything is moving.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Info Panel Defaults
// ==========================================================================

/// Whether the numeric info readout starts revealed. Hidden by default;
/// a long press on the hotspot reveals it.
pub const DEFAULT_SHOW_INFO_PANEL: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE >= MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE <= MAX_SCALE);
    assert!(SCALE_BUTTON_STEP > 0.0);
    assert!(SCALE_BUTTON_STEP <= MAX_SCALE - MIN_SCALE);

    // Gesture validation
    assert!(DRAG_SLOP_PX > 0.0);
    assert!(DOUBLE_TAP_WINDOW_MS > 0);
    assert!(LONG_PRESS_MS > DOUBLE_TAP_WINDOW_MS);
    assert!(WHEEL_PINCH_SETTLE_MS > 0);
    assert!(WHEEL_PINCH_STEP > 0.0);

    // Animation validation
    assert!(ENTRANCE_FADE_MS > 0);
    assert!(SETTLE_RATE > 0.0);
    assert!(ANIMATION_TICK_MS > 0);
};
