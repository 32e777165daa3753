// SPDX-License-Identifier: MPL-2.0
//! Presentation animation state
//!
//! Interpolates the values actually rendered each frame toward the targets
//! held by the transform state. The transform state is authoritative; this
//! module only smooths how its values reach the screen and never feeds back
//! into gesture decisions.
//!
//! Everything here is advanced by an explicit time delta from the tick
//! subscription, so the easing math stays deterministic under test.

use crate::config::{ENTRANCE_FADE_MS, SETTLE_RATE};

use iced::Vector;

/// Remaining distance below which a value snaps to its target and the
/// animation is considered settled.
const SETTLE_EPSILON: f32 = 1e-3;

/// Upward displacement (px) the image travels during the entrance fade.
const ENTRANCE_RISE_PX: f32 = 24.0;

/// A single presented value easing toward a target.
///
/// Uses a frame-rate independent exponential approach: each step closes a
/// fixed fraction of the remaining distance per unit time, which reads as an
/// ease-out and keeps retargeting mid-flight smooth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
}

impl AnimatedValue {
    /// Creates a value already at rest on `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Returns the presented value for this frame.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value being approached.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Starts easing toward `target` from the current presented value.
    pub fn ease_to(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps both presented value and target to `value` with no easing.
    /// Live gestures use this so the image tracks the pointer exactly.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Advances the presented value by `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        if self.is_settled() {
            return;
        }

        let remaining = self.target - self.current;
        if remaining.abs() <= SETTLE_EPSILON {
            self.current = self.target;
            return;
        }

        // 1 - e^(-rate * dt) of the remaining distance per step.
        let step = 1.0 - (-SETTLE_RATE * dt_secs).exp();
        self.current += remaining * step;

        if (self.target - self.current).abs() <= SETTLE_EPSILON {
            self.current = self.target;
        }
    }

    /// True once the presented value has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// The one-shot entrance fade, started by the appear event.
///
/// Opacity rises linearly from 0 to 1 over the fade duration; the image also
/// rises a few pixels into place over the same window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFade {
    elapsed_secs: f32,
    started: bool,
}

impl Default for EntranceFade {
    fn default() -> Self {
        Self {
            elapsed_secs: 0.0,
            started: false,
        }
    }
}

impl EntranceFade {
    /// Begins the fade. Later calls have no effect.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Advances the fade clock by `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        if self.started && !self.is_finished() {
            self.elapsed_secs += dt_secs;
        }
    }

    /// Linear completion fraction in `0.0..=1.0`. Zero until started.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if !self.started {
            return 0.0;
        }
        let duration_secs = ENTRANCE_FADE_MS as f32 / 1000.0;
        (self.elapsed_secs / duration_secs).clamp(0.0, 1.0)
    }

    /// Image opacity for this frame.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.progress()
    }

    /// Remaining upward displacement of the image, shrinking to zero as the
    /// fade completes.
    #[must_use]
    pub fn rise_px(&self) -> f32 {
        ENTRANCE_RISE_PX * (1.0 - self.progress())
    }

    /// True once the fade has run its full duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.progress() >= 1.0
    }

    /// True while the fade still needs ticks to make progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started && !self.is_finished()
    }
}

/// All presented values for the viewer screen.
///
/// The component snaps scale/offset during live gestures and eases them for
/// discrete changes (buttons, double tap, resets). Drawer position and info
/// panel opacity always ease.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub scale: AnimatedValue,
    pub offset_x: AnimatedValue,
    pub offset_y: AnimatedValue,
    /// 0.0 closed, 1.0 fully open.
    pub drawer: AnimatedValue,
    pub info_opacity: AnimatedValue,
    pub entrance: EntranceFade,
}

impl AnimationState {
    /// Presentation at rest, with the info panel opacity matching whether the
    /// panel starts visible.
    #[must_use]
    pub fn new(info_visible: bool) -> Self {
        Self {
            scale: AnimatedValue::new(crate::config::MIN_SCALE),
            offset_x: AnimatedValue::new(0.0),
            offset_y: AnimatedValue::new(0.0),
            drawer: AnimatedValue::new(0.0),
            info_opacity: AnimatedValue::new(if info_visible { 1.0 } else { 0.0 }),
            entrance: EntranceFade::default(),
        }
    }

    /// Eases the transform values toward `scale`/`offset`.
    pub fn ease_transform_to(&mut self, scale: f32, offset: Vector) {
        self.scale.ease_to(scale);
        self.offset_x.ease_to(offset.x);
        self.offset_y.ease_to(offset.y);
    }

    /// Snaps the transform values to `scale`/`offset` for live gestures.
    pub fn snap_transform_to(&mut self, scale: f32, offset: Vector) {
        self.scale.snap_to(scale);
        self.offset_x.snap_to(offset.x);
        self.offset_y.snap_to(offset.y);
    }

    /// The offset to render this frame.
    #[must_use]
    pub fn presented_offset(&self) -> Vector {
        Vector::new(self.offset_x.value(), self.offset_y.value())
    }

    /// The scale to render this frame.
    #[must_use]
    pub fn presented_scale(&self) -> f32 {
        self.scale.value()
    }

    /// Advances every animated value by `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        self.scale.advance(dt_secs);
        self.offset_x.advance(dt_secs);
        self.offset_y.advance(dt_secs);
        self.drawer.advance(dt_secs);
        self.info_opacity.advance(dt_secs);
        self.entrance.advance(dt_secs);
    }

    /// True when nothing needs further ticks; the tick subscription idles.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scale.is_settled()
            && self.offset_x.is_settled()
            && self.offset_y.is_settled()
            && self.drawer.is_settled()
            && self.info_opacity.is_settled()
            && !self.entrance.is_running()
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SHOW_INFO_PANEL)
    }
}
