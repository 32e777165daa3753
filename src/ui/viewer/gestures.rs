// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the viewer.
//!
//! The trackers in this module turn raw pointer, touch, and wheel events into
//! discrete gesture outcomes (drag translations, taps, pinch factors). They
//! hold only recognition state; what the outcomes do to the image transform
//! is decided by the component that owns them.

use crate::config::{DOUBLE_TAP_WINDOW_MS, DRAG_SLOP_PX, WHEEL_PINCH_SETTLE_MS, WHEEL_PINCH_STEP};

use iced::touch;
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Floor for the emulated wheel-pinch factor so a long scroll-down cannot
/// drive it to zero or below.
const MIN_WHEEL_FACTOR: f32 = 0.05;

fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// What a pointer release amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// No press was being tracked.
    None,
    /// The press had crossed the slop radius; a pan just finished.
    DragEnded,
    /// The press stayed within the slop radius; a clean tap at this point.
    Tap(Point),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    crossed_slop: bool,
}

/// Tracks one pointer (left mouse button or single finger) from press to
/// release, separating pans from taps with a slop radius.
///
/// While the press stays within `DRAG_SLOP_PX` of its origin it is still a
/// candidate tap; once it leaves, every subsequent move reports the
/// displacement from the origin and the eventual release is a drag end.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    press: Option<Press>,
}

impl DragTracker {
    /// Begins tracking a press at `position`.
    pub fn on_press(&mut self, position: Point) {
        self.press = Some(Press {
            origin: position,
            crossed_slop: false,
        });
    }

    /// Feeds a pointer move. Returns the drag translation (displacement from
    /// the press origin) once the slop radius has been crossed.
    pub fn on_move(&mut self, position: Point) -> Option<Vector> {
        let press = self.press.as_mut()?;

        if !press.crossed_slop && distance(press.origin, position) > DRAG_SLOP_PX {
            press.crossed_slop = true;
        }

        if press.crossed_slop {
            Some(Vector::new(
                position.x - press.origin.x,
                position.y - press.origin.y,
            ))
        } else {
            None
        }
    }

    /// Ends the press and reports what it was.
    pub fn on_release(&mut self) -> ReleaseOutcome {
        match self.press.take() {
            None => ReleaseOutcome::None,
            Some(press) if press.crossed_slop => ReleaseOutcome::DragEnded,
            Some(press) => ReleaseOutcome::Tap(press.origin),
        }
    }

    /// Abandons the press without an outcome. Used when a second finger
    /// turns the press into a pinch.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// True once the tracked press has crossed the slop radius.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|press| press.crossed_slop)
    }

    /// True while any press is being tracked, dragging or not.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

/// Detects double taps from the stream of clean taps.
///
/// Two taps count as a double tap when the second lands within the
/// double-tap window and within the slop radius of the first.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    last_tap: Option<(Instant, Point)>,
}

impl TapTracker {
    /// Records a tap and reports whether it completed a double tap.
    pub fn register_tap(&mut self, position: Point) -> bool {
        let now = Instant::now();
        let window = Duration::from_millis(DOUBLE_TAP_WINDOW_MS);

        let is_double = self.last_tap.is_some_and(|(at, point)| {
            now.duration_since(at) <= window && distance(point, position) <= DRAG_SLOP_PX
        });

        if is_double {
            // Swallow the pair so a third tap starts a fresh sequence.
            self.last_tap = None;
        } else {
            self.last_tap = Some((now, position));
        }

        is_double
    }
}

/// Tracks touch fingers and reduces two of them to a magnification factor.
///
/// The factor is `current_distance / initial_distance`, where the initial
/// distance is snapshotted the moment the second finger lands, so the
/// gesture always starts at factor 1.0. Fingers beyond the second are kept
/// up to date but do not influence the factor.
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    fingers: Vec<(touch::Finger, Point)>,
    initial_distance: Option<f32>,
}

impl PinchTracker {
    /// Registers a finger landing. Returns true when this press started a
    /// pinch (the finger count just reached two).
    pub fn on_finger_pressed(&mut self, finger: touch::Finger, position: Point) -> bool {
        if let Some(entry) = self.fingers.iter_mut().find(|(id, _)| *id == finger) {
            entry.1 = position;
            return false;
        }

        self.fingers.push((finger, position));

        if self.fingers.len() == 2 {
            let span = distance(self.fingers[0].1, self.fingers[1].1);
            if span > f32::EPSILON {
                self.initial_distance = Some(span);
                return true;
            }
        }

        false
    }

    /// Updates a finger position. Returns the live magnification factor
    /// while a pinch is active.
    pub fn on_finger_moved(&mut self, finger: touch::Finger, position: Point) -> Option<f32> {
        let entry = self.fingers.iter_mut().find(|(id, _)| *id == finger)?;
        entry.1 = position;

        let initial = self.initial_distance?;
        if self.fingers.len() < 2 {
            return None;
        }

        Some(distance(self.fingers[0].1, self.fingers[1].1) / initial)
    }

    /// Removes a finger. Returns true when this lift ended an active pinch
    /// (the finger count dropped below two).
    pub fn on_finger_lifted(&mut self, finger: touch::Finger) -> bool {
        self.fingers.retain(|(id, _)| *id != finger);

        if self.initial_distance.is_some() && self.fingers.len() < 2 {
            self.initial_distance = None;
            return true;
        }

        false
    }

    /// True while two or more fingers are down and a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.initial_distance.is_some()
    }

    /// Number of fingers currently tracked.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }
}

/// Emulates a pinch for mouse users via Ctrl+wheel.
///
/// The first notch starts a live factor at 1.0; each notch nudges it by a
/// fixed step. The gesture has no release event of its own, so it ends when
/// no further notch arrives within the settle window (polled from the tick
/// subscription).
#[derive(Debug, Clone, Default)]
pub struct WheelPinchTracker {
    factor: f32,
    last_notch: Option<Instant>,
}

impl WheelPinchTracker {
    /// Applies one wheel movement (in normalized notch steps) and returns
    /// the new live factor.
    pub fn on_notch(&mut self, steps: f32) -> f32 {
        if self.last_notch.is_none() {
            self.factor = 1.0;
        }

        self.factor = (self.factor + steps * WHEEL_PINCH_STEP).max(MIN_WHEEL_FACTOR);
        self.last_notch = Some(Instant::now());
        self.factor
    }

    /// Polls for the settle timeout. Returns true exactly once per gesture,
    /// when the quiet period has elapsed and the pinch should end.
    pub fn poll_settled(&mut self) -> bool {
        let settled = self.last_notch.is_some_and(|at| {
            at.elapsed() >= Duration::from_millis(WHEEL_PINCH_SETTLE_MS)
        });

        if settled {
            self.last_notch = None;
        }

        settled
    }

    /// True while a wheel pinch is live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_notch.is_some()
    }

    /// Backdates the last notch past the settle window, for tests in the
    /// owning component that cannot reach `last_notch` directly.
    #[cfg(test)]
    pub(crate) fn expire_settle_window(&mut self) {
        if let Some(at) = self.last_notch.as_mut() {
            *at = Instant::now() - Duration::from_millis(WHEEL_PINCH_SETTLE_MS + 50);
        }
    }
}
