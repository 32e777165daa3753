// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the transform state (the one piece of real logic),
//! the gesture trackers that translate raw runtime events into transform
//! operations, the subordinate info-panel state, and the presentation
//! animation. Messages are handled synchronously and completely; the
//! transform is never touched from anywhere else.

use crate::config::ANIMATION_TICK_MS;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::state::animation::AnimationState;
use crate::ui::state::transform::TransformState;
use crate::ui::viewer::gestures::{
    DragTracker, PinchTracker, ReleaseOutcome, TapTracker, WheelPinchTracker,
};
use crate::ui::viewer::{self, controls, drawer, info_panel, pane};
use iced::{event, keyboard, mouse, touch, window, Element, Point, Size};
use std::time::Instant;

/// Pixel equivalent of one wheel line, for trackpads that report pixel deltas.
const WHEEL_PIXELS_PER_LINE: f32 = 20.0;

/// Messages emitted by viewer-related widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The screen became visible; starts the entrance fade.
    Appeared,
    /// The startup artwork finished loading (or failed).
    PageLoaded(Result<ImageData, Error>),
    Controls(controls::Message),
    InfoPanel(info_panel::Message),
    Drawer(drawer::Message),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Animation/long-press/wheel-settle heartbeat.
    Tick(Instant),
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The startup artwork failed to decode; the app logs the error while the
    /// viewer shows its fallback text.
    LoadFailed(Error),
    /// A long press toggled the info readout; the app persists the new
    /// visibility to the config file.
    InfoVisibilityChanged(bool),
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Effective theme luminance, used for the canvas backdrop.
    pub is_dark: bool,
}

/// Complete viewer component state.
pub struct State {
    image: Option<ImageData>,
    transform: TransformState,
    info_panel: info_panel::State,
    animation: AnimationState,

    drag: DragTracker,
    taps: TapTracker,
    pinch: PinchTracker,
    wheel_pinch: WheelPinchTracker,

    cursor_position: Option<Point>,
    ctrl_held: bool,
    window_size: Size,
    last_tick: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SHOW_INFO_PANEL)
    }
}

impl State {
    /// Creates the viewer with the given startup visibility for the info
    /// readout (from `[viewer] show_info_panel`).
    #[must_use]
    pub fn new(show_info_panel: bool) -> Self {
        Self {
            image: None,
            transform: TransformState::default(),
            info_panel: info_panel::State::new(show_info_panel),
            animation: AnimationState::new(show_info_panel),
            drag: DragTracker::default(),
            taps: TapTracker::default(),
            pinch: PinchTracker::default(),
            wheel_pinch: WheelPinchTracker::default(),
            cursor_position: None,
            ctrl_held: false,
            window_size: Size::new(
                crate::app::WINDOW_DEFAULT_WIDTH as f32,
                crate::app::WINDOW_DEFAULT_HEIGHT as f32,
            ),
            last_tick: None,
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Whether the numeric info readout is currently shown.
    #[must_use]
    pub fn is_info_visible(&self) -> bool {
        self.info_panel.is_visible()
    }

    /// True while any animation, held press, or live wheel pinch needs the
    /// tick subscription running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.animation.is_idle()
            || self.info_panel.is_hotspot_pressed()
            || self.wheel_pinch.is_active()
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Appeared => {
                self.transform.on_appear();
                self.animation.entrance.start();
                Effect::None
            }
            Message::PageLoaded(Ok(image)) => {
                self.image = Some(image);
                Effect::None
            }
            Message::PageLoaded(Err(error)) => Effect::LoadFailed(error),
            Message::Controls(msg) => {
                match msg {
                    controls::Message::ScaleDown => self.transform.on_scale_down_button(),
                    controls::Message::Reset => self.transform.reset(),
                    controls::Message::ScaleUp => self.transform.on_scale_up_button(),
                }
                self.ease_to_transform();
                Effect::None
            }
            Message::InfoPanel(msg) => {
                if self.info_panel.handle(msg) == info_panel::Effect::VisibilityChanged {
                    self.ease_info_opacity();
                    return Effect::InfoVisibilityChanged(self.info_panel.is_visible());
                }
                Effect::None
            }
            Message::Drawer(drawer::Message::HandlePressed) => {
                self.transform.toggle_drawer();
                self.animation.drawer.ease_to(if self.transform.is_drawer_open {
                    1.0
                } else {
                    0.0
                });
                Effect::None
            }
            Message::Tick(now) => self.on_tick(now),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn on_tick(&mut self, now: Instant) -> Effect {
        let dt_secs = self
            .last_tick
            .map_or(ANIMATION_TICK_MS as f32 / 1000.0, |last| {
                now.saturating_duration_since(last).as_secs_f32()
            });
        self.last_tick = Some(now);

        self.animation.advance(dt_secs);

        let mut effect = Effect::None;
        if self.info_panel.handle(info_panel::Message::Tick)
            == info_panel::Effect::VisibilityChanged
        {
            self.ease_info_opacity();
            effect = Effect::InfoVisibilityChanged(self.info_panel.is_visible());
        }

        if self.wheel_pinch.poll_settled() {
            self.transform.on_magnify_ended();
            self.ease_to_transform();
        }

        effect
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            event::Event::Touch(touch_event) => self.handle_touch_event(touch_event),
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard_event(keyboard_event),
            event::Event::Window(window::Event::Resized(size)) => {
                self.window_size = size;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) -> Effect {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if let Some(position) = self.cursor_position {
                    self.drag.on_press(position);
                }
            }
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                if let Some(translation) = self.drag.on_move(position) {
                    self.transform.on_drag_changed(translation);
                    self.snap_to_transform();
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let outcome = self.drag.on_release();
                self.finish_pointer(outcome);
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                // A press that leaves the window cannot tap; end any pan.
                if self.drag.is_pressed() {
                    if self.drag.is_dragging() {
                        self.transform.on_drag_ended();
                        self.ease_to_transform();
                    }
                    self.drag.cancel();
                }
            }
            mouse::Event::WheelScrolled { delta } if self.ctrl_held => {
                let steps = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / WHEEL_PIXELS_PER_LINE,
                };
                let factor = self.wheel_pinch.on_notch(steps);
                self.transform.on_magnify_changed(factor);
                self.snap_to_transform();
            }
            _ => {}
        }
        Effect::None
    }

    fn handle_touch_event(&mut self, event: touch::Event) -> Effect {
        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.pinch.on_finger_pressed(id, position) {
                    // Second finger landed: the press is a pinch, not a pan.
                    self.drag.cancel();
                } else if self.pinch.finger_count() == 1 {
                    self.drag.on_press(position);
                }
            }
            touch::Event::FingerMoved { id, position } => {
                if let Some(factor) = self.pinch.on_finger_moved(id, position) {
                    self.transform.on_magnify_changed(factor);
                    self.snap_to_transform();
                } else if !self.pinch.is_pinching() {
                    if let Some(translation) = self.drag.on_move(position) {
                        self.transform.on_drag_changed(translation);
                        self.snap_to_transform();
                    }
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                if self.pinch.on_finger_lifted(id) {
                    self.transform.on_magnify_ended();
                    self.ease_to_transform();
                } else if self.pinch.finger_count() == 0 {
                    let outcome = self.drag.on_release();
                    self.finish_pointer(outcome);
                }
            }
        }
        Effect::None
    }

    fn handle_keyboard_event(&mut self, event: keyboard::Event) -> Effect {
        match event {
            keyboard::Event::ModifiersChanged(modifiers) => {
                self.ctrl_held = modifiers.control();
            }
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                ..
            } => {
                match c.as_str() {
                    "+" | "=" => self.transform.on_scale_up_button(),
                    "-" => self.transform.on_scale_down_button(),
                    "0" => self.transform.reset(),
                    _ => return Effect::None,
                }
                self.ease_to_transform();
            }
            _ => {}
        }
        Effect::None
    }

    /// Resolves a pointer release: ends a pan or registers a tap, emitting
    /// the double-tap operation when two taps pair up.
    fn finish_pointer(&mut self, outcome: ReleaseOutcome) {
        match outcome {
            ReleaseOutcome::None => {}
            ReleaseOutcome::DragEnded => {
                self.transform.on_drag_ended();
                self.ease_to_transform();
            }
            ReleaseOutcome::Tap(position) => {
                if self.taps.register_tap(position) {
                    self.transform.on_double_tap();
                    self.ease_to_transform();
                }
            }
        }
    }

    /// Discrete changes glide to their targets.
    fn ease_to_transform(&mut self) {
        self.animation
            .ease_transform_to(self.transform.scale, self.transform.offset);
    }

    /// Live gestures track the pointer exactly.
    fn snap_to_transform(&mut self) {
        self.animation
            .snap_transform_to(self.transform.scale, self.transform.offset);
    }

    fn ease_info_opacity(&mut self) {
        self.animation.info_opacity.ease_to(if self.info_panel.is_visible() {
            1.0
        } else {
            0.0
        });
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let entrance_opacity = self.animation.entrance.opacity();

        viewer::view(viewer::ViewContext {
            i18n: env.i18n,
            backdrop: crate::ui::theme::viewer_surface_color(env.is_dark),
            fallback_text: crate::ui::theme::viewer_text_color(env.is_dark),
            pane: self.image.as_ref().map(|image| pane::ViewModel {
                image,
                scale: self.animation.presented_scale(),
                offset: self.animation.presented_offset(),
                entrance_opacity,
                entrance_rise: self.animation.entrance.rise_px(),
                is_dragging: self.drag.is_dragging(),
            }),
            info: info_panel::ViewModel {
                scale: self.transform.scale,
                offset: self.transform.offset,
                panel_opacity: entrance_opacity,
                readout_opacity: self.animation.info_opacity.value(),
            },
            controls: controls::ViewModel {
                opacity: entrance_opacity,
            },
            drawer: drawer::ViewModel {
                is_open: self.transform.is_drawer_open,
                progress: self.animation.drawer.value(),
                opacity: entrance_opacity,
                top_inset: self.window_size.height / 12.0,
            },
        })
    }
}
