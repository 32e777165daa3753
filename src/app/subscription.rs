// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw runtime events feed the viewer's gesture trackers, and a periodic
//! tick drives animations, the long-press check, and the wheel-pinch settle
//! poll. The tick is only subscribed while something actually needs it.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes native events to the viewer component.
///
/// Wheel scroll is forwarded unconditionally so Ctrl+wheel pinching works
/// even over widgets that would otherwise capture it. Window resizes are
/// forwarded regardless of status because the drawer inset depends on the
/// window height. Everything else is forwarded only when no widget claimed
/// the event.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if matches!(
            event,
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
                | event::Event::Window(iced::window::Event::Resized(_))
        ) {
            return Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }));
        }

        match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            })),
            event::Status::Captured => None,
        }
    })
}

/// Creates the animation heartbeat while the viewer needs one.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|now| Message::Viewer(component::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
