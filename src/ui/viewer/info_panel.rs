// SPDX-License-Identifier: MPL-2.0
//! Info panel overlay: live scale/offset readout with a long-press hotspot.
//!
//! The panel owns its own visibility flag, independent of the transform
//! state. Holding the hotspot glyph for the long-press duration toggles the
//! numeric readout; the hotspot itself is always shown.

use crate::config::LONG_PRESS_MS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;

use iced::widget::{mouse_area, svg, tooltip, Container, Row, Space, Text};
use iced::{alignment::Vertical, Color, Element, Length, Vector};
use std::time::{Duration, Instant};

/// Concentric-circle hotspot glyph.
const HOTSPOT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.6"><circle cx="12" cy="12" r="9"/><circle cx="12" cy="12" r="4.5"/></svg>"##;

/// Diagonal expand arrows, shown next to the scale value.
const SCALE_ARROWS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.8" stroke-linecap="round"><path d="M4 10 V4 H10"/><path d="M20 14 V20 H14"/><path d="M4 4 L10.5 10.5"/><path d="M20 20 L13.5 13.5"/></svg>"##;

/// Horizontal arrows, shown next to the x offset.
const HORIZONTAL_ARROWS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.8" stroke-linecap="round"><path d="M3 12 H21"/><path d="M7 8 L3 12 L7 16"/><path d="M17 8 L21 12 L17 16"/></svg>"##;

/// Vertical arrows, shown next to the y offset.
const VERTICAL_ARROWS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="1.8" stroke-linecap="round"><path d="M12 3 V21"/><path d="M8 7 L12 3 L16 7"/><path d="M8 17 L12 21 L16 17"/></svg>"##;

/// Info panel state: readout visibility plus the live hotspot press.
#[derive(Debug, Clone)]
pub struct State {
    is_visible: bool,
    hotspot_pressed_at: Option<Instant>,
}

/// Messages for the info panel sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer went down on the hotspot glyph.
    HotspotPressed,
    /// Pointer lifted from the hotspot before the long press completed.
    HotspotReleased,
    /// Periodic tick; drives the held-duration check.
    Tick,
}

/// Effects produced by info panel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The long press completed and the readout visibility flipped.
    VisibilityChanged,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SHOW_INFO_PANEL)
    }
}

impl State {
    /// Creates the panel with the given initial readout visibility.
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self {
            is_visible: visible,
            hotspot_pressed_at: None,
        }
    }

    /// Handle an info panel message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::HotspotPressed => {
                self.hotspot_pressed_at = Some(Instant::now());
                Effect::None
            }
            Message::HotspotReleased => {
                self.hotspot_pressed_at = None;
                Effect::None
            }
            Message::Tick => {
                let held_long_enough = self
                    .hotspot_pressed_at
                    .is_some_and(|at| at.elapsed() >= Duration::from_millis(LONG_PRESS_MS));

                if held_long_enough {
                    // Consume the press so one hold toggles exactly once.
                    self.hotspot_pressed_at = None;
                    self.toggle_visibility();
                    Effect::VisibilityChanged
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Flips the readout visibility.
    pub fn toggle_visibility(&mut self) {
        self.is_visible = !self.is_visible;
    }

    /// Whether the numeric readout is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// True while the hotspot is held down.
    #[must_use]
    pub fn is_hotspot_pressed(&self) -> bool {
        self.hotspot_pressed_at.is_some()
    }

    /// Shifts a live press back in time, for tests in the owning component
    /// that cannot reach `hotspot_pressed_at` directly.
    #[cfg(test)]
    pub(crate) fn backdate_press(&mut self, by: Duration) {
        if let Some(at) = self.hotspot_pressed_at.as_mut() {
            *at -= by;
        }
    }
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Live values the readout displays, plus the presentation opacities.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel {
    pub scale: f32,
    pub offset: Vector,
    /// Entrance fade applied to the whole panel.
    pub panel_opacity: f32,
    /// Eased visibility of the numeric readout only.
    pub readout_opacity: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Message> {
    let glyph_color = styles::overlay::foreground(model.panel_opacity);

    let hotspot_icon = svg::Svg::new(svg::Handle::from_memory(HOTSPOT_SVG.as_bytes()))
        .width(Length::Fixed(sizing::ICON_LG))
        .height(Length::Fixed(sizing::ICON_LG))
        .style(styles::overlay::glyph(glyph_color));

    let hotspot = mouse_area(hotspot_icon)
        .on_press(Message::HotspotPressed)
        .on_release(Message::HotspotReleased);

    let hotspot = styles::tooltip::styled(
        hotspot,
        ctx.i18n.tr("info-panel-hotspot-tooltip"),
        tooltip::Position::Bottom,
    );

    let readout_alpha = model.panel_opacity * model.readout_opacity;
    let readout_color = styles::overlay::foreground(readout_alpha);

    let readout = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(readout_glyph(SCALE_ARROWS_SVG, readout_color))
        .push(readout_value(format_number(model.scale), readout_color))
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(readout_glyph(HORIZONTAL_ARROWS_SVG, readout_color))
        .push(readout_value(format_number(model.offset.x), readout_color))
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(readout_glyph(VERTICAL_ARROWS_SVG, readout_color))
        .push(readout_value(format_number(model.offset.y), readout_color));

    let readout_bar = Container::new(readout)
        .padding(spacing::XS)
        .max_width(420.0)
        .style(styles::overlay::bar(radius::MD, readout_alpha));

    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(hotspot)
        .push(Space::new().width(Length::Fill))
        .push(readout_bar)
        .into()
}

fn readout_glyph<'a>(source: &'static str, color: Color) -> Element<'a, Message> {
    svg::Svg::new(svg::Handle::from_memory(source.as_bytes()))
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(styles::overlay::glyph(color))
        .into()
}

fn readout_value<'a>(value: String, color: Color) -> Element<'a, Message> {
    Text::new(value)
        .size(typography::CAPTION)
        .style(styles::overlay::label(color))
        .into()
}

/// Formats a readout value: integers verbatim, fractions with one decimal.
fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
