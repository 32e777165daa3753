// SPDX-License-Identifier: MPL-2.0
//! Slide-out thumbnail drawer anchored to the trailing window edge.
//!
//! Only the chevron handle peeks out while closed; tapping it slides the
//! panel in and out. The body is an empty shelf for now. The open flag lives
//! in the transform state, so this module is view-only.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;

use iced::widget::{mouse_area, svg, tooltip, Container, Row, Space};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Element, Length, Padding,
};

/// Full panel width, of which only a slice is visible at a time.
const PANEL_WIDTH: f32 = 260.0;
/// Hidden portion while closed; leaves the handle peeking.
const CLOSED_SHIFT: f32 = 215.0;
/// Hidden portion while open.
const OPEN_SHIFT: f32 = 20.0;
/// Height of the chevron handle glyph.
const HANDLE_HEIGHT: f32 = 40.0;

/// Compact chevron pointing left, shown while the drawer is closed.
const CHEVRON_LEFT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round"><path d="M15 4 L11 12 L15 20"/></svg>"##;

/// Compact chevron pointing right, shown while the drawer is open.
const CHEVRON_RIGHT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round"><path d="M9 4 L13 12 L9 20"/></svg>"##;

/// Messages for the drawer overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The chevron handle was tapped.
    HandlePressed,
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewModel {
    /// Target state; the chevron flips as soon as this does.
    pub is_open: bool,
    /// Eased slide progress, 0 closed to 1 open.
    pub progress: f32,
    /// Entrance fade applied to the whole drawer.
    pub opacity: f32,
    /// Top inset, one twelfth of the window height.
    pub top_inset: f32,
}

/// Visible width of the drawer panel at the given slide progress.
#[must_use]
pub fn visible_width(progress: f32) -> f32 {
    let shift = CLOSED_SHIFT + (OPEN_SHIFT - CLOSED_SHIFT) * progress.clamp(0.0, 1.0);
    PANEL_WIDTH - shift
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Message> {
    let chevron_source = if model.is_open {
        CHEVRON_RIGHT_SVG
    } else {
        CHEVRON_LEFT_SVG
    };

    let chevron = svg::Svg::new(svg::Handle::from_memory(chevron_source.as_bytes()))
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(HANDLE_HEIGHT))
        .style(styles::overlay::glyph(styles::overlay::foreground(
            model.opacity,
        )));

    let handle = mouse_area(Container::new(chevron).padding(spacing::XS))
        .on_press(Message::HandlePressed)
        .interaction(mouse::Interaction::Pointer);

    let tooltip_key = if model.is_open {
        "drawer-close-tooltip"
    } else {
        "drawer-open-tooltip"
    };
    let handle = styles::tooltip::styled(handle, ctx.i18n.tr(tooltip_key), tooltip::Position::Left);

    let body = Row::new()
        .align_y(Vertical::Center)
        .push(handle)
        .push(Space::new().width(Length::Fill));

    let panel = Container::new(body)
        .width(Length::Fixed(visible_width(model.progress)))
        .padding([spacing::MD, spacing::XS])
        .style(styles::overlay::drawer_panel(model.opacity));

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            top: model.top_inset,
            ..Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn closed_drawer_leaves_the_handle_peeking() {
        assert_abs_diff_eq!(visible_width(0.0), 45.0);
    }

    #[test]
    fn open_drawer_shows_most_of_the_panel() {
        assert_abs_diff_eq!(visible_width(1.0), 240.0);
    }

    #[test]
    fn slide_progress_interpolates_width() {
        assert_abs_diff_eq!(visible_width(0.5), 142.5);
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        assert_abs_diff_eq!(visible_width(-1.0), visible_width(0.0));
        assert_abs_diff_eq!(visible_width(2.0), visible_width(1.0));
    }

    #[test]
    fn drawer_view_renders() {
        let i18n = I18n::default();
        let _element = view(
            ViewContext { i18n: &i18n },
            ViewModel {
                is_open: false,
                progress: 0.0,
                opacity: 1.0,
                top_inset: 60.0,
            },
        );
    }
}
