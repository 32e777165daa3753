// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the active theme's luminance so they stay readable over
//! the canvas and the translucent overlays alike.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Bubble behind the tooltip text.
pub fn bubble(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let bg = palette.background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color, border_color) = if is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
            Color::from_rgba(0.7, 0.7, 0.7, 0.3),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
            Color::from_rgba(0.3, 0.3, 0.3, 0.3),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip using the shared bubble style.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_has_background_and_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = bubble(&theme);
            assert!(style.background.is_some());
            assert!(style.text_color.is_some());
        }
    }

    #[test]
    fn bubble_inverts_theme_luminance() {
        let Some(Background::Color(on_light)) = bubble(&Theme::Light).background else {
            panic!("expected a color background");
        };
        let Some(Background::Color(on_dark)) = bubble(&Theme::Dark).background else {
            panic!("expected a color background");
        };

        assert!(on_light.r < 0.5);
        assert!(on_dark.r > 0.5);
    }
}
