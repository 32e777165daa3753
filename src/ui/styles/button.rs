// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton overlay (contrôles du zoom).
///
/// `fade` is the entrance presentation alpha; it multiplies every color so
/// the buttons appear together with the bar they sit on.
pub fn overlay(fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_SUBTLE,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha * fade,
                ..BLACK
            })),
            text_color: Color { a: fade, ..WHITE },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(1.0);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn entrance_fade_scales_every_alpha() {
        let theme = Theme::Dark;
        let style = overlay(0.5)(&theme, button::Status::Active);

        let Some(Background::Color(bg)) = style.background else {
            panic!("expected a color background");
        };

        assert!((bg.a - opacity::OVERLAY_SUBTLE * 0.5).abs() < f32::EPSILON);
        assert!((style.text_color.a - 0.5).abs() < f32::EPSILON);
    }
}
