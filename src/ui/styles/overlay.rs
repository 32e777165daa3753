// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the scale controls bar, the info readout, and the
//! thumbnail drawer.
//!
//! Every overlay fades in with the entrance animation, so the style helpers
//! take the current presentation alpha and multiply it into their colors.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::{container, svg, text};
use iced::{Background, Border, Color, Theme};

/// Applies a presentation alpha on top of a color's own alpha.
#[must_use]
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// White overlay foreground at the given presentation alpha.
#[must_use]
pub fn foreground(alpha: f32) -> Color {
    faded(WHITE, alpha)
}

fn bar_background(alpha: f32) -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM * alpha,
        ..BLACK
    }
}

/// Generic translucent bar behind overlay content.
pub fn bar(rad: f32, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(bar_background(alpha))),
        text_color: Some(foreground(alpha)),
        border: Border {
            radius: rad.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Panel surface for the thumbnail drawer.
pub fn drawer_panel(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(bar_background(alpha))),
        text_color: Some(foreground(alpha)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Tint for inline SVG glyphs in overlays.
pub fn glyph(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Foreground style for overlay text.
pub fn label(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_multiplies_alphas() {
        let half = Color {
            a: 0.5,
            ..Color::WHITE
        };
        let result = faded(half, 0.5);
        assert!((result.a - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn bar_background_follows_presentation_alpha() {
        let theme = Theme::Dark;
        let opaque = bar(radius::MD, 1.0)(&theme);
        let hidden = bar(radius::MD, 0.0)(&theme);

        let Some(Background::Color(full)) = opaque.background else {
            panic!("expected a color background");
        };
        let Some(Background::Color(gone)) = hidden.background else {
            panic!("expected a color background");
        };

        assert!((full.a - opacity::OVERLAY_MEDIUM).abs() < f32::EPSILON);
        assert!(gone.a.abs() < f32::EPSILON);
    }
}
