// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers over the theme color scheme.

use crate::ui::theming::ColorScheme;
use iced::Color;

/// Surface color behind the page for the effective theme luminance.
#[must_use]
pub fn viewer_surface_color(is_dark: bool) -> Color {
    ColorScheme::for_mode(is_dark).surface
}

/// Text color for copy drawn directly on the viewer surface.
#[must_use]
pub fn viewer_text_color(is_dark: bool) -> Color {
    ColorScheme::for_mode(is_dark).on_surface
}
