// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::component;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub is_dark_theme: bool,
}

/// Renders the single viewer screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    ctx.viewer
        .view(component::ViewEnv {
            i18n: ctx.i18n,
            is_dark: ctx.is_dark_theme,
        })
        .map(Message::Viewer)
}
