// SPDX-License-Identifier: MPL-2.0
//! Bottom control bar: scale down, reset, and scale up.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, tooltip, Container, Row, Text},
    Element,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ScaleDown,
    Reset,
    ScaleUp,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewModel {
    /// Entrance fade for the whole bar.
    pub opacity: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Message> {
    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(control_button(
            ctx.i18n,
            "viewer-scale-down-button",
            "viewer-scale-down-tooltip",
            Message::ScaleDown,
            model.opacity,
        ))
        .push(control_button(
            ctx.i18n,
            "viewer-scale-reset-button",
            "viewer-scale-reset-tooltip",
            Message::Reset,
            model.opacity,
        ))
        .push(control_button(
            ctx.i18n,
            "viewer-scale-up-button",
            "viewer-scale-up-tooltip",
            Message::ScaleUp,
            model.opacity,
        ));

    Container::new(bar)
        .padding([spacing::SM, spacing::LG])
        .style(styles::overlay::bar(radius::LG, model.opacity))
        .into()
}

fn control_button<'a>(
    i18n: &'a I18n,
    label_key: &'static str,
    tip_key: &'static str,
    message: Message,
    opacity: f32,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(label_key)).size(typography::TITLE_MD);

    let control = button(label)
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(opacity));

    styles::tooltip::styled(control, i18n.tr(tip_key), tooltip::Position::Top).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n }, ViewModel { opacity: 1.0 });
    }
}
