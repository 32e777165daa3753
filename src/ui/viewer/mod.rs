// SPDX-License-Identifier: MPL-2.0
//! Single-screen viewer: the transformed page with its overlays.
//!
//! The screen is a stack. The page canvas fills the window at the bottom,
//! the info panel sits along the top edge, the scale controls float at the
//! bottom center, and the thumbnail drawer hugs the trailing edge.

pub mod component;
pub mod controls;
pub mod drawer;
pub mod gestures;
pub mod info_panel;
pub mod pane;

use self::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, text, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Surface color behind the page, per the effective theme.
    pub backdrop: Color,
    /// Color of copy drawn directly on the backdrop.
    pub fallback_text: Color,
    /// Page presentation, or `None` while nothing is loaded.
    pub pane: Option<pane::ViewModel<'a>>,
    pub info: info_panel::ViewModel,
    pub controls: controls::ViewModel,
    pub drawer: drawer::ViewModel,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = ctx.backdrop;

    let fallback_text = ctx.fallback_text;

    let base: Element<'_, Message> = match ctx.pane {
        Some(model) => pane::view(model),
        None => Container::new(
            Text::new(ctx.i18n.tr("viewer-image-unavailable"))
                .size(typography::BODY)
                .style(move |_theme| text::Style {
                    color: Some(fallback_text),
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let surface = Container::new(base)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(backdrop)),
            ..Default::default()
        });

    let info_bar = Container::new(
        info_panel::view(info_panel::ViewContext { i18n: ctx.i18n }, ctx.info)
            .map(Message::InfoPanel),
    )
    .width(Length::Fill)
    .padding(spacing::MD);

    let controls_bar = Container::new(
        controls::view(controls::ViewContext { i18n: ctx.i18n }, ctx.controls)
            .map(Message::Controls),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(spacing::LG);

    let drawer_layer =
        drawer::view(drawer::ViewContext { i18n: ctx.i18n }, ctx.drawer).map(Message::Drawer);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface)
        .push(info_bar)
        .push(controls_bar)
        .push(drawer_layer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use iced::Vector;

    fn context<'a>(i18n: &'a I18n, pane: Option<pane::ViewModel<'a>>) -> ViewContext<'a> {
        ViewContext {
            i18n,
            backdrop: Color::BLACK,
            fallback_text: Color::WHITE,
            pane,
            info: info_panel::ViewModel {
                scale: 1.0,
                offset: Vector::ZERO,
                panel_opacity: 1.0,
                readout_opacity: 1.0,
            },
            controls: controls::ViewModel { opacity: 1.0 },
            drawer: drawer::ViewModel {
                is_open: false,
                progress: 0.0,
                opacity: 1.0,
                top_inset: 60.0,
            },
        }
    }

    #[test]
    fn viewer_without_a_page_renders_the_fallback() {
        let i18n = I18n::default();
        let _element = view(context(&i18n, None));
    }

    #[test]
    fn viewer_with_a_page_renders() {
        let i18n = I18n::default();
        let image = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let _element = view(context(
            &i18n,
            Some(pane::ViewModel {
                image: &image,
                scale: 1.0,
                offset: Vector::ZERO,
                entrance_opacity: 1.0,
                entrance_rise: 0.0,
                is_dragging: false,
            }),
        ));
    }
}
