// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that paints the page through the live transform.
//!
//! The page is drawn on a full-window canvas: fitted to the window with a
//! margin, scaled about the window center, then shifted by the pan offset.
//! Anything pushed past the window edges is clipped, so the unclamped offset
//! never disturbs layout.

use crate::media::ImageData;
use crate::ui::design_tokens::spacing;
use crate::ui::viewer::component::Message;
use iced::widget::{canvas, mouse_area};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme, Vector};

/// Margin between the fitted page and the window edges.
const FIT_MARGIN: f32 = spacing::MD;

/// Presentation values for one frame of the pane.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub image: &'a ImageData,
    pub scale: f32,
    pub offset: Vector,
    /// Entrance fade applied to the page.
    pub entrance_opacity: f32,
    /// Remaining upward travel of the entrance slide, in pixels.
    pub entrance_rise: f32,
    pub is_dragging: bool,
}

pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let page = canvas::Canvas::new(PageView {
        image: model.image,
        scale: model.scale,
        offset: model.offset,
        opacity: model.entrance_opacity,
        rise: model.entrance_rise,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(page).interaction(interaction).into()
}

/// Canvas program that paints the page with the current transform.
struct PageView<'a> {
    image: &'a ImageData,
    scale: f32,
    offset: Vector,
    opacity: f32,
    rise: f32,
}

impl<Message> canvas::Program<Message> for PageView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let available = Size::new(
            bounds.width - 2.0 * FIT_MARGIN,
            bounds.height - 2.0 * FIT_MARGIN,
        );
        let fitted = fit_size(self.image.width, self.image.height, available);
        let drawn = Size::new(fitted.width * self.scale, fitted.height * self.scale);

        if drawn.width <= 0.0 || drawn.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Scaling about the window center keeps the page centered at rest.
        let top_left = Point::new(
            (bounds.width - drawn.width) / 2.0 + self.offset.x,
            (bounds.height - drawn.height) / 2.0 + self.offset.y + self.rise,
        );

        frame.draw_image(
            Rectangle::new(top_left, drawn),
            canvas::Image::new(self.image.handle.clone()).opacity(self.opacity),
        );

        vec![frame.into_geometry()]
    }
}

/// Largest size with the image's aspect ratio that fits in `available`.
fn fit_size(width: u32, height: u32, available: Size) -> Size {
    if width == 0 || height == 0 || available.width <= 0.0 || available.height <= 0.0 {
        return Size::ZERO;
    }

    let scale_x = available.width / width as f32;
    let scale_y = available.height / height as f32;
    let scale = scale_x.min(scale_y);

    if !scale.is_finite() || scale <= 0.0 {
        return Size::ZERO;
    }

    Size::new(width as f32 * scale, height as f32 * scale)
}
