// SPDX-License-Identifier: MPL-2.0
//! The page model: which bundled artwork the viewer displays.

use crate::error::{Error, Result};
use crate::media::image::{rasterize_svg, ImageData};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/pages/"]
struct PageAsset;

/// A displayable page bundled with the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: u32,
    pub image_name: String,
}

impl Page {
    #[must_use]
    pub fn new(id: u32, image_name: impl Into<String>) -> Self {
        Self {
            id,
            image_name: image_name.into(),
        }
    }

    /// The page shown when no image path is given on the command line.
    #[must_use]
    pub fn default_page() -> Self {
        Self::new(1, "page-1.svg")
    }
}

/// Load a bundled page's artwork into an RGBA image.
///
/// # Errors
///
/// Returns [`Error::Io`] if the named asset is not embedded, or an
/// [`Error::Svg`] if rasterization fails.
pub fn load_page(page: &Page) -> Result<ImageData> {
    let asset = PageAsset::get(&page.image_name)
        .ok_or_else(|| Error::Io(format!("missing bundled page: {}", page.image_name)))?;
    rasterize_svg(asset.data.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_bundled() {
        let page = Page::default_page();
        let data = load_page(&page).expect("bundled page should rasterize");
        assert_eq!(data.width, 600);
        assert_eq!(data.height, 900);
    }

    #[test]
    fn unknown_page_errors() {
        let page = Page::new(99, "page-99.svg");
        match load_page(&page) {
            Err(Error::Io(message)) => assert!(message.contains("page-99")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
