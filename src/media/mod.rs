// SPDX-License-Identifier: MPL-2.0
//! Media handling: the displayed image and the bundled page it comes from.

pub mod image;
pub mod page;

// Re-export commonly used types
pub use image::{load_image, ImageData};
pub use page::{load_page, Page};
