// SPDX-License-Identifier: MPL-2.0
//! `iced_pinch` is a single-screen pinch-zoom image viewer built with the
//! Iced GUI framework.
//!
//! It renders one page and lets the user zoom and pan it with drags, double
//! taps, two-finger pinches, or Ctrl+wheel, with a live scale/offset readout
//! and a slide-out thumbnail drawer.

#![doc(html_root_url = "https://docs.rs/iced_pinch/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
