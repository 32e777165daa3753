// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - The single viewer screen with its gesture handling
//! - [`state`] - Transform and animation state
//! - [`styles`] - Centralized styling (buttons, overlays, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod viewer;
