// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the transform and presentation state logic separated
//! from the viewer component, following the principle of separation of
//! concerns.

pub mod animation;
pub mod transform;

// Re-export commonly used types for convenience
pub use animation::AnimationState;
pub use transform::TransformState;
