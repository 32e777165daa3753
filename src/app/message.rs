// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`. The single variant forwards
/// viewer component messages while keeping one update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to open instead of the bundled page.
    pub file_path: Option<String>,
}
