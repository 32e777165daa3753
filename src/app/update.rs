// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Viewer messages are handled entirely inside the component; this module
//! only reacts to the effects the component reports back.

use super::Message;
use crate::config;
use crate::ui::viewer::component;
use iced::Task;

/// Mutable references to the application state an update may touch.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut component::State,
}

/// Forwards a message to the viewer component and applies its effect.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    match ctx.viewer.handle_message(message) {
        component::Effect::None => {}
        component::Effect::LoadFailed(error) => {
            eprintln!("Failed to load the page: {error}");
        }
        component::Effect::InfoVisibilityChanged(visible) => {
            if let Err(error) = persist_info_panel_visibility(visible) {
                eprintln!("Failed to save the settings: {error}");
            }
        }
    }

    Task::none()
}

/// Stores the info readout visibility in the config file so the next launch
/// starts where this one left off.
pub(super) fn persist_info_panel_visibility(visible: bool) -> crate::error::Result<()> {
    let (mut config, _) = config::load();
    config.viewer.show_info_panel = Some(visible);
    config::save(&config)
}
